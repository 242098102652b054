//! Screen layout

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen areas
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar with title, navigation, and identity
    pub header: Rect,
    /// Active panel content
    pub body: Rect,
    /// Status bar with key hints and notices
    pub status: Rect,
}

/// Split the terminal into header / body / status
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Center a `width` x `height` rect within `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

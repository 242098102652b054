//! Status bar: key hints, notices, and the auth readout

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use adeck_app::state::{AppState, InputMode};
use adeck_core::Panel;

use crate::theme::styles;

/// Bottom status bar
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.input_mode {
            InputMode::Search => "type to filter  [Enter] apply  [Esc] clear",
            InputMode::PartnerForm => "[Tab] next field  [Enter] confirm  [Esc] cancel",
            InputMode::TicketForm => "[Tab] category  [Enter] transmit  [Esc] cancel",
            InputMode::Reply => "[Enter] send  [Esc] discard",
            InputMode::ConfirmQuit => "[y] quit  [n] stay",
            InputMode::Normal => match self.state.session.panel() {
                Panel::List => "[/] search  [v] vote  [j/k] move  [q] quit",
                Panel::Tickets => "[n] new  [r] reply  [c] close  [j/k] move  [q] quit",
                Panel::Admin => "[Tab] tabs  [d] delete  [a] add partner  [j/k] move  [q] quit",
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let auth = self
            .state
            .session
            .identity()
            .map(|u| u.email.clone())
            .unwrap_or_else(|| "Guest_Node".to_string());

        let mut spans = Vec::new();
        match &self.state.notice {
            Some(notice) => {
                spans.push(Span::styled(notice.clone(), styles::accent()));
                spans.push(Span::styled("  //  ", styles::text_muted()));
            }
            None => {
                spans.push(Span::styled(self.hints(), styles::text_secondary()));
                spans.push(Span::styled("  //  ", styles::text_muted()));
            }
        }
        spans.push(Span::styled(format!("Auth: {auth}"), styles::text_muted()));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

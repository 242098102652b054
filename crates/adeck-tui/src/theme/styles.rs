//! Semantic style builders for the neon arena theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use adeck_core::{ServerStatus, TicketStatus};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_alt() -> Style {
    Style::default().fg(palette::ACCENT_ALT)
}

// --- Selection ---
pub fn selected_row() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

// --- Panels ---

/// Bordered panel block, accent border when focused
pub fn panel_block(title: &str, active: bool) -> Block<'_> {
    let border = if active {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(title)
}

// --- Status colors ---

pub fn server_status(status: ServerStatus) -> Style {
    match status {
        ServerStatus::Online => Style::default().fg(palette::STATUS_GREEN),
        ServerStatus::Offline => Style::default().fg(palette::STATUS_RED),
    }
}

pub fn ticket_status(status: TicketStatus) -> Style {
    match status {
        TicketStatus::Open => Style::default().fg(palette::TICKET_OPEN),
        TicketStatus::Responded => Style::default().fg(palette::TICKET_RESPONDED),
        TicketStatus::Closed => Style::default().fg(palette::TICKET_CLOSED),
    }
}

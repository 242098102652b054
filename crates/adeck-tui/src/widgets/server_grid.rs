//! Server grid: searchable server directory with voting

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use adeck_core::Server;

use crate::theme::styles;
use crate::widgets::fit;

/// The public server directory panel
pub struct ServerGrid<'a> {
    servers: Vec<&'a Server>,
    selected: usize,
    query: &'a str,
    searching: bool,
}

impl<'a> ServerGrid<'a> {
    pub fn new(servers: Vec<&'a Server>, selected: usize) -> Self {
        Self {
            servers,
            selected,
            query: "",
            searching: false,
        }
    }

    /// Show the search box content. `searching` adds the input cursor.
    pub fn search(mut self, query: &'a str, searching: bool) -> Self {
        self.query = query;
        self.searching = searching;
        self
    }
}

impl Widget for ServerGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Server Grid", true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();

        // Search box line, shown while typing or when a filter is active
        if self.searching || !self.query.is_empty() {
            let cursor = if self.searching { "█" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("Search Node: ", styles::text_muted()),
                Span::styled(format!("{}{}", self.query, cursor), styles::accent()),
            ]));
            lines.push(Line::default());
        }

        if self.servers.is_empty() {
            lines.push(Line::from(Span::styled(
                "No nodes match the current search.",
                styles::text_muted(),
            )));
        }

        let name_width = (inner.width as usize).saturating_sub(46).max(16);
        for (i, server) in self.servers.iter().enumerate() {
            let marker = if i == self.selected { "▸ " } else { "  " };
            let name_style = if i == self.selected {
                styles::selected_row()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(fit(&server.name, name_width), name_style),
                Span::raw(" "),
                Span::styled(fit(&server.game, 6), styles::accent_alt()),
                Span::styled(fit(&server.map, 16), styles::text_secondary()),
                Span::styled(
                    format!("{:>3}/{:<3} ", server.players, server.max_players),
                    styles::text_secondary(),
                ),
                Span::styled(format!("▲ {:<6}", server.votes), styles::text_primary()),
                Span::styled(
                    if server.is_online() { " online" } else { " offline" },
                    styles::server_status(server.status),
                ),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

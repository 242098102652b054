//! Support ticket terminal: channel list, thread view, composer

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use adeck_app::state::{AppState, InputMode, TicketFormState};
use adeck_core::Ticket;

use crate::theme::styles;
use crate::widgets::fit;

/// The support ticket panel: visible tickets on the left, the selected
/// thread on the right
pub struct TicketsPanel<'a> {
    state: &'a AppState,
}

impl<'a> TicketsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn author_label(&self, user_id: &str, is_admin: bool) -> String {
        if is_admin {
            return "BLG_ADMIN".to_string();
        }
        self.state
            .users
            .get(user_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| user_id.to_string())
    }

    fn render_list(&self, tickets: &[&Ticket], area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Communication Channels", true);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        if tickets.is_empty() {
            lines.push(Line::from(Span::styled(
                "No open channels. [n] new ticket",
                styles::text_muted(),
            )));
        }
        let subject_width = (inner.width as usize).saturating_sub(18).max(8);
        for (i, ticket) in tickets.iter().enumerate() {
            let marker = if i == self.state.tickets_view.selected {
                "▸ "
            } else {
                "  "
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(
                    fit(&ticket.status.to_string(), 10),
                    styles::ticket_status(ticket.status),
                ),
                Span::styled(format!("#{:<4}", ticket.id), styles::text_muted()),
                Span::styled(fit(&ticket.subject, subject_width), styles::text_primary()),
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_thread(&self, ticket: Option<&Ticket>, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Channel", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let Some(ticket) = ticket else {
            Paragraph::new(Line::from(Span::styled(
                "Awaiting Data Connection",
                styles::text_muted(),
            )))
            .render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(&*ticket.subject, styles::accent_bold())),
            Line::from(vec![
                Span::styled("CATEGORY: ", styles::text_muted()),
                Span::styled(ticket.category.to_string(), styles::accent_alt()),
                Span::styled(" | STATUS: ", styles::text_muted()),
                Span::styled(
                    ticket.status.to_string(),
                    styles::ticket_status(ticket.status),
                ),
            ]),
            Line::default(),
        ];

        if ticket.replies.is_empty() {
            lines.push(Line::from(Span::styled(
                "No transmissions yet.",
                styles::text_muted(),
            )));
        }
        for reply in &ticket.replies {
            let author = self.author_label(&reply.user_id, reply.is_admin);
            let author_style = if reply.is_admin {
                styles::accent()
            } else {
                styles::text_secondary()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} // {}", reply.created_at.format("%H:%M"), author),
                    author_style,
                ),
            ]));
            lines.push(Line::from(Span::styled(
                &*reply.message,
                styles::text_primary(),
            )));
            lines.push(Line::default());
        }

        if self.state.input_mode == InputMode::Reply {
            lines.push(Line::from(vec![
                Span::styled("> ", styles::accent()),
                Span::styled(
                    format!("{}█", self.state.tickets_view.reply_buffer),
                    styles::text_primary(),
                ),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl Widget for TicketsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let tickets = self.state.visible_tickets();
        let selected = tickets.get(self.state.tickets_view.selected).copied();
        self.render_list(&tickets, chunks[0], buf);
        self.render_thread(selected, chunks[1], buf);
    }
}

/// Modal overlay for the new-ticket form
pub struct TicketForm<'a> {
    form: &'a TicketFormState,
}

impl<'a> TicketForm<'a> {
    pub fn new(form: &'a TicketFormState) -> Self {
        Self { form }
    }
}

impl Widget for TicketForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("NEW TICKET", true);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("Subject Header: ", styles::text_muted()),
                Span::styled(format!("{}█", self.form.subject), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled("Protocol Type:  ", styles::text_muted()),
                Span::styled(format!("< {} >", self.form.category), styles::accent_alt()),
                Span::styled("  (Tab to cycle)", styles::text_muted()),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "[Enter] transmit   [Esc] cancel",
                styles::text_muted(),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

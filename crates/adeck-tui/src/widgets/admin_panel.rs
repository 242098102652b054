//! Admin back office: servers, users, tickets, and partners tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use adeck_app::state::{AdminTab, AppState, InputMode, PartnerField};

use crate::theme::styles;
use crate::widgets::fit;

/// The admin control panel ("System Core")
pub struct AdminPanel<'a> {
    state: &'a AppState,
}

impl<'a> AdminPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn tab_bar(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for tab in AdminTab::ALL {
            let style = if tab == self.state.admin_view.tab {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
            spans.push(Span::styled("|", styles::text_muted()));
        }
        spans.pop();
        Line::from(spans)
    }

    fn marker(&self, index: usize) -> &'static str {
        if index == self.state.admin_view.selected {
            "▸ "
        } else {
            "  "
        }
    }

    fn servers_lines(&self, width: usize) -> Vec<Line<'_>> {
        let name_width = width.saturating_sub(44).max(16);
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "  {}{}{}",
                fit("IDENTITY", name_width),
                fit(" ENDPOINT", 22),
                " ACTIVITY"
            ),
            styles::text_muted(),
        ))];
        for (i, server) in self.state.servers.iter().enumerate() {
            let style = if i == self.state.admin_view.selected {
                styles::selected_row()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(self.marker(i), styles::accent()),
                Span::styled(fit(&server.name, name_width), style),
                Span::styled(fit(&server.endpoint(), 22), styles::accent()),
                Span::styled(
                    format!("{} / {}", server.players, server.max_players),
                    styles::text_secondary(),
                ),
            ]));
        }
        lines
    }

    fn users_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for (i, user) in self.state.users.iter().enumerate() {
            let style = if i == self.state.admin_view.selected {
                styles::selected_row()
            } else {
                styles::text_primary()
            };
            let role_style = if user.is_admin() {
                styles::accent_alt()
            } else {
                styles::text_muted()
            };
            lines.push(Line::from(vec![
                Span::styled(self.marker(i), styles::accent()),
                Span::styled(fit(&user.name, 20), style),
                Span::styled(fit(&user.email, 28), styles::text_secondary()),
                Span::styled(format!("[{}]", user.role), role_style),
            ]));
        }
        lines
    }

    fn tickets_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for (i, ticket) in self.state.tickets.iter().enumerate() {
            let style = if i == self.state.admin_view.selected {
                styles::selected_row()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(self.marker(i), styles::accent()),
                Span::styled(
                    fit(&ticket.status.to_string(), 10),
                    styles::ticket_status(ticket.status),
                ),
                Span::styled(format!("#{:<4}", ticket.id), styles::text_muted()),
                Span::styled(fit(&ticket.subject, 36), style),
                Span::styled(ticket.category.to_string(), styles::accent_alt()),
            ]));
        }
        lines
    }

    fn partners_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        // Entry form, inline above the banner list while it is open
        if self.state.input_mode == InputMode::PartnerForm {
            let form = &self.state.admin_view.partner_form;
            for (field, value) in [
                (PartnerField::Name, &form.name),
                (PartnerField::Image, &form.image_url),
                (PartnerField::Link, &form.link),
            ] {
                let focused = form.focused == field;
                let cursor = if focused { "█" } else { "" };
                let label_style = if focused {
                    styles::accent()
                } else {
                    styles::text_muted()
                };
                lines.push(Line::from(vec![
                    Span::styled(fit(field.label(), 20), label_style),
                    Span::styled(format!("{value}{cursor}"), styles::text_primary()),
                ]));
            }
            lines.push(Line::from(Span::styled(
                "[Enter] confirm entry   [Tab] next field   [Esc] cancel",
                styles::text_muted(),
            )));
            lines.push(Line::default());
        }

        if self.state.partners.is_empty() {
            lines.push(Line::from(Span::styled(
                "No partners linked.",
                styles::text_muted(),
            )));
        }
        for (i, partner) in self.state.partners.iter().enumerate() {
            let style = if i == self.state.admin_view.selected {
                styles::selected_row()
            } else {
                styles::text_primary()
            };
            let link = if partner.link.is_empty() {
                "No Link"
            } else {
                &partner.link
            };
            lines.push(Line::from(vec![
                Span::styled(self.marker(i), styles::accent()),
                Span::styled(fit(&partner.name, 24), style),
                Span::styled(fit(link, 24), styles::text_secondary()),
                Span::styled(&*partner.image_url, styles::text_muted()),
            ]));
        }
        lines
    }
}

impl Widget for AdminPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("BLG Control Center", true);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![self.tab_bar(), Line::default()];
        lines.extend(match self.state.admin_view.tab {
            AdminTab::Servers => self.servers_lines(inner.width as usize),
            AdminTab::Users => self.users_lines(),
            AdminTab::Tickets => self.tickets_lines(),
            AdminTab::Partners => self.partners_lines(),
        });

        Paragraph::new(lines).render(inner, buf);
    }
}

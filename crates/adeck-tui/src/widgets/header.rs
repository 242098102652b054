//! Header bar with title, panel navigation, and identity

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use adeck_app::Session;
use adeck_core::Panel;

use crate::theme::styles;

/// Main header showing the app title, reachable panels, and who is signed in
pub struct MainHeader<'a> {
    session: &'a Session,
}

impl<'a> MainHeader<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn nav_span(&self, label: &'static str, panel: Panel) -> Span<'static> {
        if self.session.panel() == panel {
            Span::styled(label, styles::accent_bold())
        } else {
            Span::styled(label, styles::text_secondary())
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled("BLG ", styles::text_primary()),
            Span::styled("ARENA", styles::accent_bold()),
            Span::raw("   "),
            self.nav_span("[1] Server Grid", Panel::List),
        ];

        if self.session.is_authenticated() {
            spans.push(Span::raw("  "));
            spans.push(self.nav_span("[2] Support Terminal", Panel::Tickets));
        }
        if self.session.is_admin() {
            spans.push(Span::raw("  "));
            spans.push(self.nav_span("[3] System Core", Panel::Admin));
        }

        spans.push(Span::raw("   "));
        match self.session.identity() {
            Some(user) => {
                spans.push(Span::styled(
                    format!("{} ({})", user.name, user.role),
                    styles::accent_alt(),
                ));
                spans.push(Span::styled("  [o] logout", styles::text_muted()));
            }
            None => {
                spans.push(Span::styled("[l] Sync Admin", styles::text_muted()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

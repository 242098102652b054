//! Quit confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Centered quit confirmation box
pub struct ConfirmDialog;

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Disconnect", true);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                "Leave the arena?",
                styles::text_primary(),
            )),
            Line::from(vec![
                Span::styled("[y]", styles::accent()),
                Span::styled(" quit   ", styles::text_secondary()),
                Span::styled("[n]", styles::accent()),
                Span::styled(" stay", styles::text_secondary()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

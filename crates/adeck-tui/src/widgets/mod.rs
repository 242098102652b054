//! Widgets for the Arena Deck TUI

mod admin_panel;
mod confirm_dialog;
mod header;
mod server_grid;
mod status_bar;
mod tickets_panel;

pub use admin_panel::AdminPanel;
pub use confirm_dialog::ConfirmDialog;
pub use header::MainHeader;
pub use server_grid::ServerGrid;
pub use status_bar::StatusBar;
pub use tickets_panel::{TicketForm, TicketsPanel};

use unicode_width::UnicodeWidthStr;

/// Truncate or pad `text` to exactly `width` display columns
pub(crate) fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    while UnicodeWidthStr::width(out.as_str()) < width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("abc", 6), "abc   ");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        assert_eq!(fit("abcdefgh", 4), "abcd");
    }

    #[test]
    fn test_fit_handles_wide_chars() {
        // Full-width characters occupy two columns
        let fitted = fit("ｗｉｄｅ", 5);
        assert_eq!(UnicodeWidthStr::width(fitted.as_str()), 5);
    }
}

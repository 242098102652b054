//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use adeck_app::state::{AppState, InputMode};
use adeck_core::Panel;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    AdminPanel, ConfirmDialog, MainHeader, ServerGrid, StatusBar, TicketForm, TicketsPanel,
};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(MainHeader::new(&state.session), areas.header);

    match state.session.panel() {
        Panel::List => {
            let grid = ServerGrid::new(state.visible_servers(), state.list_view.selected)
                .search(&state.search_query, state.input_mode == InputMode::Search);
            frame.render_widget(grid, areas.body);
        }
        Panel::Tickets => {
            frame.render_widget(TicketsPanel::new(state), areas.body);
        }
        Panel::Admin => {
            frame.render_widget(AdminPanel::new(state), areas.body);
        }
    }

    frame.render_widget(StatusBar::new(state), areas.status);

    // Overlays
    if state.input_mode == InputMode::TicketForm {
        if let Some(form) = &state.tickets_view.form {
            let modal = layout::centered(areas.body, 60, 7);
            clear(frame, modal);
            frame.render_widget(TicketForm::new(form), modal);
        }
    }

    if state.input_mode == InputMode::ConfirmQuit {
        let modal = layout::centered(area, 30, 4);
        clear(frame, modal);
        frame.render_widget(ConfirmDialog, modal);
    }
}

fn clear(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );
}

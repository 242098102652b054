//! Run loop: draw, poll, process

use ratatui::DefaultTerminal;

use adeck_app::{process_message, AppState, Settings};
use adeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Owns terminal setup/teardown; the terminal is restored on every exit
/// path, including panics.
pub fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut terminal =
        ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_settings(settings);
    info!("TUI started");

    let result = run_loop(&mut terminal, &mut state);
    ratatui::restore();
    info!("TUI stopped");
    result
}

fn run_loop(terminal: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}

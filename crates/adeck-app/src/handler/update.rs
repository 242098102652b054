//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations for the admin panel and the ticket flows live in
//! the `admin` and `tickets` submodules; session, search, and vote
//! transitions are small enough to stay inline here.

use adeck_core::prelude::*;

use crate::auth::Credentials;
use crate::message::Message;
use crate::state::{AppPhase, AppState, InputMode};

use super::{admin, keys::handle_key, tickets, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(panel) => {
            match state.session.navigate(panel) {
                Ok(()) => {
                    state.notice = None;
                    state.clamp_selection();
                }
                Err(e) => state.report(&e),
            }
            UpdateResult::none()
        }

        Message::Login => {
            // The "Sync Admin" action: sign in with the configured pair
            let credentials = Credentials::new(
                state.settings.auth.admin_email.clone(),
                state.settings.auth.admin_secret.clone(),
            );
            match state
                .session
                .login(&state.authenticator, &credentials, &state.users)
            {
                Ok(user) => {
                    let name = user.name.clone();
                    state.set_notice(format!("Synced as {name}"));
                }
                Err(e) => state.report(&e),
            }
            UpdateResult::none()
        }

        Message::Logout => {
            state.session.logout();
            state.input_mode = InputMode::Normal;
            state.notice = None;
            state.clamp_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Server Grid Messages
        // ─────────────────────────────────────────────────────────
        Message::SearchStart => {
            if state.session.panel() == adeck_core::Panel::List {
                state.input_mode = InputMode::Search;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.search_query = text;
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::SearchSubmit => {
            state.input_mode = InputMode::Normal;
            UpdateResult::none()
        }

        Message::SearchCancel => {
            state.search_query.clear();
            state.input_mode = InputMode::Normal;
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::Vote => {
            if let Some(id) = state.selected_server_id() {
                match state.servers.vote(&id) {
                    Ok(total) => {
                        state.set_notice(format!("Vote logged for node {id} // {total} total"));
                    }
                    Err(e) => state.report(&e),
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }

        Message::SelectPrev => {
            state.select_prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Admin Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::AdminTabNext => {
            state.admin_view.next_tab();
            UpdateResult::none()
        }

        Message::AdminTabPrev => {
            state.admin_view.prev_tab();
            UpdateResult::none()
        }

        Message::DeleteSelected => admin::handle_delete_selected(state),

        Message::PartnerFormOpen => admin::handle_partner_form_open(state),
        Message::PartnerFormInput { text } => admin::handle_partner_form_input(state, text),
        Message::PartnerFormNextField => admin::handle_partner_form_next_field(state),
        Message::PartnerFormSubmit => admin::handle_partner_form_submit(state),
        Message::PartnerFormCancel => admin::handle_partner_form_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Ticket Messages
        // ─────────────────────────────────────────────────────────
        Message::TicketFormOpen => tickets::handle_ticket_form_open(state),
        Message::TicketFormInput { text } => tickets::handle_ticket_form_input(state, text),
        Message::TicketFormCycleCategory => tickets::handle_ticket_form_cycle_category(state),
        Message::TicketFormSubmit => tickets::handle_ticket_form_submit(state),
        Message::TicketFormCancel => tickets::handle_ticket_form_cancel(state),

        Message::ReplyStart => tickets::handle_reply_start(state),
        Message::ReplyInput { text } => tickets::handle_reply_input(state, text),
        Message::ReplySubmit => tickets::handle_reply_submit(state),
        Message::ReplyCancel => tickets::handle_reply_cancel(state),

        Message::CloseTicket => tickets::handle_close_ticket(state),
    }
}

/// Drain a message and all of its follow-ups through `update`.
///
/// The run loop calls this once per polled event; follow-up messages are
/// processed in the same pass so the next draw sees a settled state.
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        trace!("update: {:?}", m);
        msg = update(state, m).message;
    }
}

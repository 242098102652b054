//! Ticket flow handlers: new-ticket form, reply composer, close

use crate::state::{AppState, InputMode, TicketFormState};

use super::UpdateResult;

/// Open the new-ticket form. Requires a signed-in identity.
pub fn handle_ticket_form_open(state: &mut AppState) -> UpdateResult {
    if !state.session.is_authenticated() {
        state.set_notice("Sign in to open a ticket");
        return UpdateResult::none();
    }
    state.tickets_view.form = Some(TicketFormState::default());
    state.input_mode = InputMode::TicketForm;
    UpdateResult::none()
}

/// Replace the subject text
pub fn handle_ticket_form_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(form) = state.tickets_view.form.as_mut() {
        form.subject = text;
    }
    UpdateResult::none()
}

/// Cycle the ticket category (wraps)
pub fn handle_ticket_form_cycle_category(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.tickets_view.form.as_mut() {
        form.category = form.category.next();
    }
    UpdateResult::none()
}

/// Validate the form and open the ticket.
/// An empty subject keeps the form open with the reason on the notice line.
pub fn handle_ticket_form_submit(state: &mut AppState) -> UpdateResult {
    let Some(user_id) = state.session.identity().map(|u| u.id.clone()) else {
        state.set_notice("Sign in to open a ticket");
        return UpdateResult::none();
    };
    let Some(form) = state.tickets_view.form.clone() else {
        return UpdateResult::none();
    };

    match state.tickets.open(user_id, form.subject, form.category) {
        Ok(ticket) => {
            let id = ticket.id.clone();
            state.tickets_view.form = None;
            state.input_mode = InputMode::Normal;
            state.set_notice(format!("Ticket {id} transmitted"));
            // Move the cursor onto the new ticket (last visible row)
            state.tickets_view.selected = state.visible_tickets().len().saturating_sub(1);
        }
        Err(e) => state.report(&e),
    }
    UpdateResult::none()
}

/// Discard the form
pub fn handle_ticket_form_cancel(state: &mut AppState) -> UpdateResult {
    state.tickets_view.form = None;
    state.input_mode = InputMode::Normal;
    UpdateResult::none()
}

/// Start composing a reply to the selected ticket
pub fn handle_reply_start(state: &mut AppState) -> UpdateResult {
    if !state.session.is_authenticated() {
        state.set_notice("Sign in to reply");
        return UpdateResult::none();
    }
    if state.selected_ticket_id().is_none() {
        state.set_notice("No ticket selected");
        return UpdateResult::none();
    }
    state.tickets_view.reply_buffer.clear();
    state.input_mode = InputMode::Reply;
    UpdateResult::none()
}

/// Replace the reply composer text
pub fn handle_reply_input(state: &mut AppState, text: String) -> UpdateResult {
    state.tickets_view.reply_buffer = text;
    UpdateResult::none()
}

/// Append the composed reply to the selected ticket's thread.
/// Failures keep the composer open with the reason on the notice line.
pub fn handle_reply_submit(state: &mut AppState) -> UpdateResult {
    let Some(ticket_id) = state.selected_ticket_id() else {
        state.input_mode = InputMode::Normal;
        return UpdateResult::none();
    };
    let Some(user) = state.session.identity() else {
        state.input_mode = InputMode::Normal;
        return UpdateResult::none();
    };
    let (user_id, is_admin) = (user.id.clone(), user.is_admin());
    let message = state.tickets_view.reply_buffer.clone();

    match state.tickets.reply(&ticket_id, user_id, message, is_admin) {
        Ok(_) => {
            state.tickets_view.reply_buffer.clear();
            state.input_mode = InputMode::Normal;
            state.set_notice(format!("Reply transmitted to {ticket_id}"));
        }
        Err(e) => state.report(&e),
    }
    UpdateResult::none()
}

/// Discard the composed reply
pub fn handle_reply_cancel(state: &mut AppState) -> UpdateResult {
    state.tickets_view.reply_buffer.clear();
    state.input_mode = InputMode::Normal;
    UpdateResult::none()
}

/// Close the selected ticket. Admin only; closing is terminal.
pub fn handle_close_ticket(state: &mut AppState) -> UpdateResult {
    if !state.session.is_admin() {
        state.set_notice("Admin access required");
        return UpdateResult::none();
    }
    if let Some(ticket_id) = state.selected_ticket_id() {
        match state.tickets.close(&ticket_id) {
            Ok(()) => state.set_notice(format!("Ticket {ticket_id} closed")),
            Err(e) => state.report(&e),
        }
    }
    UpdateResult::none()
}

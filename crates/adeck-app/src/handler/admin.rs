//! Admin panel handlers: row deletes and the partner entry form
//!
//! Every handler re-checks the admin role. The key layer never offers these
//! bindings outside the admin panel, but the role check must not depend on
//! which caller produced the message.

use crate::state::{AdminTab, AppState, InputMode};

use super::UpdateResult;

/// Delete the selected row of the active admin tab
pub fn handle_delete_selected(state: &mut AppState) -> UpdateResult {
    if !state.session.is_admin() {
        state.set_notice("Admin access required");
        return UpdateResult::none();
    }

    match state.admin_view.tab {
        AdminTab::Servers => {
            if let Some(id) = state.selected_server_id() {
                match state.servers.remove(&id) {
                    Ok(server) => state.set_notice(format!("Decommissioned '{}'", server.name)),
                    Err(e) => state.report(&e),
                }
            }
        }
        AdminTab::Users => {
            if let Some(id) = state.selected_user_id() {
                match state.users.remove(&id) {
                    Ok(user) => state.set_notice(format!("Revoked access for '{}'", user.name)),
                    Err(e) => state.report(&e),
                }
            }
        }
        AdminTab::Partners => {
            if let Some(id) = state.selected_partner_id() {
                match state.partners.remove(&id) {
                    Ok(partner) => state.set_notice(format!("Unlinked '{}'", partner.name)),
                    Err(e) => state.report(&e),
                }
            }
        }
        AdminTab::Tickets => {
            // Tickets are closed, never deleted
            state.set_notice("Tickets are closed with 'c', not deleted");
        }
    }

    state.clamp_selection();
    UpdateResult::none()
}

/// Open the partner entry form (Partners tab only)
pub fn handle_partner_form_open(state: &mut AppState) -> UpdateResult {
    if !state.session.is_admin() {
        state.set_notice("Admin access required");
        return UpdateResult::none();
    }
    if state.admin_view.tab == AdminTab::Partners {
        state.admin_view.partner_form.reset();
        state.input_mode = InputMode::PartnerForm;
    }
    UpdateResult::none()
}

/// Replace the focused form field's text
pub fn handle_partner_form_input(state: &mut AppState, text: String) -> UpdateResult {
    state.admin_view.partner_form.set_focused_text(text);
    UpdateResult::none()
}

/// Move focus to the next form field (wraps)
pub fn handle_partner_form_next_field(state: &mut AppState) -> UpdateResult {
    let form = &mut state.admin_view.partner_form;
    form.focused = form.focused.next();
    UpdateResult::none()
}

/// Validate the form and append the new partner.
/// Invalid input keeps the form open with the reason on the notice line.
pub fn handle_partner_form_submit(state: &mut AppState) -> UpdateResult {
    let form = state.admin_view.partner_form.clone();
    match state
        .partners
        .add(form.name, form.image_url, form.link)
    {
        Ok(partner) => {
            let name = partner.name.clone();
            state.admin_view.partner_form.reset();
            state.input_mode = InputMode::Normal;
            state.set_notice(format!("Partner '{name}' linked"));
        }
        Err(e) => state.report(&e),
    }
    UpdateResult::none()
}

/// Discard the form
pub fn handle_partner_form_cancel(state: &mut AppState) -> UpdateResult {
    state.admin_view.partner_form.reset();
    state.input_mode = InputMode::Normal;
    UpdateResult::none()
}

//! Handler integration tests - messages driven through `update()`

use adeck_core::{Panel, TicketStatus};

use crate::auth::Credentials;
use crate::handler::update::{process_message, update};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AdminTab, AppState, InputMode};

fn anonymous_state() -> AppState {
    AppState::new()
}

/// Signed in with the seeded admin pair
fn admin_state() -> AppState {
    let mut state = AppState::new();
    process_message(&mut state, Message::Login);
    assert!(state.session.is_admin());
    state
}

/// Signed in as the seeded regular user
fn user_state() -> AppState {
    let mut state = AppState::new();
    let credentials = Credentials::new("case@sprawl.net", "");
    state
        .session
        .login(&state.authenticator, &credentials, &state.users)
        .unwrap();
    state
}

// ─────────────────────────────────────────────────────────
// Session & Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_login_message_uses_configured_credentials() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Login);
    assert!(state.session.is_admin());
    assert_eq!(state.notice.as_deref(), Some("Synced as Major Admin"));
}

#[test]
fn test_login_with_unknown_configured_email_fails() {
    let mut state = anonymous_state();
    state.settings.auth.admin_email = "ghost@nowhere.net".to_string();
    process_message(&mut state, Message::Login);
    assert!(!state.session.is_authenticated());
    assert_eq!(state.notice.as_deref(), Some("Authentication failed"));
}

#[test]
fn test_navigate_admin_denied_for_anonymous() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    assert_eq!(state.session.panel(), Panel::List);
    assert!(state.notice.is_some());
}

#[test]
fn test_navigate_admin_allowed_for_admin() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    assert_eq!(state.session.panel(), Panel::Admin);
}

#[test]
fn test_navigate_tickets_denied_for_anonymous() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    assert_eq!(state.session.panel(), Panel::List);
}

#[test]
fn test_logout_resets_to_list_panel() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    process_message(&mut state, Message::Logout);
    assert_eq!(state.session.panel(), Panel::List);
    assert!(!state.session.is_authenticated());
}

// ─────────────────────────────────────────────────────────
// Quit Flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_key_opens_confirm_dialog() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(state.input_mode, InputMode::ConfirmQuit);
    assert!(!state.should_quit());

    // Double-tap q confirms
    process_message(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_quit_dialog_cancel() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Key(InputKey::Char('q')));
    process_message(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(!state.should_quit());
}

#[test]
fn test_ctrl_c_force_quits_from_any_mode() {
    let mut state = anonymous_state();
    state.input_mode = InputMode::Search;
    process_message(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[test]
fn test_quit_without_confirmation_when_disabled() {
    let mut state = anonymous_state();
    state.settings.behavior.confirm_quit = false;
    process_message(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Search & Vote
// ─────────────────────────────────────────────────────────

#[test]
fn test_search_flow_filters_grid() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(state.input_mode, InputMode::Search);

    for c in "arena".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    assert_eq!(state.search_query, "arena");
    assert_eq!(state.visible_servers().len(), 1);

    process_message(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.search_query, "arena");
}

#[test]
fn test_search_cancel_clears_query() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::SearchStart);
    process_message(
        &mut state,
        Message::SearchInput {
            text: "ghost".to_string(),
        },
    );
    process_message(&mut state, Message::Key(InputKey::Esc));
    assert!(state.search_query.is_empty());
    assert_eq!(state.visible_servers().len(), 3);
}

#[test]
fn test_vote_key_increments_selected_server() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::Key(InputKey::Char('v')));
    assert_eq!(state.servers.get("1").unwrap().votes, 1241);
    assert!(state.notice.as_deref().unwrap().contains("Vote logged"));
}

#[test]
fn test_vote_follows_selection_in_filtered_grid() {
    let mut state = anonymous_state();
    process_message(
        &mut state,
        Message::SearchInput {
            text: "ghost".to_string(),
        },
    );
    process_message(&mut state, Message::Vote);
    assert_eq!(state.servers.get("3").unwrap().votes, 751);
    assert_eq!(state.servers.get("1").unwrap().votes, 1240);
}

// ─────────────────────────────────────────────────────────
// Admin Panel
// ─────────────────────────────────────────────────────────

#[test]
fn test_delete_requires_admin() {
    let mut state = user_state();
    state.session.navigate(Panel::List).unwrap();
    // Forge the message directly; the role check is in the handler
    process_message(&mut state, Message::DeleteSelected);
    assert_eq!(state.servers.len(), 3);
    assert_eq!(state.notice.as_deref(), Some("Admin access required"));
}

#[test]
fn test_admin_deletes_selected_server() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    process_message(&mut state, Message::SelectNext);
    process_message(&mut state, Message::DeleteSelected);
    assert_eq!(state.servers.len(), 2);
    assert!(state.servers.get("2").is_none());
}

#[test]
fn test_admin_deletes_selected_user() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    process_message(&mut state, Message::AdminTabNext);
    assert_eq!(state.admin_view.tab, AdminTab::Users);
    process_message(&mut state, Message::SelectNext);
    process_message(&mut state, Message::DeleteSelected);
    assert_eq!(state.users.len(), 1);
    assert!(state.users.get("u2").is_none());
}

#[test]
fn test_delete_on_tickets_tab_is_refused() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    state.admin_view.tab = AdminTab::Tickets;
    process_message(&mut state, Message::DeleteSelected);
    assert_eq!(state.tickets.len(), 2);
}

#[test]
fn test_partner_form_flow_adds_partner() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    state.admin_view.tab = AdminTab::Partners;
    process_message(&mut state, Message::Key(InputKey::Char('a')));
    assert_eq!(state.input_mode, InputMode::PartnerForm);

    for c in "Night City Nets".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    process_message(&mut state, Message::Key(InputKey::Tab));
    for c in "http://x/banner.png".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    process_message(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.partners.len(), 3);
    assert!(state
        .partners
        .iter()
        .any(|p| p.name == "Night City Nets"));
}

#[test]
fn test_partner_form_rejects_empty_name() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    state.admin_view.tab = AdminTab::Partners;
    process_message(&mut state, Message::PartnerFormOpen);
    process_message(&mut state, Message::PartnerFormSubmit);
    // Form stays open, registry unchanged, reason surfaced
    assert_eq!(state.input_mode, InputMode::PartnerForm);
    assert_eq!(state.partners.len(), 2);
    assert!(state.notice.as_deref().unwrap().contains("name"));
}

// ─────────────────────────────────────────────────────────
// Tickets
// ─────────────────────────────────────────────────────────

#[test]
fn test_ticket_form_requires_identity() {
    let mut state = anonymous_state();
    process_message(&mut state, Message::TicketFormOpen);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.notice.as_deref(), Some("Sign in to open a ticket"));
}

#[test]
fn test_user_opens_ticket_through_form() {
    let mut state = user_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    process_message(&mut state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.input_mode, InputMode::TicketForm);

    for c in "Lag spikes on EU node".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    process_message(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.tickets.len(), 3);
    let ticket = state.tickets.get("T3").unwrap();
    assert_eq!(ticket.user_id, "u2");
    assert_eq!(ticket.subject, "Lag spikes on EU node");
    // Cursor lands on the new ticket
    assert_eq!(
        state.visible_tickets()[state.tickets_view.selected].id,
        "T3"
    );
}

#[test]
fn test_ticket_form_empty_subject_stays_open() {
    let mut state = user_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    process_message(&mut state, Message::TicketFormOpen);
    process_message(&mut state, Message::TicketFormSubmit);
    assert_eq!(state.input_mode, InputMode::TicketForm);
    assert_eq!(state.tickets.len(), 2);
}

#[test]
fn test_user_reply_flow() {
    let mut state = user_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    // Only T1 is visible to Case; it is already selected
    process_message(&mut state, Message::Key(InputKey::Char('r')));
    assert_eq!(state.input_mode, InputMode::Reply);
    for c in "Any update?".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    process_message(&mut state, Message::Key(InputKey::Enter));

    let ticket = state.tickets.get("T1").unwrap();
    assert_eq!(ticket.replies.len(), 3);
    assert_eq!(ticket.replies[2].message, "Any update?");
    assert!(!ticket.replies[2].is_admin);
}

#[test]
fn test_admin_reply_marks_open_ticket_responded() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    // Admin sees both tickets; select T2 (Open)
    process_message(&mut state, Message::SelectNext);
    process_message(&mut state, Message::ReplyStart);
    process_message(
        &mut state,
        Message::ReplyInput {
            text: "A moderator has been dispatched.".to_string(),
        },
    );
    process_message(&mut state, Message::ReplySubmit);

    assert_eq!(
        state.tickets.get("T2").unwrap().status,
        TicketStatus::Responded
    );
}

#[test]
fn test_close_ticket_requires_admin() {
    let mut state = user_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    process_message(&mut state, Message::CloseTicket);
    assert_eq!(
        state.tickets.get("T1").unwrap().status,
        TicketStatus::Responded
    );
    assert_eq!(state.notice.as_deref(), Some("Admin access required"));
}

#[test]
fn test_admin_closes_ticket_from_admin_tab() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Admin));
    state.admin_view.tab = AdminTab::Tickets;
    process_message(&mut state, Message::CloseTicket);
    assert_eq!(
        state.tickets.get("T1").unwrap().status,
        TicketStatus::Closed
    );

    // Closing again is an explicit error, surfaced as a notice
    process_message(&mut state, Message::CloseTicket);
    assert!(state.notice.as_deref().unwrap().contains("closed"));
}

#[test]
fn test_reply_to_closed_ticket_is_refused() {
    let mut state = admin_state();
    process_message(&mut state, Message::Navigate(Panel::Tickets));
    process_message(&mut state, Message::CloseTicket);
    process_message(&mut state, Message::ReplyStart);
    process_message(
        &mut state,
        Message::ReplyInput {
            text: "too late".to_string(),
        },
    );
    process_message(&mut state, Message::ReplySubmit);
    assert_eq!(state.tickets.get("T1").unwrap().replies.len(), 2);
}

// ─────────────────────────────────────────────────────────
// Update plumbing
// ─────────────────────────────────────────────────────────

#[test]
fn test_key_messages_produce_followups() {
    let mut state = anonymous_state();
    let result = update(&mut state, Message::Key(InputKey::Char('v')));
    assert_eq!(result.message, Some(Message::Vote));
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut state = anonymous_state();
    let result = update(&mut state, Message::Key(InputKey::Char('z')));
    assert!(result.message.is_none());
}

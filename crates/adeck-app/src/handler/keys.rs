//! Key event handlers for different input modes

use adeck_core::Panel;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AdminTab, AppState, InputMode};

/// Convert key events to messages based on current input mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C force-quits from every mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.input_mode {
        InputMode::Normal => handle_key_normal(state, key),
        InputMode::Search => handle_key_search(state, key),
        InputMode::PartnerForm => handle_key_partner_form(state, key),
        InputMode::TicketForm => handle_key_ticket_form(state, key),
        InputMode::Reply => handle_key_reply(state, key),
        InputMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::SearchCancel),
        InputKey::Enter => Some(Message::SearchSubmit),
        InputKey::Backspace => {
            let mut query = state.search_query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut query = state.search_query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }
        _ => None,
    }
}

/// Handle key events in the partner entry form
fn handle_key_partner_form(state: &AppState, key: InputKey) -> Option<Message> {
    let form = &state.admin_view.partner_form;
    match key {
        InputKey::Esc => Some(Message::PartnerFormCancel),
        InputKey::Enter => Some(Message::PartnerFormSubmit),
        InputKey::Tab | InputKey::Down => Some(Message::PartnerFormNextField),
        InputKey::Backspace => {
            let mut text = form.focused_text().to_string();
            text.pop();
            Some(Message::PartnerFormInput { text })
        }
        InputKey::Char(c) => {
            let mut text = form.focused_text().to_string();
            text.push(c);
            Some(Message::PartnerFormInput { text })
        }
        _ => None,
    }
}

/// Handle key events in the new-ticket form
fn handle_key_ticket_form(state: &AppState, key: InputKey) -> Option<Message> {
    let subject = state
        .tickets_view
        .form
        .as_ref()
        .map(|f| f.subject.as_str())
        .unwrap_or_default();
    match key {
        InputKey::Esc => Some(Message::TicketFormCancel),
        InputKey::Enter => Some(Message::TicketFormSubmit),
        InputKey::Tab => Some(Message::TicketFormCycleCategory),
        InputKey::Backspace => {
            let mut text = subject.to_string();
            text.pop();
            Some(Message::TicketFormInput { text })
        }
        InputKey::Char(c) => {
            let mut text = subject.to_string();
            text.push(c);
            Some(Message::TicketFormInput { text })
        }
        _ => None,
    }
}

/// Handle key events in the reply composer
fn handle_key_reply(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ReplyCancel),
        InputKey::Enter => Some(Message::ReplySubmit),
        InputKey::Backspace => {
            let mut text = state.tickets_view.reply_buffer.clone();
            text.pop();
            Some(Message::ReplyInput { text })
        }
        InputKey::Char(c) => {
            let mut text = state.tickets_view.reply_buffer.clone();
            text.push(c);
            Some(Message::ReplyInput { text })
        }
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::Char('q') => return Some(Message::RequestQuit),
        InputKey::Char('1') => return Some(Message::Navigate(Panel::List)),
        InputKey::Char('2') => return Some(Message::Navigate(Panel::Tickets)),
        InputKey::Char('3') => return Some(Message::Navigate(Panel::Admin)),
        InputKey::Char('l') => return Some(Message::Login),
        InputKey::Char('o') => return Some(Message::Logout),
        InputKey::Up | InputKey::Char('k') => return Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => return Some(Message::SelectNext),
        _ => {}
    }

    match state.session.panel() {
        Panel::List => match key {
            InputKey::Char('/') => Some(Message::SearchStart),
            InputKey::Char('v') | InputKey::Enter => Some(Message::Vote),
            _ => None,
        },
        Panel::Tickets => match key {
            InputKey::Char('n') => Some(Message::TicketFormOpen),
            InputKey::Char('r') => Some(Message::ReplyStart),
            InputKey::Char('c') => Some(Message::CloseTicket),
            _ => None,
        },
        Panel::Admin => match key {
            InputKey::Tab | InputKey::Right => Some(Message::AdminTabNext),
            InputKey::BackTab | InputKey::Left => Some(Message::AdminTabPrev),
            InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteSelected),
            InputKey::Char('a') if state.admin_view.tab == AdminTab::Partners => {
                Some(Message::PartnerFormOpen)
            }
            InputKey::Char('c') if state.admin_view.tab == AdminTab::Tickets => {
                Some(Message::CloseTicket)
            }
            InputKey::Char('r') if state.admin_view.tab == AdminTab::Tickets => {
                Some(Message::ReplyStart)
            }
            _ => None,
        },
    }
}

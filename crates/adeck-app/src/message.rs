//! Message types for the application (TEA pattern)

use adeck_core::Panel;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// Switch the visible panel (role-guarded by the session)
    Navigate(Panel),

    /// Sign in with the configured credentials ("Sync Admin")
    Login,

    /// Clear the identity and return to the server grid
    Logout,

    // ─────────────────────────────────────────────────────────
    // Server Grid Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    SearchStart,
    /// Replace the search query with new text
    SearchInput { text: String },
    /// Keep the query, leave search input mode
    SearchSubmit,
    /// Drop the query, leave search input mode
    SearchCancel,

    /// Vote for the selected server
    Vote,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Move the row cursor down (wraps)
    SelectNext,
    /// Move the row cursor up (wraps)
    SelectPrev,

    // ─────────────────────────────────────────────────────────
    // Admin Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to the next admin tab
    AdminTabNext,
    /// Switch to the previous admin tab
    AdminTabPrev,
    /// Delete the selected row of the active admin tab
    DeleteSelected,

    /// Open the partner entry form
    PartnerFormOpen,
    /// Replace the focused form field's text
    PartnerFormInput { text: String },
    /// Move focus to the next form field
    PartnerFormNextField,
    /// Validate and append the new partner
    PartnerFormSubmit,
    /// Discard the form
    PartnerFormCancel,

    // ─────────────────────────────────────────────────────────
    // Ticket Messages
    // ─────────────────────────────────────────────────────────
    /// Open the new-ticket form
    TicketFormOpen,
    /// Replace the subject text
    TicketFormInput { text: String },
    /// Cycle the ticket category
    TicketFormCycleCategory,
    /// Validate and open the new ticket
    TicketFormSubmit,
    /// Discard the form
    TicketFormCancel,

    /// Start composing a reply to the selected ticket
    ReplyStart,
    /// Replace the reply composer text
    ReplyInput { text: String },
    /// Append the composed reply to the selected ticket
    ReplySubmit,
    /// Discard the composed reply
    ReplyCancel,

    /// Close the selected ticket (admin only)
    CloseTicket,
}

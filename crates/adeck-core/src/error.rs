//! Application error types with rich context

use thiserror::Error;

use crate::types::Panel;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Session Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Authentication failed")]
    AuthFailed,

    #[error("Panel '{panel}' requires {requirement}")]
    PanelDenied {
        panel: Panel,
        requirement: &'static str,
    },

    // ─────────────────────────────────────────────────────────────
    // Registry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No server with id '{id}'")]
    ServerNotFound { id: String },

    #[error("A server with id '{id}' is already registered")]
    DuplicateServer { id: String },

    #[error("No user with id '{id}'")]
    UserNotFound { id: String },

    #[error("No partner with id '{id}'")]
    PartnerNotFound { id: String },

    #[error("Invalid partner entry: {reason}")]
    InvalidPartner { reason: String },

    #[error("No ticket with id '{id}'")]
    TicketNotFound { id: String },

    #[error("Ticket '{id}' is closed")]
    TicketClosed { id: String },

    #[error("Invalid ticket: {reason}")]
    InvalidTicket { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn panel_denied(panel: Panel, requirement: &'static str) -> Self {
        Self::PanelDenied { panel, requirement }
    }

    pub fn server_not_found(id: impl Into<String>) -> Self {
        Self::ServerNotFound { id: id.into() }
    }

    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    pub fn partner_not_found(id: impl Into<String>) -> Self {
        Self::PartnerNotFound { id: id.into() }
    }

    pub fn invalid_partner(reason: impl Into<String>) -> Self {
        Self::InvalidPartner {
            reason: reason.into(),
        }
    }

    pub fn ticket_not_found(id: impl Into<String>) -> Self {
        Self::TicketNotFound { id: id.into() }
    }

    pub fn invalid_ticket(reason: impl Into<String>) -> Self {
        Self::InvalidTicket {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are surfaced on the notice line and the update
    /// loop continues; everything else propagates to the runner.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::AuthFailed
                | Error::PanelDenied { .. }
                | Error::ServerNotFound { .. }
                | Error::DuplicateServer { .. }
                | Error::UserNotFound { .. }
                | Error::PartnerNotFound { .. }
                | Error::InvalidPartner { .. }
                | Error::TicketNotFound { .. }
                | Error::TicketClosed { .. }
                | Error::InvalidTicket { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::server_not_found("42");
        assert_eq!(err.to_string(), "No server with id '42'");

        let err = Error::panel_denied(Panel::Admin, "an admin identity");
        assert_eq!(err.to_string(), "Panel 'admin' requires an admin identity");

        let err = Error::AuthFailed;
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_registry_errors_are_recoverable() {
        assert!(Error::server_not_found("1").is_recoverable());
        assert!(Error::user_not_found("u1").is_recoverable());
        assert!(Error::partner_not_found("p1").is_recoverable());
        assert!(Error::ticket_not_found("T1").is_recoverable());
        assert!(Error::invalid_partner("name is empty").is_recoverable());
        assert!(Error::AuthFailed.is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(!Error::AuthFailed.is_fatal());
        assert!(!Error::config("bad value").is_fatal());
    }
}

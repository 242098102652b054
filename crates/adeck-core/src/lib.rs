//! # adeck-core - Core Domain Types
//!
//! Foundation crate for Arena Deck. Provides the domain entities, error
//! handling, and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Server`], [`ServerStatus`] - A listed game server
//! - [`User`], [`Role`] - A registered account
//! - [`Partner`] - A partner banner
//! - [`Ticket`], [`TicketReply`], [`TicketStatus`], [`TicketCategory`]
//! - [`Panel`] - The three mutually exclusive top-level views
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use adeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Arena Deck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    Panel, Partner, Role, Server, ServerStatus, Ticket, TicketCategory, TicketReply, TicketStatus,
    User,
};

//! # adeck-app - Application State and Orchestration
//!
//! The engine behind Arena Deck: the session/view controller, the four
//! in-memory registries, seed data, the authentication seam, TOML
//! configuration, and the TEA update loop (messages in, state transitions
//! out). Terminal rendering lives in `adeck-tui`; this crate never touches
//! a terminal type.
//!
//! ## Architecture (TEA pattern)
//!
//! - Model: [`state::AppState`]
//! - Messages: [`message::Message`]
//! - Update: [`handler::update`]
//!
//! The view half is `adeck_tui::render::view`.

pub mod auth;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod registry;
pub mod seed;
pub mod session;
pub mod state;

// Re-export handler types for event loop integration
pub use handler::{process_message, UpdateResult};

// Re-export the types the front end works with
pub use auth::{Authenticator, Credentials, StaticAuthenticator};
pub use config::{config_path, load_settings, Settings};
pub use input_key::InputKey;
pub use message::Message;
pub use registry::{PartnerRegistry, ServerRegistry, TicketRegistry, UserRegistry};
pub use session::Session;
pub use state::{AdminTab, AppPhase, AppState, InputMode};

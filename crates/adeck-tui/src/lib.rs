//! adeck-tui - Terminal UI for Arena Deck
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the render function, and the widget set. All application logic lives in
//! `adeck-app`; this crate only translates key events into messages and
//! draws the resulting state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;

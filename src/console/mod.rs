//! Interactive console channel: a local, terminal-backed stand-in for a
//! chat-platform adapter.
//!
//! Provides a REPL-style channel with slash commands, live translation, and
//! thread replies for retry corrections.

/// Slash command parsing and autocomplete.
pub mod command;
mod gateway;
mod session;
mod ui;

pub use gateway::ConsoleGateway;
pub use session::ConsoleSession;

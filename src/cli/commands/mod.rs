//! Subcommand implementations.

/// Console channel command handler.
pub mod chat;

/// Provider management command handler.
pub mod providers;

/// Slang table listing command handler.
pub mod slang;

/// One-shot translation command handler.
pub mod translate;

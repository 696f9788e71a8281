//! # babelbot - Chat-Platform Translation Bot
//!
//! `babelbot` is the core of a chat-platform bot that translates messages
//! between languages through an OpenAI-compatible model endpoint, with slang
//! substitution around the model call and a reply-driven retry flow for
//! failed translations.
//!
//! ## Features
//!
//! - **Manual translation**: a translate command with optional source and
//!   target languages, per-user default targets
//! - **Live translation**: bind a channel to a target language and every
//!   message in it is translated automatically
//! - **Retry via reply**: when detection or the model fails, the bot opens
//!   an error thread; replying with a language code retries with that source
//! - **Slang substitution**: per-language phrase tables applied before and
//!   after the model call
//!
//! ## Quick Start
//!
//! ```bash
//! # One-shot translation
//! babelbot "good morning" --to ja
//!
//! # Pipe text in
//! cat notes.txt | babelbot --to es
//!
//! # Interactive console channel
//! babelbot chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/babelbot/config.toml`:
//!
//! ```toml
//! [bot]
//! provider = "ollama"
//! model = "gemma3:12b"
//! retry_ttl_secs = 900
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b", "llama3.2"]
//!
//! [slang.en]
//! smh = "shaking my head"
//! ```
//!
//! ## Embedding
//!
//! A platform adapter feeds [`gateway::Event`]s into a
//! [`session::Dispatcher`] and implements [`gateway::ChatGateway`] for the
//! outbound side; the [`session::Orchestrator`] owns all conversational
//! state. State is in-memory only and lost on restart by design.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Interactive console channel (local stand-in for a chat platform).
pub mod console;

/// Translation error taxonomy.
pub mod error;

/// Chat-platform seam: inbound events and the outbound gateway trait.
pub mod gateway;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Session state and orchestration: live sessions, retry correlation,
/// user defaults, and the event dispatcher.
pub mod session;

/// Language tables, the model client, slang substitution, and resolution.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

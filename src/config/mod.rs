//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    BotConfig, ConfigFile, ConfigManager, DEFAULT_RETRY_TTL_SECS, ProviderConfig, ResolveOptions,
    ResolvedConfig, resolve_config,
};

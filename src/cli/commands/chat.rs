use std::sync::Arc;

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::console::{ConsoleGateway, ConsoleSession};
use crate::gateway::ChatGateway;
use crate::session::Orchestrator;
use crate::translation::{ModelClient, SlangBook};

pub struct ChatOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Wires the bot core to the console channel and runs the REPL.
pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            provider: options.provider,
            model: options.model,
        },
        &config_file,
    )?;

    let translator = Arc::new(ModelClient::new(
        resolved.endpoint,
        resolved.model,
        resolved.api_key,
    ));
    let gateway = Arc::new(ConsoleGateway::new());
    let slang = SlangBook::load(&config_file.slang);

    let orchestrator = Arc::new(Orchestrator::new(
        translator,
        Arc::clone(&gateway) as Arc<dyn ChatGateway>,
        slang,
        resolved.retry_ttl,
    ));

    let mut session = ConsoleSession::new(orchestrator, gateway);
    session.run().await
}

use anyhow::{Result, bail};
use std::io::{self, Write};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::status;
use crate::translation::{Direction, ModelClient, SlangBook, Translator, resolve};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// One-shot manual translation from the command line, running the same
/// resolver -> slang -> invoker pipeline as the bot paths.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let resolved_config = resolve_config(
        &ResolveOptions {
            provider: options.provider.clone(),
            model: options.model.clone(),
        },
        &config_file,
    )?;

    let languages = resolve(
        options.from.as_deref(),
        options.to.as_deref(),
        None,
        config_file.bot.target.as_deref(),
    )?;

    let source_text = match options.text {
        Some(text) => text,
        None => InputReader::read(options.file.as_deref())?,
    };

    if source_text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let slang = SlangBook::load(&config_file.slang);
    let client = ModelClient::new(
        resolved_config.endpoint,
        resolved_config.model,
        resolved_config.api_key,
    );

    let prepared = match languages.source.code() {
        Some(code) => slang.apply(&source_text, code, Direction::Inbound),
        None => source_text,
    };

    let spinner = Spinner::new("Translating...");
    let translated = client
        .translate(&prepared, languages.source, &languages.target)
        .await?;
    spinner.stop();

    if translated.source == translated.target {
        status!("The text is already in the target language.");
        return Ok(());
    }

    let output = slang.apply(&translated.text, &translated.target, Direction::Outbound);

    status!("{} -> {}", translated.source, translated.target);
    println!("{output}");
    io::stdout().flush()?;

    Ok(())
}

use anyhow::Result;
use clap::Parser;

use babelbot::cli::commands::{chat, providers, slang, translate};
use babelbot::cli::{Args, Command};
use babelbot::translation::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Slang { lang }) => {
            slang::print_slang(lang.as_deref())?;
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Chat { provider, model }) => {
            let options = chat::ChatOptions { provider, model };
            chat::run_chat(options).await?;
        }
        None => {
            if let Some(ref lang) = args.from {
                validate_language(lang)?;
            }
            if let Some(ref lang) = args.to {
                validate_language(lang)?;
            }

            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                from: args.from,
                to: args.to,
                provider: args.provider,
                model: args.model,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

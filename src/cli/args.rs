use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "babelbot")]
#[command(about = "Chat-platform translation bot with live sessions and reply-driven retry")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads from --file or stdin if not provided)
    pub text: Option<String>,

    /// File to read the text from instead of the argument or stdin
    #[arg(long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Source language code (ISO 639-1); auto-detected when omitted
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., ja, en, zh)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Provider name
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive console channel (local stand-in for a chat platform)
    Chat {
        /// Provider name
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// List supported language codes
    Languages,
    /// Show the slang substitution tables
    Slang {
        /// Show only this language's table
        lang: Option<String>,
    },
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}

use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show available commands"),
    ("/languages", "List supported language codes"),
    ("/live", "Start live translation in this channel"),
    ("/quit", "Leave the console channel"),
    ("/setlanguage", "Set your default target language"),
    ("/stop", "Stop live translation"),
    ("/translate", "Translate text (from:xx to:yy prefixes optional)"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Translate {
        text: String,
        source: Option<String>,
        target: Option<String>,
    },
    SetLanguage(String),
    Languages,
    Live(String),
    Stop,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A plain channel message.
    Text(String),
    /// A reply posted into a thread: `@t3 de`.
    Reply { thread: String, text: String },
    Command(ConsoleCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    if let Some(rest) = input.strip_prefix('@') {
        let (thread, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        return Input::Reply {
            thread: thread.to_string(),
            text: text.trim().to_string(),
        };
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let mut parts = cmd.split_whitespace();

    let command = match parts.next() {
        Some("translate") => parse_translate(parts.collect()),
        Some("setlanguage") => parts.next().map_or_else(
            || ConsoleCommand::Unknown("setlanguage (usage: /setlanguage <code>)".to_string()),
            |code| ConsoleCommand::SetLanguage(code.to_string()),
        ),
        Some("languages") => ConsoleCommand::Languages,
        Some("live") => parts.next().map_or_else(
            || ConsoleCommand::Unknown("live (usage: /live <code>)".to_string()),
            |code| ConsoleCommand::Live(code.to_string()),
        ),
        Some("stop") => ConsoleCommand::Stop,
        Some("help") => ConsoleCommand::Help,
        Some("quit" | "exit" | "q") => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };

    Input::Command(command)
}

/// Parses `/translate` arguments: optional leading `from:xx` / `to:yy`
/// prefixes in either order, then the text itself.
fn parse_translate(tokens: Vec<&str>) -> ConsoleCommand {
    let mut source = None;
    let mut target = None;
    let mut rest = tokens.as_slice();

    while let Some((head, tail)) = rest.split_first() {
        if let Some(code) = head.strip_prefix("from:") {
            source = Some(code.to_string());
            rest = tail;
        } else if let Some(code) = head.strip_prefix("to:") {
            target = Some(code.to_string());
            rest = tail;
        } else {
            break;
        }
    }

    ConsoleCommand::Translate {
        text: rest.join(" "),
        source,
        target,
    }
}

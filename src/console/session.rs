use std::sync::Arc;

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{ConsoleCommand, Input, SlashCommandCompleter, parse_input};
use super::gateway::ConsoleGateway;
use super::ui;
use crate::gateway::{BotCommand, ChannelId, CommandInvocation, Event, InboundMessage, UserId};
use crate::session::Orchestrator;

/// The simulated channel's id. One console run is one channel.
const CONSOLE_CHANNEL: &str = "console";

/// The simulated author of everything typed at the prompt.
const CONSOLE_USER: &str = "you";

/// An interactive console channel driving the bot core.
///
/// Plain lines are channel messages (translated while live mode is active),
/// slash commands map onto the bot commands, and `@<thread> <text>` posts a
/// reply into a thread, which is how retry corrections are made.
pub struct ConsoleSession {
    orchestrator: Arc<Orchestrator>,
    gateway: Arc<ConsoleGateway>,
    channel: ChannelId,
    user: UserId,
}

impl ConsoleSession {
    pub fn new(orchestrator: Arc<Orchestrator>, gateway: Arc<ConsoleGateway>) -> Self {
        Self {
            orchestrator,
            gateway,
            channel: CONSOLE_CHANNEL.to_string(),
            user: CONSOLE_USER.to_string(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(
                    "Type a message, /help for commands, @<thread> to reply, Ctrl+C to quit",
                )
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(ConsoleCommand::Quit) => break,
                    Input::Command(ConsoleCommand::Help) => ui::print_help(),
                    Input::Command(ConsoleCommand::Unknown(cmd)) => {
                        ui::print_error(&format!("Unknown command: /{cmd}"));
                    }
                    Input::Command(cmd) => self.deliver_command(cmd).await,
                    Input::Text(text) => self.deliver_message(text, None).await,
                    Input::Reply { thread, text } => {
                        self.deliver_message(text, Some(thread)).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn deliver_command(&self, cmd: ConsoleCommand) {
        let command = match cmd {
            ConsoleCommand::Translate {
                text,
                source,
                target,
            } => {
                if text.is_empty() {
                    ui::print_error("Usage: /translate [from:xx] [to:yy] <text>");
                    return;
                }
                BotCommand::Translate {
                    text,
                    source,
                    target,
                }
            }
            ConsoleCommand::SetLanguage(target) => BotCommand::SetLanguage { target },
            ConsoleCommand::Languages => BotCommand::Languages,
            ConsoleCommand::Live(target) => BotCommand::StartLive { target },
            ConsoleCommand::Stop => BotCommand::StopLive,
            // Handled by the REPL loop before delivery.
            ConsoleCommand::Help | ConsoleCommand::Quit | ConsoleCommand::Unknown(_) => return,
        };

        self.orchestrator
            .handle_event(Event::Command(CommandInvocation {
                command,
                author: self.user.clone(),
                channel: self.channel.clone(),
            }))
            .await;
    }

    async fn deliver_message(&self, text: String, thread: Option<String>) {
        if text.is_empty() {
            return;
        }

        let message = InboundMessage {
            author: self.user.clone(),
            channel: self.channel.clone(),
            message_id: self.gateway.next_message_id(),
            thread_parent: thread,
            text,
            from_bot: false,
        };

        self.orchestrator
            .handle_event(Event::Message(message))
            .await;
    }
}

//! Chat-platform seam: inbound events and the outbound gateway trait.
//!
//! The platform client (message delivery, permission checks, command
//! registration) lives outside this crate. It feeds [`Event`]s in and
//! receives posts through [`ChatGateway`]. Identifiers are the platform's
//! own; the core only uses them as map keys.

use anyhow::Result;
use async_trait::async_trait;

pub type UserId = String;
pub type ChannelId = String;
pub type MessageId = String;

/// A message-creation event from the platform.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub author: UserId,
    pub channel: ChannelId,
    pub message_id: MessageId,
    /// Set when the message was posted inside a thread.
    pub thread_parent: Option<MessageId>,
    pub text: String,
    /// Bot-authored messages are never translation input.
    pub from_bot: bool,
}

/// A recognized bot command, already parsed by the platform layer.
#[derive(Debug, Clone)]
pub enum BotCommand {
    /// Manual translation of `text`, optionally pinning the languages.
    Translate {
        text: String,
        source: Option<String>,
        target: Option<String>,
    },
    /// Store the user's default target language.
    SetLanguage { target: String },
    /// List the supported language table.
    Languages,
    /// Activate live translation in the channel.
    StartLive { target: String },
    /// Deactivate live translation in the channel.
    StopLive,
}

/// A command invocation with its origin.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub command: BotCommand,
    pub author: UserId,
    pub channel: ChannelId,
}

/// Everything the orchestrator subscribes to.
#[derive(Debug, Clone)]
pub enum Event {
    Command(CommandInvocation),
    Message(InboundMessage),
    /// Channel (or its threads) removed; the core drops its state for it.
    ChannelClosed(ChannelId),
}

impl Event {
    /// The key events are ordered by: events sharing a key are processed in
    /// arrival order, events with different keys are independent.
    pub fn channel_key(&self) -> &str {
        match self {
            Self::Command(cmd) => &cmd.channel,
            Self::Message(msg) => &msg.channel,
            Self::ChannelClosed(channel) => channel,
        }
    }
}

/// Outbound operations the core needs from the platform.
///
/// The core never edits or deletes prior messages.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Posts into a channel, returning the new message's id.
    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<MessageId>;

    /// Posts into an existing thread.
    async fn post_in_thread(&self, thread: &MessageId, text: &str) -> Result<()>;

    /// Posts a reply visible only to `user`.
    async fn post_ephemeral(&self, channel: &ChannelId, user: &UserId, text: &str) -> Result<()>;

    /// Creates a thread anchored to a message, returning the thread's id.
    async fn create_thread(
        &self,
        channel: &ChannelId,
        anchor: &MessageId,
        title: &str,
    ) -> Result<MessageId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_key_per_event() {
        let msg = Event::Message(InboundMessage {
            author: "u1".to_string(),
            channel: "c1".to_string(),
            message_id: "m1".to_string(),
            thread_parent: None,
            text: "hi".to_string(),
            from_bot: false,
        });
        assert_eq!(msg.channel_key(), "c1");

        let cmd = Event::Command(CommandInvocation {
            command: BotCommand::Languages,
            author: "u1".to_string(),
            channel: "c2".to_string(),
        });
        assert_eq!(cmd.channel_key(), "c2");

        assert_eq!(Event::ChannelClosed("c3".to_string()).channel_key(), "c3");
    }
}

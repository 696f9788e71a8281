//! A terminal-backed [`ChatGateway`]: the local stand-in for a platform
//! adapter. Posts render as styled lines; ids are generated locally so
//! threads can be addressed with `@<id>` replies.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use crate::gateway::{ChannelId, ChatGateway, MessageId, UserId};
use crate::ui::Style;

#[derive(Debug, Default)]
pub struct ConsoleGateway {
    next_id: AtomicU64,
}

impl ConsoleGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an id for a user-authored message, so bot threads can
    /// anchor to it.
    pub fn next_message_id(&self) -> MessageId {
        self.alloc("m")
    }

    fn alloc(&self, prefix: &str) -> MessageId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}{n}")
    }
}

#[async_trait]
impl ChatGateway for ConsoleGateway {
    async fn post_message(&self, _channel: &ChannelId, text: &str) -> Result<MessageId> {
        println!("{} {text}", Style::bot("bot:"));
        Ok(self.alloc("m"))
    }

    async fn post_in_thread(&self, thread: &MessageId, text: &str) -> Result<()> {
        println!("{} {text}", Style::thread(format!("[{thread}]")));
        Ok(())
    }

    async fn post_ephemeral(&self, _channel: &ChannelId, _user: &UserId, text: &str) -> Result<()> {
        println!("{} {text}", Style::hint("(only visible to you)"));
        Ok(())
    }

    async fn create_thread(
        &self,
        _channel: &ChannelId,
        anchor: &MessageId,
        title: &str,
    ) -> Result<MessageId> {
        let thread = self.alloc("t");
        println!(
            "{} {} {}",
            Style::thread(format!("[{thread}]")),
            Style::secondary(format!("thread on {anchor}:")),
            Style::header(title)
        );
        println!(
            "{}",
            Style::hint(format!("(reply into this thread with '@{thread} <text>')"))
        );
        Ok(thread)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_unique_and_prefixed() {
        let gateway = ConsoleGateway::new();
        let m1 = gateway.next_message_id();
        let m2 = gateway.post_message(&"console".to_string(), "hi").await.unwrap();
        let t1 = gateway
            .create_thread(&"console".to_string(), &m1, "title")
            .await
            .unwrap();

        assert!(m1.starts_with('m'));
        assert!(m2.starts_with('m'));
        assert!(t1.starts_with('t'));
        assert_ne!(m1, m2);
    }
}

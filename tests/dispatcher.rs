#![allow(clippy::unwrap_used)]
//! Dispatcher scheduling tests: per-channel ordering and cross-channel
//! independence.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use babelbot::error::TranslateError;
use babelbot::gateway::{
    BotCommand, ChannelId, ChatGateway, CommandInvocation, Event, InboundMessage, MessageId,
    UserId,
};
use babelbot::session::{Dispatcher, Orchestrator};
use babelbot::translation::{SlangBook, Source, Translated, Translator};

/// Records completion order; messages starting with "slow" stall a while
/// before completing, standing in for a slow model call.
struct EchoTranslator {
    completed: Mutex<Vec<String>>,
}

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: Source,
        target: &str,
    ) -> Result<Translated, TranslateError> {
        if text.starts_with("slow") {
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        self.completed.lock().unwrap().push(text.to_string());
        Ok(Translated {
            source: "en".to_string(),
            target: target.to_string(),
            text: format!("<{target}>{text}"),
        })
    }
}

struct NullGateway;

#[async_trait]
impl ChatGateway for NullGateway {
    async fn post_message(&self, _channel: &ChannelId, _text: &str) -> Result<MessageId> {
        Ok("m".to_string())
    }

    async fn post_in_thread(&self, _thread: &MessageId, _text: &str) -> Result<()> {
        Ok(())
    }

    async fn post_ephemeral(
        &self,
        _channel: &ChannelId,
        _user: &UserId,
        _text: &str,
    ) -> Result<()> {
        Ok(())
    }

    async fn create_thread(
        &self,
        _channel: &ChannelId,
        _anchor: &MessageId,
        _title: &str,
    ) -> Result<MessageId> {
        Ok("t".to_string())
    }
}

fn build() -> (Dispatcher, Arc<EchoTranslator>) {
    let translator = Arc::new(EchoTranslator {
        completed: Mutex::new(Vec::new()),
    });
    let translator_dyn: Arc<dyn Translator> = Arc::clone(&translator) as Arc<dyn Translator>;
    let orchestrator = Arc::new(Orchestrator::new(
        translator_dyn,
        Arc::new(NullGateway),
        SlangBook::load(&std::collections::HashMap::new()),
        Duration::from_secs(900),
    ));
    (Dispatcher::new(orchestrator), translator)
}

fn start_live(channel: &str) -> Event {
    Event::Command(CommandInvocation {
        command: BotCommand::StartLive {
            target: "fr".to_string(),
        },
        author: "u1".to_string(),
        channel: channel.to_string(),
    })
}

fn message(channel: &str, id: &str, text: &str) -> Event {
    Event::Message(InboundMessage {
        author: "u1".to_string(),
        channel: channel.to_string(),
        message_id: id.to_string(),
        thread_parent: None,
        text: text.to_string(),
        from_bot: false,
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn events_in_one_channel_complete_in_arrival_order() {
    let (dispatcher, translator) = build();

    dispatcher.dispatch(start_live("c1"));
    for i in 0..5 {
        dispatcher.dispatch(message("c1", &format!("m{i}"), &format!("message {i}")));
    }
    dispatcher.drain().await;

    let completed = translator.completed.lock().unwrap().clone();
    let expected: Vec<String> = (0..5).map(|i| format!("message {i}")).collect();
    assert_eq!(completed, expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn a_slow_channel_does_not_delay_another() {
    let (dispatcher, translator) = build();

    dispatcher.dispatch(start_live("c1"));
    dispatcher.dispatch(start_live("c2"));
    dispatcher.dispatch(message("c1", "m1", "slow message"));
    dispatcher.dispatch(message("c2", "m2", "quick message"));
    dispatcher.drain().await;

    let completed = translator.completed.lock().unwrap().clone();
    assert_eq!(
        completed,
        vec!["quick message".to_string(), "slow message".to_string()]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn run_consumes_a_stream_then_drains() {
    let (dispatcher, translator) = build();

    let events = futures_util::stream::iter(vec![
        start_live("c1"),
        message("c1", "m1", "first"),
        message("c1", "m2", "second"),
    ]);
    dispatcher.run(events).await;

    let completed = translator.completed.lock().unwrap().clone();
    assert_eq!(completed, vec!["first".to_string(), "second".to_string()]);
}

//! The session orchestrator: classifies inbound events and drives the
//! translation pipeline, the live session registry, and the retry protocol.
//!
//! Classification priority for a message (first match wins):
//!
//! 1. explicit command
//! 2. reply inside a thread holding a live retry context
//! 3. channel with an active live session (message is not bot output)
//! 4. ignore
//!
//! The ordering guarantees a correction reply is never fed back through the
//! live-translation path even when both apply to the same channel. All
//! registry state is owned here and mutated only by this type.

use std::sync::Arc;
use std::time::Duration;

use crate::error::TranslateError;
use crate::gateway::{
    BotCommand, ChannelId, ChatGateway, CommandInvocation, Event, InboundMessage, MessageId,
    UserId,
};
use crate::translation::{
    Direction, SlangBook, Source, Translated, Translator, display_name, format_languages,
    parse_code, resolve, validate_language,
};
use crate::{info, warn};

use super::live::LiveSessionRegistry;
use super::prefs::UserPreferences;
use super::retry::{RetryRequest, RetryState, RetryStore};

/// Coordinates every component of the bot core around one event at a time.
pub struct Orchestrator {
    translator: Arc<dyn Translator>,
    gateway: Arc<dyn ChatGateway>,
    slang: SlangBook,
    live: LiveSessionRegistry,
    retries: RetryStore,
    prefs: UserPreferences,
}

impl Orchestrator {
    pub fn new(
        translator: Arc<dyn Translator>,
        gateway: Arc<dyn ChatGateway>,
        slang: SlangBook,
        retry_ttl: Duration,
    ) -> Self {
        Self {
            translator,
            gateway,
            slang,
            live: LiveSessionRegistry::new(),
            retries: RetryStore::new(retry_ttl),
            prefs: UserPreferences::new(),
        }
    }

    /// Handles one inbound event to completion.
    pub async fn handle_event(&self, event: Event) {
        match event {
            Event::Command(cmd) => self.handle_command(cmd).await,
            Event::Message(msg) => self.handle_message(msg).await,
            Event::ChannelClosed(channel) => self.handle_channel_closed(&channel),
        }
    }

    async fn handle_command(&self, cmd: CommandInvocation) {
        let CommandInvocation {
            command,
            author,
            channel,
        } = cmd;

        match command {
            BotCommand::Translate {
                text,
                source,
                target,
            } => {
                self.handle_translate(&author, &channel, text, source, target)
                    .await;
            }
            BotCommand::SetLanguage { target } => {
                self.handle_set_language(&author, &channel, &target).await;
            }
            BotCommand::Languages => {
                let listing = format!("Supported language codes:\n{}", format_languages());
                self.ephemeral(&channel, &author, &listing).await;
            }
            BotCommand::StartLive { target } => {
                self.handle_start_live(&author, &channel, &target).await;
            }
            BotCommand::StopLive => {
                self.handle_stop_live(&author, &channel).await;
            }
        }
    }

    async fn handle_message(&self, msg: InboundMessage) {
        if msg.from_bot {
            return;
        }

        // A reply in an error thread that is exactly one supported code is a
        // correction; anything else in that thread falls through to normal
        // handling. `take` is exclusive, so the first valid correction wins
        // and later replies find no context.
        if let Some(parent) = &msg.thread_parent
            && self.retries.contains(parent)
            && let Some(code) = parse_code(&msg.text)
            && let Some(ctx) = self.retries.take(parent)
        {
            self.handle_retry(&ctx.thread, ctx.request, code).await;
            return;
        }

        // Live translation covers top-level channel messages only; chatter
        // inside threads (including error threads) stays untranslated.
        if msg.thread_parent.is_none()
            && let Some(session) = self.live.get(&msg.channel)
        {
            self.handle_live_message(&msg, &session.target).await;
        }
    }

    fn handle_channel_closed(&self, channel: &ChannelId) {
        let _ = self.live.stop(channel);
        self.retries.purge_channel(channel);
        info!("channel {channel} closed; dropped its sessions and retry contexts");
    }

    async fn handle_translate(
        &self,
        author: &UserId,
        channel: &ChannelId,
        text: String,
        source: Option<String>,
        target: Option<String>,
    ) {
        let live_target = self.live.get(channel).map(|s| s.target);
        let user_default = self.prefs.default_target(author);

        let resolved = match resolve(
            source.as_deref(),
            target.as_deref(),
            live_target.as_deref(),
            user_default.as_deref(),
        ) {
            Ok(resolved) => resolved,
            Err(err) => {
                // Validation errors are answered privately and never open an
                // error thread.
                self.ephemeral(channel, author, &err.to_string()).await;
                return;
            }
        };

        match self
            .run_pipeline(&text, resolved.source, &resolved.target)
            .await
        {
            Ok(translated) if translated.source == translated.target => {
                self.ephemeral(channel, author, "The text is already in the target language.")
                    .await;
            }
            Ok(translated) => {
                let reply = format!(
                    "Translation ({} -> {}): {}",
                    translated.source, translated.target, translated.text
                );
                self.ephemeral(channel, author, &reply).await;
            }
            Err(err) if err.is_retryable() => {
                let request = RetryRequest {
                    text,
                    target: resolved.target,
                    author: author.clone(),
                    channel: channel.clone(),
                };
                self.report_failure(None, request, &err).await;
            }
            Err(err) => {
                self.ephemeral(channel, author, &err.to_string()).await;
            }
        }
    }

    async fn handle_set_language(&self, author: &UserId, channel: &ChannelId, target: &str) {
        if let Err(err) = validate_language(target) {
            self.ephemeral(channel, author, &err.to_string()).await;
            return;
        }

        self.prefs.set_default(author, target);
        let name = display_name(target).unwrap_or(target);
        self.ephemeral(
            channel,
            author,
            &format!("Default target language set to: {name} ({target})"),
        )
        .await;
    }

    async fn handle_start_live(&self, author: &UserId, channel: &ChannelId, target: &str) {
        if let Err(err) = validate_language(target) {
            self.ephemeral(channel, author, &err.to_string()).await;
            return;
        }

        let prior = self.live.start(channel, target);
        let name = display_name(target).unwrap_or(target);
        let announcement = prior.map_or_else(
            || {
                format!(
                    "Live translation mode activated. Messages will be translated to {name}."
                )
            },
            |prior| {
                format!(
                    "Live translation target switched from {} to {target}.",
                    prior.target
                )
            },
        );
        info!("live translation started in {channel} (target {target})");
        self.post(channel, &announcement).await;
    }

    async fn handle_stop_live(&self, author: &UserId, channel: &ChannelId) {
        match self.live.stop(channel) {
            Ok(_) => {
                info!("live translation stopped in {channel}");
                self.post(channel, "Live translation mode deactivated.").await;
            }
            Err(err) => {
                self.ephemeral(channel, author, &err.to_string()).await;
            }
        }
    }

    async fn handle_live_message(&self, msg: &InboundMessage, target: &str) {
        match self
            .run_pipeline(&msg.text, Source::Auto, target)
            .await
        {
            Ok(translated) if translated.source == translated.target => {
                // Already in the target language; live mode stays quiet.
            }
            Ok(translated) => {
                let title = format!("Translation: {} -> {}", translated.source, translated.target);
                match self
                    .gateway
                    .create_thread(&msg.channel, &msg.message_id, &title)
                    .await
                {
                    Ok(thread) => {
                        let body = format!("Translated message: {}", translated.text);
                        if let Err(err) = self.gateway.post_in_thread(&thread, &body).await {
                            warn!("failed to post live translation: {err:#}");
                        }
                    }
                    Err(err) => warn!("failed to create translation thread: {err:#}"),
                }
            }
            Err(err) if err.is_retryable() => {
                let request = RetryRequest {
                    text: msg.text.clone(),
                    target: target.to_string(),
                    author: msg.author.clone(),
                    channel: msg.channel.clone(),
                };
                self.report_failure(Some(&msg.message_id), request, &err).await;
            }
            Err(err) => {
                warn!("live translation failed without retry path: {err}");
            }
        }
    }

    /// Re-runs a stored request with the corrected source language. The
    /// context has already been removed from the store (`Retrying`); success
    /// resolves the occurrence, another model-class failure replaces it with
    /// a fresh context on a new error thread.
    async fn handle_retry(&self, thread: &MessageId, request: RetryRequest, source: String) {
        info!(
            "retrying translation in thread {thread} with source '{source}'"
        );

        let outcome = match self
            .run_pipeline(&request.text, Source::Code(source), &request.target)
            .await
        {
            Ok(translated) if translated.source == translated.target => {
                self.thread_post(thread, "The text is already in the target language.")
                    .await;
                RetryState::Resolved
            }
            Ok(translated) => {
                let reply = format!(
                    "Translation ({} -> {}): {}",
                    translated.source, translated.target, translated.text
                );
                self.thread_post(thread, &reply).await;
                RetryState::Resolved
            }
            Err(err) if err.is_retryable() => {
                self.report_failure(None, request, &err).await;
                RetryState::Replaced
            }
            Err(err) => {
                self.thread_post(thread, &err.to_string()).await;
                RetryState::Resolved
            }
        };

        debug_assert!(RetryState::Retrying.can_become(outcome));
        info!("retry in thread {thread}: {outcome:?}");
    }

    /// Shared inbound-slang -> translate -> outbound-slang pipeline.
    ///
    /// Inbound substitution needs a known source table, so the auto-detect
    /// path sends the raw text. Outbound substitution relocalizes the result
    /// for the target language; a same-language result passes through
    /// untouched.
    async fn run_pipeline(
        &self,
        text: &str,
        source: Source,
        target: &str,
    ) -> Result<Translated, TranslateError> {
        let prepared = match source.code() {
            Some(code) => self.slang.apply(text, code, Direction::Inbound),
            None => text.to_string(),
        };

        let mut translated = self.translator.translate(&prepared, source, target).await?;

        if translated.source != translated.target {
            translated.text = self
                .slang
                .apply(&translated.text, target, Direction::Outbound);
        }

        Ok(translated)
    }

    /// Posts an error report, opens the error thread, and binds the retry
    /// context to it. With an anchor (live mode) the thread hangs off the
    /// user's message; without one a fresh report message is posted first.
    async fn report_failure(
        &self,
        anchor: Option<&MessageId>,
        request: RetryRequest,
        err: &TranslateError,
    ) {
        let channel = request.channel.clone();

        let anchor_id = match anchor {
            Some(id) => id.clone(),
            None => {
                match self
                    .gateway
                    .post_message(&channel, &format!("Translation failed: {err}"))
                    .await
                {
                    Ok(id) => id,
                    Err(post_err) => {
                        warn!("failed to post error report: {post_err:#}");
                        return;
                    }
                }
            }
        };

        let thread = match self
            .gateway
            .create_thread(&channel, &anchor_id, "Translation error")
            .await
        {
            Ok(thread) => thread,
            Err(thread_err) => {
                warn!("failed to create error thread: {thread_err:#}");
                return;
            }
        };

        self.thread_post(&thread, &format!("Translating: {}", request.text))
            .await;
        self.thread_post(
            &thread,
            &format!("{err}\n\nReply to this thread with the source language code (e.g. 'en') to retry."),
        )
        .await;

        self.retries.insert(&thread, request);
        info!("awaiting correction in thread {thread}");
    }

    async fn post(&self, channel: &ChannelId, text: &str) {
        if let Err(err) = self.gateway.post_message(channel, text).await {
            warn!("failed to post message: {err:#}");
        }
    }

    async fn thread_post(&self, thread: &MessageId, text: &str) {
        if let Err(err) = self.gateway.post_in_thread(thread, text).await {
            warn!("failed to post in thread: {err:#}");
        }
    }

    async fn ephemeral(&self, channel: &ChannelId, user: &UserId, text: &str) {
        if let Err(err) = self.gateway.post_ephemeral(channel, user, text).await {
            warn!("failed to post ephemeral reply: {err:#}");
        }
    }
}

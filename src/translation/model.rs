use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::borrow::Cow;

use super::invoker::{Source, Translated, Translator};
use super::language::{display_name, is_supported};
use super::prompt::{DETECT_PROMPT, build_translate_prompt};
use super::sse::sse_to_text_stream;
use crate::error::TranslateError;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// One completion round's failure, before it is given pipeline meaning.
///
/// `RouteMissing` (HTTP 404) means the endpoint serves no model for the
/// request: an unsupported pair on the translation round, a plain model
/// failure on the detection round.
enum CompleteError {
    RouteMissing,
    Failure(String),
}

/// OpenAI-compatible chat-completions client behind the [`Translator`] seam.
///
/// One completion round per operation: a detection round for auto-source
/// requests, then a translation round. The client never retries; a failed
/// call surfaces as a model-class error for the retry protocol to handle.
pub struct ModelClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ModelClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    /// Runs one completion round and accumulates the streamed output.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompleteError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(user),
                },
            ],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| CompleteError::Failure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(CompleteError::RouteMissing);
            }
            let body = response.text().await.unwrap_or_default();
            return Err(CompleteError::Failure(format!("status {status}: {body}")));
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut output = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| CompleteError::Failure(format!("stream error: {e}")))?;
            output.push_str(&chunk);
        }

        if output.trim().is_empty() {
            return Err(CompleteError::Failure(
                "model returned empty output".to_string(),
            ));
        }

        Ok(output)
    }

    /// Asks the model for the source language of `text`.
    async fn detect(&self, text: &str) -> Result<String, TranslateError> {
        let reply = self.complete(DETECT_PROMPT, text).await.map_err(|e| match e {
            CompleteError::RouteMissing => {
                TranslateError::ModelFailure("endpoint has no completions route".to_string())
            }
            CompleteError::Failure(msg) => TranslateError::ModelFailure(msg),
        })?;

        let code = reply
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_ascii_lowercase();

        if code == "und" || !is_supported(&code) {
            return Err(TranslateError::DetectionFailed);
        }

        Ok(code)
    }
}

#[async_trait]
impl Translator for ModelClient {
    async fn translate(
        &self,
        text: &str,
        source: Source,
        target: &str,
    ) -> Result<Translated, TranslateError> {
        let source = match source {
            Source::Code(code) => code,
            Source::Auto => self.detect(text).await?,
        };

        // Nothing to do when the text is already in the target language;
        // callers compare the returned codes to decide how to report it.
        if source == target {
            return Ok(Translated {
                source,
                target: target.to_string(),
                text: text.to_string(),
            });
        }

        let source_name = display_name(&source).unwrap_or(source.as_str());
        let target_name = display_name(target).unwrap_or(target);

        let prompt = build_translate_prompt(source_name, target_name);
        let translated = self.complete(&prompt, text).await.map_err(|e| match e {
            CompleteError::RouteMissing => TranslateError::UnsupportedPair {
                source_lang: source.clone(),
                target: target.to_string(),
            },
            CompleteError::Failure(msg) => TranslateError::ModelFailure(msg),
        })?;

        Ok(Translated {
            source,
            target: target.to_string(),
            text: translated,
        })
    }
}

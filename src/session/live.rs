//! Live translation sessions, one per channel at most.
//!
//! While a channel has a session, every qualifying message in it is treated
//! as an implicit translation request toward the session's target.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use crate::error::TranslateError;
use crate::gateway::ChannelId;

/// An active live-translation binding for a channel.
#[derive(Debug, Clone)]
pub struct LiveSession {
    pub channel: ChannelId,
    pub target: String,
    pub started_at: Instant,
}

#[derive(Debug, Default)]
pub struct LiveSessionRegistry {
    sessions: Mutex<HashMap<ChannelId, LiveSession>>,
}

impl LiveSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `target` to the channel, returning the prior session so callers
    /// can report "switched from X to Y". Starting over an active session
    /// overwrites it; sessions never layer.
    pub fn start(&self, channel: &ChannelId, target: &str) -> Option<LiveSession> {
        let session = LiveSession {
            channel: channel.clone(),
            target: target.to_string(),
            started_at: Instant::now(),
        };
        self.lock().insert(channel.clone(), session)
    }

    /// Removes the channel's session.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::NotActive`] when no session is bound.
    pub fn stop(&self, channel: &ChannelId) -> Result<LiveSession, TranslateError> {
        self.lock().remove(channel).ok_or(TranslateError::NotActive)
    }

    /// Pure read of the channel's session.
    pub fn get(&self, channel: &ChannelId) -> Option<LiveSession> {
        self.lock().get(channel).cloned()
    }

    #[allow(clippy::unwrap_used)]
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ChannelId, LiveSession>> {
        // Lock scopes are short and never hold user code; poisoning cannot occur.
        self.sessions.lock().unwrap()
    }
}

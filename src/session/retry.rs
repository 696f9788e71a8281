//! Retry correlation: failed translations awaiting a source correction.
//!
//! Each model-class failure opens an error thread; the thread id keys the
//! stored context here. A later reply in that thread carrying a bare
//! language code re-runs the original request with that source. Contexts are
//! bounded by a fixed TTL so sustained failures cannot grow memory without
//! limit; expired entries are purged lazily on store access.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::gateway::{ChannelId, MessageId, UserId};

/// Lifecycle states of one error occurrence. The store's operations are the
/// transitions: `insert` creates `AwaitingCorrection`, `take` moves to
/// `Retrying`, the retry's result lands in `Resolved` or `Replaced`, and
/// TTL/channel purges drop a waiting context to `Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    AwaitingCorrection,
    Retrying,
    Resolved,
    Replaced,
    Expired,
}

impl RetryState {
    /// Whether `next` is a legal successor of `self`.
    pub const fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::AwaitingCorrection, Self::Retrying | Self::Expired)
                | (Self::Retrying, Self::Resolved | Self::Replaced)
        )
    }
}

/// The part of a failed request needed to re-run it. The source language is
/// deliberately absent: it was unknown or wrong, and the correction reply
/// supplies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryRequest {
    pub text: String,
    pub target: String,
    pub author: UserId,
    pub channel: ChannelId,
}

/// One failed translation awaiting correction.
#[derive(Debug, Clone)]
pub struct RetryContext {
    pub thread: MessageId,
    pub request: RetryRequest,
    pub created_at: Instant,
}

#[derive(Debug)]
pub struct RetryStore {
    ttl: Duration,
    contexts: Mutex<HashMap<MessageId, RetryContext>>,
}

impl RetryStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            contexts: Mutex::new(HashMap::new()),
        }
    }

    /// Binds a context to an error thread. A second failure bound to the
    /// same thread replaces the earlier context rather than duplicating it.
    pub fn insert(&self, thread: &MessageId, request: RetryRequest) {
        let context = RetryContext {
            thread: thread.clone(),
            request,
            created_at: Instant::now(),
        };
        let mut contexts = self.lock();
        Self::purge_expired(&mut contexts, self.ttl);
        contexts.insert(thread.clone(), context);
    }

    /// Whether a live (unexpired) context is bound to the thread.
    pub fn contains(&self, thread: &MessageId) -> bool {
        let mut contexts = self.lock();
        Self::purge_expired(&mut contexts, self.ttl);
        contexts.contains_key(thread)
    }

    /// Atomically removes and returns the thread's context. The first valid
    /// correction observed wins; later replies find nothing and fall through
    /// to ordinary message handling.
    pub fn take(&self, thread: &MessageId) -> Option<RetryContext> {
        let mut contexts = self.lock();
        Self::purge_expired(&mut contexts, self.ttl);
        contexts.remove(thread)
    }

    /// Drops every context whose error thread lives in `channel`.
    pub fn purge_channel(&self, channel: &ChannelId) {
        self.lock().retain(|_, ctx| ctx.request.channel != *channel);
    }

    fn purge_expired(contexts: &mut HashMap<MessageId, RetryContext>, ttl: Duration) {
        contexts.retain(|_, ctx| ctx.created_at.elapsed() < ttl);
    }

    #[allow(clippy::unwrap_used)]
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<MessageId, RetryContext>> {
        // Lock scopes are short and never hold user code; poisoning cannot occur.
        self.contexts.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(channel: &str) -> RetryRequest {
        RetryRequest {
            text: "good morning".to_string(),
            target: "fr".to_string(),
            author: "u1".to_string(),
            channel: channel.to_string(),
        }
    }

    fn store() -> RetryStore {
        RetryStore::new(Duration::from_secs(900))
    }

    #[test]
    fn test_insert_then_take() {
        let store = store();
        let thread = "t1".to_string();

        store.insert(&thread, request("c1"));
        assert!(store.contains(&thread));

        let ctx = store.take(&thread).expect("context stored");
        assert_eq!(ctx.request.text, "good morning");
        assert!(!store.contains(&thread));
    }

    #[test]
    fn test_take_is_exclusive() {
        let store = store();
        let thread = "t1".to_string();

        store.insert(&thread, request("c1"));
        assert!(store.take(&thread).is_some());
        // The first valid correction already consumed the context.
        assert!(store.take(&thread).is_none());
    }

    #[test]
    fn test_second_failure_replaces_context() {
        let store = store();
        let thread = "t1".to_string();

        store.insert(&thread, request("c1"));
        let mut second = request("c1");
        second.text = "second attempt".to_string();
        store.insert(&thread, second);

        let ctx = store.take(&thread).expect("context stored");
        assert_eq!(ctx.request.text, "second attempt");
        assert!(store.take(&thread).is_none());
    }

    #[test]
    fn test_expired_context_is_gone() {
        let store = RetryStore::new(Duration::ZERO);
        let thread = "t1".to_string();

        store.insert(&thread, request("c1"));
        std::thread::sleep(Duration::from_millis(5));

        assert!(!store.contains(&thread));
        assert!(store.take(&thread).is_none());
    }

    #[test]
    fn test_retry_state_transitions() {
        use RetryState::{AwaitingCorrection, Expired, Replaced, Resolved, Retrying};

        assert!(AwaitingCorrection.can_become(Retrying));
        assert!(AwaitingCorrection.can_become(Expired));
        assert!(Retrying.can_become(Resolved));
        assert!(Retrying.can_become(Replaced));

        // No path back: a consumed or dropped context never reactivates.
        assert!(!Resolved.can_become(AwaitingCorrection));
        assert!(!Replaced.can_become(Retrying));
        assert!(!Expired.can_become(Retrying));
        assert!(!AwaitingCorrection.can_become(Resolved));
    }

    #[test]
    fn test_purge_channel_drops_only_that_channel() {
        let store = store();
        store.insert(&"t1".to_string(), request("c1"));
        store.insert(&"t2".to_string(), request("c2"));

        store.purge_channel(&"c1".to_string());

        assert!(!store.contains(&"t1".to_string()));
        assert!(store.contains(&"t2".to_string()));
    }
}

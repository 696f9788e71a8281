//! Per-channel event dispatch.
//!
//! One ordered worker per channel key: events for the same channel are
//! processed in arrival order, while a slow model call in one channel never
//! delays another channel's events. Workers are spawned lazily on a
//! channel's first event and fed through an unbounded queue.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::gateway::Event;

use super::orchestrator::Orchestrator;

pub struct Dispatcher {
    orchestrator: Arc<Orchestrator>,
    workers: Mutex<HashMap<String, mpsc::UnboundedSender<Event>>>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Dispatcher {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            orchestrator,
            workers: Mutex::new(HashMap::new()),
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Queues an event on its channel's worker, spawning the worker on the
    /// channel's first event.
    #[allow(clippy::unwrap_used)]
    pub fn dispatch(&self, event: Event) {
        let key = event.channel_key().to_string();
        let mut workers = self.workers.lock().unwrap();

        let sender = workers.entry(key).or_insert_with(|| {
            let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
            let orchestrator = Arc::clone(&self.orchestrator);
            let handle = tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    orchestrator.handle_event(event).await;
                }
            });
            self.handles.lock().unwrap().push(handle);
            tx
        });

        // A closed worker only happens at shutdown; the event is dropped
        // with the rest of the queue.
        let _ = sender.send(event);
    }

    /// Consumes a platform event stream to exhaustion, then drains.
    pub async fn run(self, events: impl Stream<Item = Event>) {
        let mut events = std::pin::pin!(events);
        while let Some(event) = events.next().await {
            self.dispatch(event);
        }
        self.drain().await;
    }

    /// Closes every worker queue and waits for queued events to finish.
    #[allow(clippy::unwrap_used)]
    pub async fn drain(self) {
        self.workers.lock().unwrap().clear();
        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.handles.lock().unwrap());
        for handle in handles {
            let _ = handle.await;
        }
    }
}

//! One-shot event channel.
//!
//! Events are side-effect instructions (navigate, show a transient message)
//! that must be handled exactly once. Unlike state they are queued, never
//! replayed, and each one is handed to a single reader.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

use crate::scope::ScopeHandle;

/// Unbounded FIFO queue with single-consumer delivery.
pub struct EventChannel<E> {
    sender: EventSender<E>,
    rx: Arc<Mutex<UnboundedReceiver<E>>>,
    scope: ScopeHandle,
}

impl<E: Send + 'static> EventChannel<E> {
    /// Create a channel that closes when `scope` is torn down.
    pub fn new(scope: ScopeHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            sender: EventSender {
                tx,
                scope: scope.clone(),
            },
            rx: Arc::new(Mutex::new(rx)),
            scope,
        }
    }

    /// Enqueue `event`. Never blocks, even with no subscriber attached.
    pub fn send(&self, event: E) {
        self.sender.send(event);
    }

    /// Cloneable producer handle for result callbacks.
    pub fn sender(&self) -> EventSender<E> {
        self.sender.clone()
    }

    /// Open a subscription. All subscriptions share one queue: whichever
    /// reads first takes the event.
    pub fn observe(&self) -> EventStream<E> {
        EventStream {
            rx: Arc::clone(&self.rx),
            scope: self.scope.clone(),
        }
    }
}

pub struct EventSender<E> {
    tx: UnboundedSender<E>,
    scope: ScopeHandle,
}

impl<E> EventSender<E> {
    /// Enqueue `event`. Events sent after teardown are dropped.
    pub fn send(&self, event: E) {
        if self.scope.is_cancelled() {
            tracing::trace!("event dropped: scope torn down");
            return;
        }
        if self.tx.send(event).is_err() {
            tracing::trace!("event dropped: channel closed");
        }
    }
}

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            scope: self.scope.clone(),
        }
    }
}

pub struct EventStream<E> {
    rx: Arc<Mutex<UnboundedReceiver<E>>>,
    scope: ScopeHandle,
}

impl<E> EventStream<E> {
    /// Wait for the next event. Returns `None` once the owning scope has
    /// been torn down; events still queued at that point are discarded.
    pub async fn next(&mut self) -> Option<E> {
        let mut rx = tokio::select! {
            biased;
            _ = self.scope.cancelled() => return None,
            guard = self.rx.lock() => guard,
        };
        tokio::select! {
            biased;
            _ = self.scope.cancelled() => None,
            event = rx.recv() => event,
        }
    }

    /// Take the next queued event without waiting.
    ///
    /// Returns `None` if the queue is empty, another subscription is
    /// currently reading, or the scope has been torn down.
    pub fn try_next(&mut self) -> Option<E> {
        if self.scope.is_cancelled() {
            return None;
        }
        let mut rx = self.rx.try_lock().ok()?;
        match rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

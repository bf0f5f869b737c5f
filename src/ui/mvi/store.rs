//! Observable state container.
//!
//! Holds the single current state of a screen. Reads are lock-free snapshots
//! of a `watch` channel; writes are serialized through a mutex so that an
//! update computed from a stale value can never overwrite a newer one.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use super::contract::{Reducer, UiState};

/// Thread-safe, cloneable handle to one screen's state.
///
/// Every clone refers to the same underlying value.
pub struct StateStore<S: UiState> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S> {
    tx: watch::Sender<S>,
    write_lock: Mutex<()>,
}

impl<S: UiState> StateStore<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                tx,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> S {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The first call to [`StateStream::next`] yields the current value;
    /// later calls wait for the next published update.
    pub fn observe(&self) -> StateStream<S> {
        let mut rx = self.inner.tx.subscribe();
        rx.mark_changed();
        StateStream { rx }
    }

    /// Apply `f` to the current state and publish the result.
    ///
    /// Updates are applied one at a time across all clones and threads. If
    /// `f` panics the stored state is left untouched and the panic unwinds
    /// into the caller. Observers are not woken when the new state equals
    /// the old one.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(S) -> S,
    {
        let _guard = self.inner.write_lock.lock();
        let next = f(self.current());
        self.inner.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// Run `intent` through reducer `R` against the current state.
    pub fn dispatch<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        self.update(|state| R::reduce(state, intent));
    }

    /// Number of live [`StateStream`]s.
    pub fn observer_count(&self) -> usize {
        self.inner.tx.receiver_count()
    }
}

impl<S: UiState> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: UiState + std::fmt::Debug> std::fmt::Debug for StateStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("current", &*self.inner.tx.borrow())
            .finish()
    }
}

/// Per-observer view of a [`StateStore`].
///
/// Replays the latest value on first read. Intermediate values may be
/// skipped if the observer falls behind; the most recent one is never lost.
pub struct StateStream<S: UiState> {
    rx: watch::Receiver<S>,
}

impl<S: UiState> StateStream<S> {
    /// Wait for the next state. Returns `None` once every store handle has
    /// been dropped.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Latest state without waiting and without consuming the change flag.
    pub fn latest(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Whether a value not yet returned by [`next`](Self::next) is waiting.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}

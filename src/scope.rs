//! Lifecycle scope of a ViewModel.
//!
//! A [`Scope`] is owned by exactly one ViewModel. Tearing it down cancels
//! pending result deliveries and ends event streams; [`ScopeHandle`]s are
//! the cheap, cloneable views handed to background tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct Scope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Tear the scope down. Returns `true` only for the first call.
    pub fn cancel(&self) -> bool {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
            return true;
        }
        false
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: Arc::clone(&self.cancelled),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for observing scope teardown
#[derive(Clone)]
pub struct ScopeHandle {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the owning scope has been torn down.
    pub async fn cancelled(&self) {
        // Register with Notify before reading the flag; otherwise a cancel()
        // landing between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

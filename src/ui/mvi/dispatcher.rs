//! Foreground execution context.
//!
//! Result callbacks from background work are posted here and executed by
//! whichever task owns the [`Dispatcher`], in the order they were posted.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::scope::ScopeHandle;

pub type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct Dispatcher {
    tx: UnboundedSender<Job>,
    rx: UnboundedReceiver<Job>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> DispatchHandle {
        DispatchHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run every job queued right now on the calling thread.
    ///
    /// Returns the number of jobs executed.
    pub fn drain(&mut self) -> usize {
        let mut executed = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            executed += 1;
        }
        executed
    }

    /// Wait for the next job and run it.
    pub async fn run_next(&mut self) {
        // The dispatcher keeps its own sender, so the queue never closes
        // while `self` is alive.
        if let Some(job) = self.rx.recv().await {
            job();
        }
    }

    /// Run jobs until `stop` is torn down.
    pub async fn run_until(&mut self, stop: ScopeHandle) {
        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                _ = self.run_next() => {}
            }
        }
        tracing::debug!(pending = self.rx.len(), "dispatcher stopped");
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting side of a [`Dispatcher`], safe to move to worker threads.
#[derive(Clone)]
pub struct DispatchHandle {
    tx: UnboundedSender<Job>,
}

impl DispatchHandle {
    /// Queue `job` for the foreground. Returns `false` if the dispatcher is
    /// gone, in which case the job is dropped unexecuted.
    pub fn post(&self, job: Job) -> bool {
        self.tx.send(job).is_ok()
    }
}

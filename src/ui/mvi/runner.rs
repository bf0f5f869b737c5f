//! Async task runner.
//!
//! Runs a unit of async work on the tokio worker pool and routes its result
//! back to the foreground [`Dispatcher`](super::Dispatcher). Each call to
//! [`TaskRunner::run`] is an independent state machine:
//!
//! ```text
//! Pending ──→ Succeeded
//!    │  └───→ Failed
//!    └──────→ Cancelled   (scope torn down before delivery)
//! ```
//!
//! There are no automatic retries; a retry is a new `run` call.

use std::any::Any;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Notify;
use tokio::task::JoinError;

use super::dispatcher::DispatchHandle;
use crate::error::AppError;
use crate::scope::ScopeHandle;

/// Why a task did not produce a value.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Failed(#[from] AppError),

    /// The work panicked; carries the panic message.
    #[error("{0}")]
    Panicked(String),
}

impl TaskError {
    /// Human-readable message for display.
    pub fn message(&self) -> String {
        match self {
            TaskError::Failed(err) => err.user_message(),
            TaskError::Panicked(message) => message.clone(),
        }
    }

    fn from_join(err: JoinError) -> Self {
        match err.try_into_panic() {
            Ok(payload) => TaskError::Panicked(panic_message(payload.as_ref())),
            Err(err) => TaskError::Panicked(err.to_string()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_string()
    }
}

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TaskStatus {
    Pending = 0,
    Succeeded = 1,
    Failed = 2,
    Cancelled = 3,
}

impl TaskStatus {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => TaskStatus::Pending,
            1 => TaskStatus::Succeeded,
            2 => TaskStatus::Failed,
            _ => TaskStatus::Cancelled,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, TaskStatus::Pending)
    }
}

struct TaskState {
    status: AtomicU8,
    ready: AtomicBool,
    notify: Notify,
}

impl TaskState {
    fn new() -> Self {
        Self {
            status: AtomicU8::new(TaskStatus::Pending as u8),
            ready: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    /// First terminal status wins.
    fn settle(&self, status: TaskStatus) {
        let _ = self.status.compare_exchange(
            TaskStatus::Pending as u8,
            status as u8,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }

    fn mark_ready(&self) {
        if !self.ready.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }
}

/// Observer for a single [`TaskRunner::run`] invocation.
#[derive(Clone)]
pub struct TaskHandle {
    state: Arc<TaskState>,
}

impl TaskHandle {
    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_u8(self.state.status.load(Ordering::SeqCst))
    }

    /// Resolves once the work has finished and its result is queued on the
    /// foreground, or once the task has been cancelled.
    pub async fn ready(&self) {
        let notified = self.state.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.state.ready.load(Ordering::SeqCst) {
            return;
        }
        notified.await;
    }
}

/// Spawns work bound to a scope and delivers results on a dispatcher.
#[derive(Clone)]
pub struct TaskRunner {
    dispatch: DispatchHandle,
    scope: ScopeHandle,
}

impl TaskRunner {
    pub fn new(dispatch: DispatchHandle, scope: ScopeHandle) -> Self {
        Self { dispatch, scope }
    }

    /// Run `work` in the background and hand its result to `on_result` on
    /// the foreground, exactly once.
    ///
    /// `on_result` is skipped entirely if the scope is torn down before the
    /// result reaches the foreground. Must be called within a tokio runtime.
    pub fn run<T, W, F>(&self, work: W, on_result: F) -> TaskHandle
    where
        T: Send + 'static,
        W: Future<Output = Result<T, AppError>> + Send + 'static,
        F: FnOnce(TaskResult<T>) + Send + 'static,
    {
        let state = Arc::new(TaskState::new());
        let handle = TaskHandle {
            state: Arc::clone(&state),
        };

        if self.scope.is_cancelled() {
            tracing::trace!("task rejected: scope already torn down");
            state.settle(TaskStatus::Cancelled);
            state.mark_ready();
            return handle;
        }

        let dispatch = self.dispatch.clone();
        let scope = self.scope.clone();
        let mut worker = tokio::spawn(work);
        let abort = worker.abort_handle();

        tokio::spawn(async move {
            let joined = tokio::select! {
                biased;
                _ = scope.cancelled() => {
                    abort.abort();
                    None
                }
                joined = &mut worker => Some(joined),
            };

            let Some(joined) = joined else {
                tracing::trace!("task cancelled before completion");
                state.settle(TaskStatus::Cancelled);
                state.mark_ready();
                return;
            };

            let result: TaskResult<T> = match joined {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(err)) => Err(TaskError::Failed(err)),
                Err(err) => Err(TaskError::from_join(err)),
            };
            if let Err(err) = &result {
                tracing::debug!(error = %err, "task failed");
            }

            let delivery_state = Arc::clone(&state);
            let posted = dispatch.post(Box::new(move || {
                if scope.is_cancelled() {
                    delivery_state.settle(TaskStatus::Cancelled);
                    return;
                }
                delivery_state.settle(if result.is_ok() {
                    TaskStatus::Succeeded
                } else {
                    TaskStatus::Failed
                });
                on_result(result);
            }));
            if !posted {
                tracing::trace!("task result dropped: dispatcher gone");
                state.settle(TaskStatus::Cancelled);
            }
            state.mark_ready();
        });

        handle
    }
}

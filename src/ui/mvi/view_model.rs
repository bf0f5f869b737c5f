//! Base ViewModel shared by every screen.

use std::future::Future;

use super::contract::{Reducer, UiState};
use super::dispatcher::DispatchHandle;
use super::events::{EventChannel, EventSender, EventStream};
use super::runner::{TaskHandle, TaskResult, TaskRunner};
use super::store::{StateStore, StateStream};
use crate::error::AppError;
use crate::scope::Scope;

/// State container, event channel and task runner bound to one scope.
///
/// Screen ViewModels embed this and expose intent handlers on top of it.
/// Dropping the ViewModel tears the scope down: pending results are never
/// delivered and event streams end.
///
/// ```ignore
/// let handle = self.base.fetch_data(
///     async move { repository.portrait_waifus(10).await },
///     move |result| store.dispatch::<HomeReducer>(HomeIntent::from(result)),
/// );
/// ```
pub struct ViewModel<S: UiState, E: Send + 'static> {
    store: StateStore<S>,
    events: EventChannel<E>,
    runner: TaskRunner,
    scope: Scope,
}

impl<S: UiState, E: Send + 'static> ViewModel<S, E> {
    pub fn new(initial: S, dispatch: DispatchHandle) -> Self {
        let scope = Scope::new();
        Self {
            store: StateStore::new(initial),
            events: EventChannel::new(scope.handle()),
            runner: TaskRunner::new(dispatch, scope.handle()),
            scope,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> S {
        self.store.current()
    }

    pub fn observe(&self) -> StateStream<S> {
        self.store.observe()
    }

    pub fn events(&self) -> EventStream<E> {
        self.events.observe()
    }

    /// Handle to the state container, for use inside result callbacks.
    pub fn store(&self) -> StateStore<S> {
        self.store.clone()
    }

    pub fn event_sender(&self) -> EventSender<E> {
        self.events.sender()
    }

    pub fn update_state<F>(&self, f: F)
    where
        F: FnOnce(S) -> S,
    {
        self.store.update(f);
    }

    pub fn dispatch<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        self.store.dispatch::<R>(intent);
    }

    pub fn send_event(&self, event: E) {
        self.events.send(event);
    }

    /// Run `source` off the foreground and route its result to `on_result`.
    pub fn fetch_data<T, W, F>(&self, source: W, on_result: F) -> TaskHandle
    where
        T: Send + 'static,
        W: Future<Output = Result<T, AppError>> + Send + 'static,
        F: FnOnce(TaskResult<T>) + Send + 'static,
    {
        self.runner.run(source, on_result)
    }

    pub fn is_cleared(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Tear down the scope. Idempotent.
    pub fn clear(&self) {
        if self.scope.cancel() {
            tracing::debug!(state = std::any::type_name::<S>(), "view model cleared");
        }
    }
}

impl<S: UiState, E: Send + 'static> Drop for ViewModel<S, E> {
    fn drop(&mut self) {
        self.clear();
    }
}

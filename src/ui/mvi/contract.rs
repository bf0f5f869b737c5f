//! The three roles every screen plugs into the MVI core.

/// Everything a screen needs to render, as one value.
///
/// The store replaces the value wholesale on each update and compares old
/// and new with `PartialEq`, so equal updates are not re-published.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Input to a [`Reducer`]: a user action, a lifecycle trigger or the outcome
/// of background work.
pub trait Intent: Send + 'static {}

/// Computes the next state of a screen from its current one.
///
/// `reduce` must not perform I/O; anything slow goes through
/// [`ViewModel::fetch_data`](super::ViewModel::fetch_data) and comes back as
/// another intent. [`StateStore::dispatch`](super::StateStore::dispatch)
/// runs it under the store's write lock.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

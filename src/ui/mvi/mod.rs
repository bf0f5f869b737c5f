//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ ViewModel ──→ TaskRunner ──(worker pool)──┐
//!                │                                     │
//!                │          Dispatcher (foreground) ◄──┘
//!                ▼                │
//!            StateStore ◄─ Reducer┘──→ EventChannel
//!                │                          │
//!                └──────→ screen binder ◄───┘
//! ```
//!
//! - **State**: Immutable representation of a screen, held by a [`StateStore`]
//! - **Intent**: User actions, lifecycle triggers and work results
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Event**: One-shot instruction (navigation, transient error) sent
//!   through an [`EventChannel`] and consumed exactly once

mod contract;
mod dispatcher;
mod events;
mod runner;
mod store;
mod view_model;

pub use contract::{Intent, Reducer, UiState};
pub use dispatcher::{DispatchHandle, Dispatcher, Job};
pub use events::{EventChannel, EventSender, EventStream};
pub use runner::{TaskError, TaskHandle, TaskResult, TaskRunner, TaskStatus};
pub use store::{StateStore, StateStream};
pub use view_model::ViewModel;

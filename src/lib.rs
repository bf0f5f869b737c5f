//! Image-gallery client built on a small Model-View-Intent core.
//!
//! - [`ui::mvi`]: state container, one-shot event channel, background task
//!   runner and the foreground dispatcher that ties them together
//! - [`ui::screens`]: splash, login and home ViewModels
//! - [`data`] / [`domain`]: HTTP endpoints, repositories and use cases
//! - [`app::AppContext`]: explicit wiring from a [`config::Config`]

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod scope;
pub mod ui;

pub use error::AppError;

//! Theme selection.
//!
//! The theme lives in a [`ThemeStore`] created once per application and
//! passed explicitly to whatever needs it.

mod intent;
mod reducer;
mod state;

pub use intent::ThemeIntent;
pub use reducer::ThemeReducer;
pub use state::{ThemeMode, ThemeState};

use crate::ui::mvi::StateStore;

pub type ThemeStore = StateStore<ThemeState>;

pub fn theme_store(initial: ThemeMode) -> ThemeStore {
    StateStore::new(ThemeState { mode: initial })
}

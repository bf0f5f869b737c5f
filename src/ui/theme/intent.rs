use super::state::ThemeMode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum ThemeIntent {
    /// Cycle to the next mode.
    Next,
    Select(ThemeMode),
}

impl Intent for ThemeIntent {}

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashState {
    pub is_loading: bool,
}

impl Default for SplashState {
    fn default() -> Self {
        Self { is_loading: true }
    }
}

impl UiState for SplashState {}

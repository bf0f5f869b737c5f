use crate::domain::WaifuImage;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub is_loading: bool,
    pub images: Vec<WaifuImage>,
    pub error_message: Option<String>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            is_loading: true,
            images: Vec::new(),
            error_message: None,
        }
    }
}

impl UiState for HomeState {}

impl HomeState {
    /// Retry is offered only after a failed load.
    pub fn can_retry(&self) -> bool {
        !self.is_loading && self.error_message.is_some()
    }
}

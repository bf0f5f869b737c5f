use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub identifier: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_button_enabled: bool,
}

impl UiState for LoginState {}

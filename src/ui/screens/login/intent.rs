use crate::ui::mvi::Intent;
use crate::ui::navigation::NavCommand;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    IdentifierChanged(String),
    LoginClicked,
    /// Local validation refused the identifier.
    ValidationFailed { message: String },
    LoginSucceeded,
    LoginFailed { message: String },
}

impl Intent for LoginIntent {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    NavigateTo(NavCommand),
    /// Transient message, e.g. for a snackbar.
    ShowError(String),
}

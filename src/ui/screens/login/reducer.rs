use super::intent::LoginIntent;
use super::state::LoginState;
use super::validation::is_valid_identifier;
use crate::ui::mvi::Reducer;

pub const FALLBACK_ERROR: &str = "Login failed";

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::IdentifierChanged(identifier) => LoginState {
                is_button_enabled: is_valid_identifier(&identifier) && !state.is_loading,
                identifier,
                error_message: None,
                ..state
            },
            LoginIntent::LoginClicked => {
                if state.is_loading {
                    return state;
                }
                LoginState {
                    is_loading: true,
                    error_message: None,
                    ..state
                }
            }
            LoginIntent::ValidationFailed { message } => finish(state, Some(message)),
            LoginIntent::LoginSucceeded => finish(state, None),
            LoginIntent::LoginFailed { message } => {
                let message = if message.trim().is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                };
                finish(state, Some(message))
            }
        }
    }
}

fn finish(state: LoginState, error_message: Option<String>) -> LoginState {
    LoginState {
        is_button_enabled: is_valid_identifier(&state.identifier),
        is_loading: false,
        error_message,
        ..state
    }
}

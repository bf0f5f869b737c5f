use super::intent::HomeIntent;
use super::state::HomeState;
use crate::ui::mvi::Reducer;

pub const FALLBACK_ERROR: &str = "Network error";

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Images already on screen stay visible while reloading.
            HomeIntent::Load | HomeIntent::Retry => HomeState {
                is_loading: true,
                error_message: None,
                ..state
            },
            HomeIntent::Loaded(images) => HomeState {
                is_loading: false,
                images,
                error_message: None,
            },
            HomeIntent::LoadFailed { message } => {
                let message = if message.trim().is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                };
                HomeState {
                    is_loading: false,
                    error_message: Some(message),
                    ..state
                }
            }
        }
    }
}

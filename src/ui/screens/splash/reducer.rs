use super::intent::SplashIntent;
use super::state::SplashState;
use crate::ui::mvi::Reducer;

pub struct SplashReducer;

impl Reducer for SplashReducer {
    type State = SplashState;
    type Intent = SplashIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SplashIntent::SplashCompleted => SplashState { is_loading: false },
        }
    }
}

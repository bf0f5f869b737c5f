use super::intent::ThemeIntent;
use super::state::ThemeState;
use crate::ui::mvi::Reducer;

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeState;
    type Intent = ThemeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThemeIntent::Next => ThemeState {
                mode: state.mode.next(),
            },
            ThemeIntent::Select(mode) => ThemeState { mode },
        }
    }
}

use std::convert::Infallible;

use super::intent::HomeIntent;
use super::reducer::HomeReducer;
use super::state::HomeState;
use crate::domain::GetPortraitWaifus;
use crate::ui::mvi::{DispatchHandle, TaskHandle, ViewModel};

/// Loads one page of portraits on creation; reloads on `Load`/`Retry`.
pub struct HomeViewModel {
    base: ViewModel<HomeState, Infallible>,
    get_portrait_waifus: GetPortraitWaifus,
    page_size: usize,
}

impl HomeViewModel {
    pub fn new(get_portrait_waifus: GetPortraitWaifus, page_size: usize, dispatch: DispatchHandle) -> Self {
        let view_model = Self {
            base: ViewModel::new(HomeState::default(), dispatch),
            get_portrait_waifus,
            page_size,
        };
        view_model.on_intent(HomeIntent::Load);
        view_model
    }

    pub fn base(&self) -> &ViewModel<HomeState, Infallible> {
        &self.base
    }

    /// Returns the handle of the load started by `Load`/`Retry`, if any.
    pub fn on_intent(&self, intent: HomeIntent) -> Option<TaskHandle> {
        match intent {
            HomeIntent::Load | HomeIntent::Retry => Some(self.load(intent)),
            other => {
                self.base.dispatch::<HomeReducer>(other);
                None
            }
        }
    }

    fn load(&self, trigger: HomeIntent) -> TaskHandle {
        self.base.dispatch::<HomeReducer>(trigger);

        let use_case = self.get_portrait_waifus.clone();
        let limit = self.page_size;
        let store = self.base.store();

        self.base.fetch_data(
            async move { use_case.invoke(limit).await },
            move |result| {
                let intent = match result {
                    Ok(images) => HomeIntent::Loaded(images),
                    Err(err) => HomeIntent::LoadFailed {
                        message: err.message(),
                    },
                };
                store.dispatch::<HomeReducer>(intent);
            },
        )
    }
}

use std::time::Duration;

use super::intent::{SplashEvent, SplashIntent};
use super::reducer::SplashReducer;
use super::state::SplashState;
use crate::ui::mvi::{DispatchHandle, TaskHandle, ViewModel};
use crate::ui::navigation::{Destination, NavCommand};

/// Holds the splash screen for a fixed delay, then sends the user home.
pub struct SplashViewModel {
    base: ViewModel<SplashState, SplashEvent>,
    timer: TaskHandle,
}

impl SplashViewModel {
    /// Starts the timer immediately.
    pub fn new(delay: Duration, dispatch: DispatchHandle) -> Self {
        let base = ViewModel::new(SplashState::default(), dispatch);
        let store = base.store();
        let events = base.event_sender();

        let timer = base.fetch_data(
            async move {
                tokio::time::sleep(delay).await;
                Ok(())
            },
            move |_| {
                // A failed timer still leaves the splash screen.
                store.dispatch::<SplashReducer>(SplashIntent::SplashCompleted);
                events.send(SplashEvent::NavigateTo(NavCommand::replace_all(
                    Destination::Home,
                )));
            },
        );

        Self { base, timer }
    }

    pub fn base(&self) -> &ViewModel<SplashState, SplashEvent> {
        &self.base
    }

    pub fn timer(&self) -> &TaskHandle {
        &self.timer
    }
}

use std::sync::Arc;

use super::intent::{LoginEvent, LoginIntent};
use super::reducer::LoginReducer;
use super::state::LoginState;
use super::validation::identifier_error;
use crate::domain::LoginRepository;
use crate::error::AppError;
use crate::ui::mvi::{DispatchHandle, TaskHandle, ViewModel};
use crate::ui::navigation::{Destination, NavCommand};

pub struct LoginViewModel {
    base: ViewModel<LoginState, LoginEvent>,
    repository: Arc<dyn LoginRepository>,
}

impl LoginViewModel {
    pub fn new(repository: Arc<dyn LoginRepository>, dispatch: DispatchHandle) -> Self {
        Self {
            base: ViewModel::new(LoginState::default(), dispatch),
            repository,
        }
    }

    pub fn base(&self) -> &ViewModel<LoginState, LoginEvent> {
        &self.base
    }

    /// Returns the handle of the login request when one was started.
    pub fn on_intent(&self, intent: LoginIntent) -> Option<TaskHandle> {
        match intent {
            LoginIntent::LoginClicked => self.login(),
            other => {
                self.base.dispatch::<LoginReducer>(other);
                None
            }
        }
    }

    fn login(&self) -> Option<TaskHandle> {
        if self.base.state().is_loading {
            return None;
        }
        self.base.dispatch::<LoginReducer>(LoginIntent::LoginClicked);

        let identifier = self.base.state().identifier;
        if let Some(message) = identifier_error(&identifier) {
            self.base.dispatch::<LoginReducer>(LoginIntent::ValidationFailed {
                message: message.to_string(),
            });
            return None;
        }

        let repository = Arc::clone(&self.repository);
        let store = self.base.store();
        let events = self.base.event_sender();

        let handle = self.base.fetch_data(
            async move {
                let response = repository.login(&identifier).await?;
                if !response.success {
                    let reason = response.error.unwrap_or_default();
                    return Err(AppError::LoginRejected(reason));
                }
                Ok(response)
            },
            move |result| match result {
                Ok(response) => {
                    tracing::info!(user_id = ?response.user_id, "login succeeded");
                    store.dispatch::<LoginReducer>(LoginIntent::LoginSucceeded);
                    events.send(LoginEvent::NavigateTo(NavCommand::replace_all(
                        Destination::Home,
                    )));
                }
                Err(err) => {
                    store.dispatch::<LoginReducer>(LoginIntent::LoginFailed {
                        message: err.message(),
                    });
                    // The reducer may have substituted a fallback message.
                    if let Some(message) = store.current().error_message {
                        events.send(LoginEvent::ShowError(message));
                    }
                }
            },
        );
        Some(handle)
    }
}

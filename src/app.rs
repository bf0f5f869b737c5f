//! Application wiring.
//!
//! Builds the HTTP clients, repositories and use cases from a [`Config`] and
//! hands out screen ViewModels. Everything is passed explicitly; there is no
//! global registry.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, LoginMode};
use crate::data::remote::{HttpClient, LoginApi, WaifuApi};
use crate::data::repository::{MockLoginRepository, RemoteLoginRepository, WaifuRepositoryImpl};
use crate::domain::{GetPortraitWaifus, LoginRepository, WaifuRepository};
use crate::error::AppError;
use crate::ui::mvi::DispatchHandle;
use crate::ui::screens::home::HomeViewModel;
use crate::ui::screens::login::LoginViewModel;
use crate::ui::screens::splash::SplashViewModel;
use crate::ui::theme::{theme_store, ThemeStore};

pub struct AppContext {
    config: Config,
    theme: ThemeStore,
    get_portrait_waifus: GetPortraitWaifus,
    login_repository: Arc<dyn LoginRepository>,
}

impl AppContext {
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;

        let timeout = Duration::from_secs(u64::from(config.api.timeout_seconds));
        let connect_timeout = Duration::from_secs(u64::from(config.api.connect_timeout_seconds));

        let waifu_client = HttpClient::new(&config.api.waifu_base_url, timeout, connect_timeout)?;
        let waifu_repository: Arc<dyn WaifuRepository> =
            Arc::new(WaifuRepositoryImpl::new(WaifuApi::new(waifu_client)));

        let login_repository: Arc<dyn LoginRepository> = match config.login.mode {
            LoginMode::Mock => Arc::new(MockLoginRepository::new(Duration::from_millis(
                config.login.mock_delay_ms,
            ))),
            LoginMode::Remote => {
                let client =
                    HttpClient::new(&config.api.login_base_url, timeout, connect_timeout)?;
                Arc::new(RemoteLoginRepository::new(LoginApi::new(client)))
            }
        };
        tracing::debug!(
            waifu_base_url = %config.api.waifu_base_url,
            login_mode = ?config.login.mode,
            "app context ready"
        );

        Ok(Self::with_repositories(config, waifu_repository, login_repository))
    }

    /// Wire the screens onto caller-supplied repositories.
    pub fn with_repositories(
        config: Config,
        waifu_repository: Arc<dyn WaifuRepository>,
        login_repository: Arc<dyn LoginRepository>,
    ) -> Self {
        Self {
            theme: theme_store(config.ui.theme),
            get_portrait_waifus: GetPortraitWaifus::new(waifu_repository),
            login_repository,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> ThemeStore {
        self.theme.clone()
    }

    pub fn splash_view_model(&self, dispatch: DispatchHandle) -> SplashViewModel {
        SplashViewModel::new(Duration::from_millis(self.config.splash.delay_ms), dispatch)
    }

    pub fn login_view_model(&self, dispatch: DispatchHandle) -> LoginViewModel {
        LoginViewModel::new(Arc::clone(&self.login_repository), dispatch)
    }

    pub fn home_view_model(&self, dispatch: DispatchHandle) -> HomeViewModel {
        HomeViewModel::new(
            self.get_portrait_waifus.clone(),
            self.config.home.page_size,
            dispatch,
        )
    }
}

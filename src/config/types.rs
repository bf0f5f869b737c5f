use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemeMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote endpoints and HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the image-search API (e.g., "https://api.waifu.im/").
    #[serde(default = "default_waifu_base_url")]
    pub waifu_base_url: String,
    /// Base URL of the login API. Only used when `login.mode = "remote"`.
    #[serde(default = "default_login_base_url")]
    pub login_base_url: String,
    /// Total request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// How long the splash screen stays up, in milliseconds (default: 2000).
    #[serde(default = "default_splash_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Number of images requested per load (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    /// Offline login with canned accounts.
    #[default]
    Mock,
    /// `POST login/create` against `api.login_base_url`.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub mode: LoginMode,
    /// Simulated latency of the mock login, in milliseconds (default: 1000).
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeMode,
}

fn default_waifu_base_url() -> String {
    "https://api.waifu.im/".to_string()
}

fn default_login_base_url() -> String {
    "http://127.0.0.1:8080/".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_splash_delay_ms() -> u64 {
    2000
}

fn default_page_size() -> usize {
    10
}

fn default_mock_delay_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            waifu_base_url: default_waifu_base_url(),
            login_base_url: default_login_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_timeout(),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_splash_delay_ms(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            mode: LoginMode::default(),
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

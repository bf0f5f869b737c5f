//! Application-level error type.
//!
//! Everything a repository or use case can fail with ends up here, and from
//! here in a [`TaskError`](crate::ui::mvi::TaskError) delivered to a screen.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::remote::HttpError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The login service answered but refused the identifier.
    #[error("Login rejected: {0}")]
    LoginRejected(String),

    #[error("{0}")]
    Message(String),
}

impl AppError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http(err) => err.to_string(),
            AppError::Config(err) => err.to_string(),
            AppError::LoginRejected(reason) => reason.clone(),
            AppError::Message(message) => message.clone(),
        }
    }
}

impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::Message(message)
    }
}

impl From<&str> for AppError {
    fn from(message: &str) -> Self {
        AppError::Message(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejected_shows_reason_only() {
        let err = AppError::LoginRejected("Invalid credentials".to_string());
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Login rejected: Invalid credentials");
    }

    #[test]
    fn http_errors_keep_their_message() {
        let err = AppError::from(HttpError::ServerError {
            status: 503,
            message: "Server error: 503 Service Unavailable".to_string(),
        });
        assert_eq!(err.user_message(), "Server error: 503 Service Unavailable");
    }
}

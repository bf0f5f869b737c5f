use std::time::Duration;

use async_trait::async_trait;

use crate::data::remote::LoginApi;
use crate::domain::{LoginRepository, LoginResponse};
use crate::error::AppError;

/// Login against the remote `login/create` endpoint.
pub struct RemoteLoginRepository {
    api: LoginApi,
}

impl RemoteLoginRepository {
    pub fn new(api: LoginApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl LoginRepository for RemoteLoginRepository {
    async fn login(&self, identifier: &str) -> Result<LoginResponse, AppError> {
        let dto = self.api.create_login(identifier).await?;
        tracing::info!(user = %dto.username, "remote login accepted");
        Ok(LoginResponse::from(dto))
    }
}

/// Offline login with a few canned accounts.
///
/// - `admin` → `admin-123`
/// - `user` → `user-456`
/// - `error` → rejected with "Invalid credentials"
/// - anything else → `user-<hash of identifier>`
///
/// Matching is case-insensitive.
pub struct MockLoginRepository {
    latency: Duration,
}

impl MockLoginRepository {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn respond(identifier: &str) -> LoginResponse {
        match identifier.to_ascii_lowercase().as_str() {
            "admin" => LoginResponse::accepted("admin-123"),
            "user" => LoginResponse::accepted("user-456"),
            "error" => LoginResponse::rejected("Invalid credentials"),
            _ => LoginResponse::accepted(format!("user-{}", identifier_hash(identifier))),
        }
    }
}

#[async_trait]
impl LoginRepository for MockLoginRepository {
    async fn login(&self, identifier: &str) -> Result<LoginResponse, AppError> {
        tokio::time::sleep(self.latency).await;
        Ok(Self::respond(identifier))
    }
}

/// Stable 31-multiplier string hash, folded to a non-negative value.
fn identifier_hash(identifier: &str) -> u32 {
    identifier
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}

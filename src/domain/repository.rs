use async_trait::async_trait;

use super::model::{LoginResponse, WaifuImage};
use crate::error::AppError;

/// Source of portrait images.
#[async_trait]
pub trait WaifuRepository: Send + Sync {
    async fn portrait_waifus(&self, limit: usize) -> Result<Vec<WaifuImage>, AppError>;
}

/// Identifier-based login.
///
/// Implementations return `Ok` with `success = false` when the service
/// answered but refused the identifier, and `Err` when it could not be
/// reached.
#[async_trait]
pub trait LoginRepository: Send + Sync {
    async fn login(&self, identifier: &str) -> Result<LoginResponse, AppError>;
}

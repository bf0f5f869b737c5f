use std::sync::Arc;

use super::model::WaifuImage;
use super::repository::WaifuRepository;
use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fetch one page of portrait images.
#[derive(Clone)]
pub struct GetPortraitWaifus {
    repository: Arc<dyn WaifuRepository>,
}

impl GetPortraitWaifus {
    pub fn new(repository: Arc<dyn WaifuRepository>) -> Self {
        Self { repository }
    }

    pub async fn invoke(&self, limit: usize) -> Result<Vec<WaifuImage>, AppError> {
        self.repository.portrait_waifus(limit).await
    }
}

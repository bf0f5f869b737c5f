use async_trait::async_trait;

use crate::data::remote::WaifuApi;
use crate::domain::{WaifuImage, WaifuRepository};
use crate::error::AppError;

/// Maps the image-search endpoint onto the domain model.
pub struct WaifuRepositoryImpl {
    api: WaifuApi,
}

impl WaifuRepositoryImpl {
    pub fn new(api: WaifuApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WaifuRepository for WaifuRepositoryImpl {
    async fn portrait_waifus(&self, limit: usize) -> Result<Vec<WaifuImage>, AppError> {
        let response = self.api.search_portrait(limit).await?;
        tracing::debug!(requested = limit, received = response.images.len(), "portrait search");
        Ok(response.images.into_iter().map(WaifuImage::from).collect())
    }
}

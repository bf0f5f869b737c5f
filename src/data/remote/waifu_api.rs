use crate::data::dto::WaifuSearchResponseDto;

use super::http::{HttpClient, HttpError};

/// Image-search endpoint. Filter parameters are fixed; only the result
/// count varies.
#[derive(Clone)]
pub struct WaifuApi {
    client: HttpClient,
}

impl WaifuApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn search_portrait(&self, limit: usize) -> Result<WaifuSearchResponseDto, HttpError> {
        let query = [
            ("included_tags", "waifu".to_string()),
            ("is_nsfw", "false".to_string()),
            ("orientation", "PORTRAIT".to_string()),
            ("limit", limit.to_string()),
        ];
        self.client.get("search", &query).await
    }
}

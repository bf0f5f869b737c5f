#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaifuImage {
    pub id: u64,
    pub url: String,
    pub preview_url: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl WaifuImage {
    /// URL best suited for a thumbnail: the preview when the API has one.
    pub fn thumbnail_url(&self) -> &str {
        self.preview_url.as_deref().unwrap_or(&self.url)
    }
}

/// Answer of the login service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: Option<String>,
    pub error: Option<String>,
}

impl LoginResponse {
    pub fn accepted(user_id: impl Into<String>) -> Self {
        Self {
            success: true,
            user_id: Some(user_id.into()),
            error: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            user_id: None,
            error: Some(reason.into()),
        }
    }
}

//! Wire formats of the remote APIs.

use serde::{Deserialize, Serialize};

use crate::domain::{LoginResponse, WaifuImage};

#[derive(Debug, Clone, Deserialize)]
pub struct WaifuSearchResponseDto {
    pub images: Vec<WaifuImageDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaifuImageDto {
    pub image_id: u64,
    pub url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl From<WaifuImageDto> for WaifuImage {
    fn from(dto: WaifuImageDto) -> Self {
        WaifuImage {
            id: dto.image_id,
            url: dto.url,
            preview_url: dto.preview_url,
            width: dto.width,
            height: dto.height,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub id: String,
    pub username: String,
    pub score: i64,
    #[serde(default)]
    pub guild_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LoginResponseDto> for LoginResponse {
    fn from(dto: LoginResponseDto) -> Self {
        LoginResponse::accepted(dto.id)
    }
}

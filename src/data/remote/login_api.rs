use reqwest::StatusCode;

use crate::data::dto::{LoginRequest, LoginResponseDto};

use super::http::{HttpClient, HttpError};

#[derive(Clone)]
pub struct LoginApi {
    client: HttpClient,
}

impl LoginApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create_login(&self, username: &str) -> Result<LoginResponseDto, HttpError> {
        self.client
            .post(
                "login/create",
                &LoginRequest { username },
                &[StatusCode::OK, StatusCode::CREATED],
            )
            .await
    }
}

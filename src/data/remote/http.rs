//! JSON-over-HTTP client with status classification.
//!
//! Every response goes through [`validate_status`] first (4xx and 5xx become
//! typed errors), then optionally through an allow-list check
//! ([`accept_status`]) before the body is decoded.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// 4xx response
    #[error("{message}")]
    ClientError { status: u16, message: String },

    /// 5xx response
    #[error("{message}")]
    ServerError { status: u16, message: String },

    /// Status outside the caller's allow-list
    #[error("HTTP {status} not accepted. Expected: {expected}")]
    NotAccepted { status: u16, expected: String },

    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl HttpError {
    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ClientError { status, .. }
            | HttpError::ServerError { status, .. }
            | HttpError::NotAccepted { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            HttpError::ClientError { .. } => "client_error",
            HttpError::ServerError { .. } => "server_error",
            HttpError::NotAccepted { .. } => "not_accepted",
            HttpError::Timeout { .. } => "timeout",
            HttpError::Connection { .. } => "connection_error",
            HttpError::Decode { .. } => "decode_error",
            HttpError::InvalidUrl { .. } => "invalid_url",
        }
    }

    fn from_transport(err: reqwest::Error, url: &Url) -> Self {
        if err.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            HttpError::Decode { source: err }
        } else {
            HttpError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Classify 4xx and 5xx responses.
pub fn validate_status(status: StatusCode) -> Result<(), HttpError> {
    if status.is_client_error() {
        return Err(HttpError::ClientError {
            status: status.as_u16(),
            message: format!("Client error: {}", status),
        });
    }
    if status.is_server_error() {
        return Err(HttpError::ServerError {
            status: status.as_u16(),
            message: format!("Server error: {}", status),
        });
    }
    Ok(())
}

/// Reject any status not in `accepted`.
pub fn accept_status(status: StatusCode, accepted: &[StatusCode]) -> Result<(), HttpError> {
    if accepted.contains(&status) {
        return Ok(());
    }
    let expected = accepted
        .iter()
        .map(|code| code.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(HttpError::NotAccepted {
        status: status.as_u16(),
        expected,
    })
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Build a client rooted at `base_url`. Relative paths passed to
    /// [`get`](Self::get) and [`post`](Self::post) are joined onto it, so the
    /// base should end with `/`.
    pub fn new(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self, HttpError> {
        let base_url = Url::parse(base_url).map_err(|e| HttpError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| HttpError::Connection {
                url: base_url.to_string(),
                source: e,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, HttpError> {
        self.base_url.join(path).map_err(|e| HttpError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }

    /// `GET path?query` and decode the JSON body.
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let request = self.client.get(url.clone()).query(query);
        let response = self.send(request, &url).await?;
        decode(response).await
    }

    /// `POST path` with a JSON body; the response status must be one of
    /// `accepted`.
    pub async fn post<B, T>(&self, path: &str, body: &B, accepted: &[StatusCode]) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let request = self.client.post(url.clone()).json(body);
        let response = self.send(request, &url).await?;
        accept_status(response.status(), accepted)?;
        decode(response).await
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, HttpError> {
        let response = request
            .send()
            .await
            .map_err(|e| HttpError::from_transport(e, url))?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "http response");
        if let Err(err) = validate_status(status) {
            tracing::warn!(url = %url, kind = err.error_type(), "{}", err);
            return Err(err);
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
    response
        .json::<T>()
        .await
        .map_err(|e| HttpError::Decode { source: e })
}

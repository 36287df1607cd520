/**
 * HTTP Client
 *
 * One reqwest client per application, built from `Config` and handed to
 * whatever needs to talk to the API. Every request carries
 * `Content-Type: application/json`.
 */

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::egui_app::config::Config;

/// Errors from talking to the API.
///
/// The reqwest error is kept as-is so callers see exactly what the HTTP
/// layer reported.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status, when the server answered with a non-success code
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http(e) => e.status(),
        }
    }

    pub fn is_connect(&self) -> bool {
        match self {
            ApiError::Http(e) => e.is_connect(),
        }
    }
}

/// Shared API client. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// POST `body` as JSON. Non-2xx statuses become errors.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, ApiError> {
        let url = self.config.api_url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Ok(response.error_for_status()?)
    }
}

//! TMDB-style catalog gateway.

use std::time::Duration;

use async_trait::async_trait;
use reelquery_model::{CatalogPage, CatalogRequest};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::CatalogGateway;
use crate::error::CoreError;

/// Default TMDB v3 API root.
pub const DEFAULT_TMDB_BASE: &str = "https://api.themoviedb.org/3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Retry policy for rate limits and transient transport failures.
const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY_MS: u64 = 500;

/// HTTP gateway to a TMDB-shaped catalog API.
///
/// Appends the `api_key` credential to every call and returns the upstream
/// document as a typed page. 429 responses and transport errors are retried
/// with exponential backoff; any other non-success status is fatal for the
/// request.
pub struct TmdbGateway {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for TmdbGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbGateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TmdbGateway {
    pub fn new(api_key: String, base_url: String) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(CoreError::HttpClient)?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn get_json<T>(
        &self,
        endpoint: &str,
        parameters: &[(&'static str, String)],
    ) -> Result<T, CoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut attempt = 0;

        let response = loop {
            attempt += 1;

            let result = self
                .http
                .get(&url)
                .query(&[("api_key", self.api_key.as_str())])
                .query(parameters)
                .send()
                .await;

            match result {
                Ok(response)
                    if response.status()
                        == StatusCode::TOO_MANY_REQUESTS =>
                {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(CoreError::CatalogStatus {
                            status: response.status().as_u16(),
                        });
                    }
                }
                Ok(response) if !response.status().is_success() => {
                    return Err(CoreError::CatalogStatus {
                        status: response.status().as_u16(),
                    });
                }
                Ok(response) => break response,
                Err(err) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(CoreError::CatalogUnavailable(err));
                    }
                }
            }

            let delay = BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::warn!(
                endpoint,
                attempt,
                delay_ms = delay,
                "catalog request failed, retrying"
            );
            tokio::time::sleep(Duration::from_millis(delay)).await;
        };

        response.json().await.map_err(CoreError::CatalogParse)
    }
}

#[async_trait]
impl CatalogGateway for TmdbGateway {
    async fn fetch(
        &self,
        request: &CatalogRequest,
    ) -> Result<CatalogPage, CoreError> {
        self.get_json(&request.endpoint, &request.parameters).await
    }
}

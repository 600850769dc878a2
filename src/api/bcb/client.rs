use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{ApiError, SeriesEntry};

/// Client for the Banco Central do Brasil SGS time-series API
pub struct BcbClient {
    http_client: HttpClient,
    base_url: String,
}

impl BcbClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.bcb.gov.br/dados/serie";

    /// Create a new client; `base_url` is `DEFAULT_BASE_URL` outside of tests
    pub fn with_base_url(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder().timeout(timeout);
        // Loopback hosts never go through HTTP(S)_PROXY
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }

        let http_client = builder
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn series_url(&self, series_code: u32) -> String {
        format!("{}/bcdata.sgs.{}/dados", self.base_url, series_code)
    }

    /// GET /bcdata.sgs.{code}/dados
    ///
    /// Fetches every published observation of a series, oldest first.
    ///
    /// # Returns
    /// * `Ok(Vec<SeriesEntry>)` - Observations as published
    /// * `Err(ApiError)` - Transport, status or payload error
    pub async fn get_series(&self, series_code: u32) -> Result<Vec<SeriesEntry>, ApiError> {
        let url = self.series_url(series_code);
        debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("SGS returned {} for series {}", status, series_code);
            return Err(ApiError::HttpError(status.as_u16(), body_text));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestError(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str::<Vec<SeriesEntry>>(&body_text)
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// Fetch a series and return its most recent entry together with the parsed value
    pub async fn get_latest_value(&self, series_code: u32) -> Result<(f64, Option<String>), ApiError> {
        let entries = self.get_series(series_code).await?;
        latest_value(series_code, &entries)
    }
}

fn is_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]"))
        .unwrap_or(false)
}

/// Value of the last observation in a series payload
pub fn latest_value(series_code: u32, entries: &[SeriesEntry]) -> Result<(f64, Option<String>), ApiError> {
    let last = entries.last().ok_or(ApiError::EmptySeries(series_code))?;
    let value = last.valor.as_f64()?;
    Ok((value, last.data.clone()))
}

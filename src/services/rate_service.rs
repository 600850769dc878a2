use tracing::{error, info};

use crate::api::bcb::BcbClient;

/// Fetch the most recent value of the series, or `None` when it is unavailable.
/// Every failure is logged here; callers only decide whether to go on.
pub async fn fetch_latest_rate(client: &BcbClient, series_code: u32) -> Option<f64> {
    match client.get_latest_value(series_code).await {
        Ok((rate, reference_date)) => {
            info!(
                "Series {} latest value: {} (reference date: {})",
                series_code,
                rate,
                reference_date.as_deref().unwrap_or("n/a")
            );
            Some(rate)
        }
        Err(e) if e.is_transport() => {
            error!("Failed to fetch data from the API: {}", e);
            None
        }
        Err(e) => {
            error!("Failed to process API data: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::bcb::client::tests::serve_once;
    use std::time::Duration;

    fn client(base_url: String) -> BcbClient {
        BcbClient::with_base_url(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_latest_rate_numeric_valor() {
        let base_url = serve_once("200 OK", r#"[{"valor":11.15},{"valor":10.9}]"#).await;
        assert_eq!(fetch_latest_rate(&client(base_url), 4392).await, Some(10.9));
    }

    #[tokio::test]
    async fn test_fetch_latest_rate_empty_payload() {
        let base_url = serve_once("200 OK", "[]").await;
        assert_eq!(fetch_latest_rate(&client(base_url), 4392).await, None);
    }

    #[tokio::test]
    async fn test_fetch_latest_rate_non_numeric_valor() {
        let base_url = serve_once("200 OK", r#"[{"data":"01/09/2024","valor":"abc"}]"#).await;
        assert_eq!(fetch_latest_rate(&client(base_url), 4392).await, None);
    }

    #[tokio::test]
    async fn test_fetch_latest_rate_infinite_valor() {
        let base_url = serve_once("200 OK", r#"[{"valor":"10.65"},{"valor":"inf"}]"#).await;
        assert_eq!(fetch_latest_rate(&client(base_url), 4392).await, None);
    }

    #[tokio::test]
    async fn test_fetch_latest_rate_missing_valor() {
        let base_url = serve_once("200 OK", r#"[{"data":"01/09/2024"}]"#).await;
        assert_eq!(fetch_latest_rate(&client(base_url), 4392).await, None);
    }

    #[tokio::test]
    async fn test_fetch_latest_rate_server_error() {
        let base_url = serve_once("500 Internal Server Error", "").await;
        assert_eq!(fetch_latest_rate(&client(base_url), 4392).await, None);
    }
}

use std::path::Path;

use tracing::{error, info, warn};

use super::Outcome;
use crate::api::bcb::BcbClient;
use crate::config::Settings;
use crate::services::{chart_service, rate_service, sample_service};

/// fetch → append samples → render. A missing rate skips collection but the
/// chart is still rendered from whatever the store already holds.
pub async fn execute(settings: &Settings, chart_name: &str) -> Outcome {
    let csv_path = Path::new(&settings.csv_path);

    let client = match BcbClient::with_base_url(settings.api.base_url.clone(), settings.api.request_timeout) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to initialize API client: {}", e);
            return Outcome::Failed;
        }
    };

    let collected = match rate_service::fetch_latest_rate(&client, settings.api.series_code).await {
        Some(base_rate) => {
            // Blocks this thread between rows; the current-thread runtime has no other task to starve
            let mut rng = rand::thread_rng();
            match sample_service::append_samples(csv_path, base_rate, &settings.sampling, &mut rng) {
                Ok(samples) => {
                    info!("Collected {} samples around {}", samples.len(), base_rate);
                    true
                }
                Err(e) => {
                    error!("Failed to write samples: {}", e);
                    return Outcome::Failed;
                }
            }
        }
        None => {
            warn!("CDI rate unavailable; no samples collected this run");
            false
        }
    };

    match chart_service::render_chart(csv_path, chart_name, &settings.chart) {
        Ok(Some(_)) if collected => Outcome::Completed,
        Ok(_) => Outcome::Degraded,
        Err(e) => {
            error!("Failed to render chart: {}", e);
            Outcome::Failed
        }
    }
}

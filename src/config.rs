// Run settings. Paths and the endpoint are fixed; only the log filter comes from the environment.
use std::time::Duration;

/// Relative path of the CSV store, shared by the writer and the renderer.
pub const CSV_STORE_PATH: &str = "./taxa-cdi.csv";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub sampling: SamplingSettings,
    pub chart: ChartSettings,
    pub csv_path: String,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    /// SGS series code for the CDI rate
    pub series_code: u32,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SamplingSettings {
    pub sample_count: usize,
    /// Samples are drawn uniformly from `base ± jitter`
    pub jitter: f64,
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api: ApiSettings::default(),
            sampling: SamplingSettings::default(),
            chart: ChartSettings::default(),
            csv_path: CSV_STORE_PATH.to_string(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: crate::api::bcb::BcbClient::DEFAULT_BASE_URL.to_string(),
            series_code: 4392,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for SamplingSettings {
    fn default() -> Self {
        SamplingSettings {
            sample_count: 10,
            jitter: 0.5,
            interval: Duration::from_secs(1),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        // 10x6 inches at 100 dpi
        ChartSettings {
            width: 1000,
            height: 600,
        }
    }
}

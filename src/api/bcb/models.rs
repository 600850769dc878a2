use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One observation of an SGS series, e.g. `{"data": "01/10/2024", "valor": "10.65"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Reference date in `dd/mm/yyyy`
    #[serde(default)]
    pub data: Option<String>,
    pub valor: SeriesValue,
}

/// SGS publishes values as strings, but plain JSON numbers are accepted too
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesValue {
    Number(f64),
    Text(String),
}

impl SeriesValue {
    /// Parsed value; `inf` and `NaN` are rejected along with non-numeric text
    pub fn as_f64(&self) -> Result<f64, ApiError> {
        let value = match self {
            SeriesValue::Number(value) => *value,
            SeriesValue::Text(raw) => raw.trim().parse::<f64>().map_err(|e| ApiError::InvalidValue {
                value: raw.clone(),
                reason: e.to_string(),
            })?,
        };

        if !value.is_finite() {
            return Err(ApiError::InvalidValue {
                value: value.to_string(),
                reason: "value is not finite".to_string(),
            });
        }
        Ok(value)
    }
}

/// Errors raised while talking to the SGS API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Network/request error (connection refused, timeout, ...)
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Non-2xx status
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Body is not an array of series entries
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    #[error("Series {0} returned no observations")]
    EmptySeries(u32),
    #[error("Invalid value '{value}': {reason}")]
    InvalidValue { value: String, reason: String },
}

impl ApiError {
    /// True when the data could not be obtained at all, as opposed to obtained but unusable
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::RequestError(_) | ApiError::HttpError(..))
    }
}

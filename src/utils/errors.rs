use thiserror::Error;

/// Failures reading or appending the CSV store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Failures producing the chart image
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to {stage}: {message}")]
    Drawing { stage: &'static str, message: String },

    #[error("Cannot chart rate {rate} at row {row}: value is not finite")]
    NonFiniteRate { row: usize, rate: f64 },

    #[error("Rate range {min}..{max} cannot be plotted")]
    UnplottableRange { min: f64, max: f64 },
}

impl ChartError {
    pub fn drawing(stage: &'static str, err: impl std::fmt::Display) -> Self {
        ChartError::Drawing {
            stage,
            message: err.to_string(),
        }
    }
}

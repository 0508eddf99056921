use thiserror::Error;

use crate::reading::SensorKind;

/// Main error type for the sensor agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store API error: {0}")]
    Store(String),
}

/// Errors produced while pulling records out of the input streams
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataSourceError {
    #[error("Missing data for one or more types")]
    MissingData,

    #[error("Invalid {kind} data format (must be {}): {line:?}", .kind.expected_format())]
    InvalidFormat { kind: SensorKind, line: String },

    #[error("No more {0} data")]
    EndOfData(SensorKind),
}

impl DataSourceError {
    pub fn invalid(kind: SensorKind, line: &str) -> Self {
        DataSourceError::InvalidFormat {
            kind,
            line: line.to_string(),
        }
    }
}

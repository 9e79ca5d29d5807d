use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("SmartZone API error: {path} returned HTTP {status}")]
    Resource {
        path: String,
        status: reqwest::StatusCode,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, ExporterError>;

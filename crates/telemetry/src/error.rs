use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid collector url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("collector rejected event: {0}")]
    Status(StatusCode),
}

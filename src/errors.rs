use actix_web::http::StatusCode;
use thiserror::Error;

use crate::consts::INTERNAL_SERVER_ERROR;

#[derive(Error, Debug, Clone)]
pub enum RelayError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Upstream error: {0}")]
    UpstreamError(String),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl RelayError {
    pub(crate) fn transport(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.is_empty() {
            RelayError::TransportError(INTERNAL_SERVER_ERROR.to_string())
        } else {
            RelayError::TransportError(msg)
        }
    }

    /// Bare message as returned to HTTP callers, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            RelayError::ValidationError(msg)
            | RelayError::UpstreamError(msg)
            | RelayError::TransportError(msg)
            | RelayError::ConfigError(msg) => msg,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::TransportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::transport(err.to_string())
    }
}

impl From<std::num::ParseIntError> for RelayError {
    fn from(err: std::num::ParseIntError) -> Self {
        RelayError::ConfigError(err.to_string())
    }
}

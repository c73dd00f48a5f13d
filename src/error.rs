use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("Reporting channel error: {0}")]
    Channel(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for DistributionError {
    fn from(err: reqwest::Error) -> Self {
        DistributionError::Channel(err.to_string())
    }
}

impl From<serde_json::Error> for DistributionError {
    fn from(err: serde_json::Error) -> Self {
        DistributionError::Serialization(err.to_string())
    }
}

impl IntoResponse for DistributionError {
    fn into_response(self) -> Response {
        let status = match self {
            DistributionError::Channel(_) => StatusCode::BAD_GATEWAY,
            DistributionError::Serialization(_) => StatusCode::BAD_REQUEST,
            DistributionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DistributionError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DistributionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DistributionError>;

// Error types for the translation gateway

use crate::deepl::DeeplError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Missing {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("DeepL error: {0}")]
    Upstream(#[from] DeeplError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GatewayError::MissingCredential(_)
            | GatewayError::Config(_)
            | GatewayError::ConfigParsing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert GatewayError to HTTP responses for Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "detail": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

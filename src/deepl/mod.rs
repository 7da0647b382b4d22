//! DeepL provider integration.
//!
//! The gateway only depends on the [`Translator`] contract: translate a batch
//! of strings into one target language and return an ordered sequence of
//! results. [`DeeplClient`] implements it against the DeepL REST API, and
//! [`TranslatorHandle`] memoizes the client for the lifetime of the process.

mod client;
mod credentials;
mod handle;

pub use client::DeeplClient;
pub use credentials::{normalize_key, ApiKey, CredentialReport};
pub use handle::TranslatorHandle;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Batch translation backend.
///
/// Implementations must return exactly one [`TextResult`] per input string,
/// in input order.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_text(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> Result<Vec<TextResult>, DeeplError>;
}

/// A single translated string as returned by DeepL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResult {
    pub text: String,
    #[serde(rename = "detected_source_language", default)]
    pub detected_source_lang: Option<String>,
}

/// Failures reported by the provider or while talking to it.
#[derive(Error, Debug)]
pub enum DeeplError {
    #[error("Authorization failure, check auth_key ({0})")]
    Authorization(String),

    #[error("Quota for this billing period has been exceeded ({0})")]
    QuotaExceeded(String),

    #[error("Too many requests, DeepL servers are currently experiencing high load ({0})")]
    TooManyRequests(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Connection failure: {0}")]
    Connection(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unexpected status {status}: {message}")]
    Api { status: u16, message: String },
}

impl DeeplError {
    /// Classify a non-success DeepL response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            }
        });

        match status {
            403 => DeeplError::Authorization(message),
            456 => DeeplError::QuotaExceeded(message),
            429 => DeeplError::TooManyRequests(message),
            400 => DeeplError::BadRequest(message),
            404 => DeeplError::NotFound(message),
            500..=599 => DeeplError::ServiceUnavailable(message),
            _ => DeeplError::Api { status, message },
        }
    }
}

/// DeepL error bodies look like `{"message": "...", "detail": "..."}`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?;

    match value.get("detail").and_then(|d| d.as_str()) {
        Some(detail) if !detail.is_empty() => Some(format!("{}, {}", message, detail)),
        _ => Some(message.to_string()),
    }
}

// HTTP request handlers

use super::routes::AppState;
use crate::deepl::CredentialReport;
use crate::error::GatewayError;
use crate::translation::{self, TranslationRequest, TranslationResponse};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: Some("Translation API is running. Use POST /api/translate".to_string()),
    })
}

pub async fn health_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: None,
    })
}

/// Handler for `POST /api/translate`
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String, // Parsed manually so malformed bodies map to 400
) -> Result<Json<TranslationResponse>, GatewayError> {
    let req = TranslationRequest::from_json(&body)?;

    info!(
        "Received translate request: target_lang={}, texts={}",
        req.target_lang,
        req.texts.len()
    );

    match translation::translate(&state.translator, req).await {
        Ok(resp) => {
            debug!("Returning {} translation(s)", resp.translations.len());
            Ok(Json(resp))
        }
        Err(e) => {
            warn!("Translate request failed: {}", e);
            Err(e)
        }
    }
}

/// Handler for `GET /api/debug/env`; only routed when explicitly enabled.
pub async fn debug_env_handler(State(state): State<AppState>) -> Json<CredentialReport> {
    Json(CredentialReport::from_env(&state.config.deepl.api_key_env))
}

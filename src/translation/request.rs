// Incoming translation request and its validation

use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Target language code, e.g. `EN-GB`, `FR`. Case-insensitive.
    pub target_lang: String,
    /// Strings to translate, in order.
    pub texts: Vec<String>,
}

impl TranslationRequest {
    /// Parse a raw JSON body. Missing fields and wrong types are input errors.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| GatewayError::InvalidInput(format!("Invalid request body: {}", e)))
    }

    /// Reject empty batches, blank strings and a blank target language.
    pub fn validate(&self) -> Result<()> {
        if self.texts.is_empty() {
            return Err(GatewayError::InvalidInput(
                "texts must be a non-empty list".to_string(),
            ));
        }

        if self.texts.iter().any(|t| t.trim().is_empty()) {
            return Err(GatewayError::InvalidInput(
                "texts must contain non-empty strings".to_string(),
            ));
        }

        if self.target_lang.trim().is_empty() {
            return Err(GatewayError::InvalidInput(
                "targetLang must be a non-empty language code".to_string(),
            ));
        }

        Ok(())
    }

    pub fn normalized_target_lang(&self) -> String {
        self.target_lang.trim().to_uppercase()
    }
}

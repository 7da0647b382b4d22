// Outgoing translation response

use crate::deepl::TextResult;
use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translations: Vec<String>,
}

impl From<Vec<TextResult>> for TranslationResponse {
    fn from(results: Vec<TextResult>) -> Self {
        Self {
            translations: results.into_iter().map(|r| r.text).collect(),
        }
    }
}

// DeepL REST API client

use super::{ApiKey, DeeplError, TextResult, Translator};
use crate::config::DeeplConfig;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const FREE_SERVER_URL: &str = "https://api-free.deepl.com";
const PRO_SERVER_URL: &str = "https://api.deepl.com";

/// Client for the DeepL `/v2/translate` endpoint.
pub struct DeeplClient {
    http_client: Client,
    server_url: String,
    auth_key: ApiKey,
}

#[derive(Debug, Serialize)]
struct TranslateTextRequest<'a> {
    text: &'a [String],
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateTextResponse {
    translations: Vec<TextResult>,
}

impl DeeplClient {
    /// Create a client for `auth_key`.
    ///
    /// `config.server_url` wins when set; otherwise free-account keys go to
    /// the free endpoint and everything else to the pro endpoint.
    pub fn new(auth_key: ApiKey, config: &DeeplConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .user_agent(concat!("deepl-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let server_url = match &config.server_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if auth_key.is_free_account() => FREE_SERVER_URL.to_string(),
            None => PRO_SERVER_URL.to_string(),
        };

        debug!("Created DeepL client for {}", server_url);

        Ok(Self {
            http_client,
            server_url,
            auth_key,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Upper-case the target code and reject values DeepL no longer accepts.
fn check_target_lang(target_lang: &str) -> std::result::Result<String, DeeplError> {
    let code = target_lang.trim().to_uppercase();

    match code.as_str() {
        "" => Err(DeeplError::InvalidArgument(
            "target_lang must not be empty".to_string(),
        )),
        "EN" => Err(DeeplError::InvalidArgument(
            "target_lang=\"EN\" is deprecated, please use \"EN-GB\" or \"EN-US\" instead."
                .to_string(),
        )),
        "PT" => Err(DeeplError::InvalidArgument(
            "target_lang=\"PT\" is deprecated, please use \"PT-PT\" or \"PT-BR\" instead."
                .to_string(),
        )),
        _ => Ok(code),
    }
}

#[async_trait]
impl Translator for DeeplClient {
    async fn translate_text(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> std::result::Result<Vec<TextResult>, DeeplError> {
        let target_lang = check_target_lang(target_lang)?;
        let url = format!("{}/v2/translate", self.server_url);

        debug!(
            "Sending {} text(s) to DeepL, target_lang={}",
            texts.len(),
            target_lang
        );

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.auth_key.expose()))
            .json(&TranslateTextRequest {
                text: texts,
                target_lang: &target_lang,
            })
            .send()
            .await
            .map_err(|e| DeeplError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DeeplError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(DeeplError::from_status(status.as_u16(), &body));
        }

        let parsed: TranslateTextResponse = serde_json::from_str(&body)
            .map_err(|e| DeeplError::InvalidResponse(e.to_string()))?;

        if parsed.translations.len() != texts.len() {
            return Err(DeeplError::InvalidResponse(format!(
                "expected {} translations, got {}",
                texts.len(),
                parsed.translations.len()
            )));
        }

        Ok(parsed.translations)
    }
}

// Lazily constructed, process-wide translator handle

use super::{ApiKey, DeeplClient, Translator};
use crate::config::DeeplConfig;
use crate::error::{GatewayError, Result};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::info;

type Factory = Box<dyn Fn() -> Result<Arc<dyn Translator>> + Send + Sync>;

/// Holds the translator built on first use.
///
/// A failed construction is not cached, so the next request tries again.
/// Concurrent first calls may both run the factory; only one result is kept.
pub struct TranslatorHandle {
    cell: OnceCell<Arc<dyn Translator>>,
    factory: Factory,
}

impl TranslatorHandle {
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Translator>> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// A handle that is already initialized with `translator`.
    pub fn ready(translator: Arc<dyn Translator>) -> Self {
        let cell = OnceCell::with_value(translator);
        Self {
            cell,
            factory: Box::new(|| {
                Err(GatewayError::Config(
                    "translator handle is pre-initialized".to_string(),
                ))
            }),
        }
    }

    /// Build a [`DeeplClient`] from the key in `config.api_key_env` on first use.
    pub fn from_env(config: DeeplConfig) -> Self {
        Self::lazy(move || {
            let key = ApiKey::from_env(&config.api_key_env)?;
            let client = DeeplClient::new(key, &config)?;
            info!("DeepL client initialized ({})", client.server_url());
            Ok(Arc::new(client) as Arc<dyn Translator>)
        })
    }

    pub fn get(&self) -> Result<Arc<dyn Translator>> {
        self.cell
            .get_or_try_init(|| (self.factory)())
            .map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

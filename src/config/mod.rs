// Configuration module

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from the default locations.
    ///
    /// See [`AppConfig::load_from`] for precedence.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (`DEEPL_GATEWAY__SECTION__KEY`)
    /// 2. Config file (`path`, or `~/.deepl-gateway/config.toml`)
    /// 3. Defaults (lowest)
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("DEEPL_GATEWAY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".deepl-gateway")
            .join("config.toml")
    }
}

//! Configuration data structures for the translation gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the upstream DeepL connection, and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DeepL settings.
    #[serde(default)]
    pub deepl: DeeplConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on the time spent handling one request.
    /// Default: `60`
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Maximum accepted request body size in bytes.
    /// Default: `1048576` (1 MiB)
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,

    /// Route `GET /api/debug/env`, which reports the credential length and
    /// its last three characters.
    /// Default: `false`
    #[serde(default)]
    pub expose_debug_env: bool,
}

/// Settings for the upstream DeepL connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeeplConfig {
    /// Environment variable holding the DeepL authentication key.
    /// Default: `DEEPL_API_KEY`
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Explicit API base URL. When unset, the free or pro endpoint is
    /// chosen from the key suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    /// Timeout for a single DeepL call in seconds.
    /// Default: `30`
    #[serde(default = "default_deepl_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
            expose_debug_env: false,
        }
    }
}

impl Default for DeeplConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            server_url: None,
            timeout_seconds: default_deepl_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    60
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_api_key_env() -> String {
    "DEEPL_API_KEY".to_string()
}

fn default_deepl_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

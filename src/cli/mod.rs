// CLI module for deepl-gateway

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// deepl-gateway - Minimal HTTP gateway in front of the DeepL API
#[derive(Parser, Debug, Default)]
#[command(name = "deepl-gateway", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.deepl-gateway/config.toml)
    #[arg(short, long, env = "DEEPL_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `server.host`
    #[arg(long, env = "DEEPL_GATEWAY_HOST")]
    pub host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

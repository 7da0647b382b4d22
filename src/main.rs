// deepl-gateway - Minimal HTTP gateway in front of the DeepL API

use anyhow::Result;
use clap::Parser;
use deepl_gateway::cli::Args;
use deepl_gateway::config::AppConfig;
use deepl_gateway::deepl::TranslatorHandle;
use deepl_gateway::server::create_router;
use deepl_gateway::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load_from(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting deepl-gateway v{}", env!("CARGO_PKG_VERSION"));

    // The key is read on the first translate call, not here
    if std::env::var_os(&config.deepl.api_key_env).is_none() {
        warn!(
            "{} is not set; translate requests will fail until it is",
            config.deepl.api_key_env
        );
    }
    let translator = TranslatorHandle::from_env(config.deepl.clone());

    // Phase 3: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, translator);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

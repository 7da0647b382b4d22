// HTTP routes configuration

use super::handlers::{debug_env_handler, health_handler, root_handler, translate_handler};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::deepl::TranslatorHandle;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub translator: Arc<TranslatorHandle>,
}

pub fn create_router(config: AppConfig, translator: TranslatorHandle) -> Router {
    let server = config.server.clone();
    let state = AppState {
        config,
        translator: Arc::new(translator),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/translate", post(translate_handler));

    if server.expose_debug_env {
        warn!("Debug endpoint /api/debug/env is enabled and reveals credential metadata");
        app = app.route("/api/debug/env", get(debug_env_handler));
    }

    app.layer(TimeoutLayer::new(Duration::from_secs(
        server.request_timeout_seconds,
    )))
    .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .layer(propagate_request_id)
    .layer(set_request_id)
    .with_state(state)
}

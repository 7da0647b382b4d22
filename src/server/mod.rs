//! Axum-based HTTP server for the translation gateway.
//!
//! # Components
//!
//! - `handlers`: Individual endpoints (root, health, translate, debug).
//! - `middleware`: Request ID tracking and CORS.
//! - `routes`: The router that ties handlers, state and layers together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::StatusResponse;
pub use routes::{create_router, AppState};

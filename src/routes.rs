//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Welcome message
//! - `GET  /health`        - Health check of the tutorial store
//! - `/api/tutorials/*`    - Tutorial REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured allowed origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, welcome_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - allowed cross-origin, or `*` for any
pub fn router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::tutorial_routes())
        .with_state(state)
        .layer(cors::layer(cors_origin))
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/tutorials/` reaches
/// the same handler as `/api/tutorials`.
pub fn app_router(state: AppState, cors_origin: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_origin))
}

//! Cross-origin resource sharing middleware.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer for the configured origin.
///
/// `*` allows any origin. Any other value must be a single valid origin
/// (e.g. `http://localhost:8081`); an unparsable value falls back to
/// allowing no cross-origin requests and logs a warning.
pub fn layer(origin: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origin == "*" {
        return base.allow_origin(Any);
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => base.allow_origin(value),
        Err(e) => {
            tracing::warn!("Invalid CORS origin '{}': {}. Cross-origin requests disabled.", origin, e);
            base
        }
    }
}

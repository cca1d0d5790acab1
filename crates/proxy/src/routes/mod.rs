//! HTTP route handlers for the proxy.
//!
//! # Route Structure
//!
//! ```text
//! GET     /health           - Health check
//! GET     /proxy/customers  - Relay to the Shopify Admin customers endpoint
//! OPTIONS /proxy/customers  - CORS preflight (answered by the CORS layer)
//! ```

pub mod customers;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Build the application router with CORS and tracing layers applied.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route("/proxy/customers", get(customers::list))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The proxy has no dependencies of
/// its own, so there is no separate readiness probe.
async fn health() -> &'static str {
    "ok"
}

/// CORS layer restricted to the configured front-end origins.
///
/// Browsers calling from other origins will not receive an
/// `Access-Control-Allow-Origin` header. Preflight `OPTIONS` requests are
/// answered here without reaching the handler.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse().ok().or_else(|| {
                warn!(%origin, "ignoring unparseable allowed origin");
                None
            })
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

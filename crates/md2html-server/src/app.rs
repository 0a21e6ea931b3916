//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;

/// Create the application router.
///
/// # Arguments
///
/// * `max_body_bytes` - Largest accepted request body; larger bodies get 413
pub(crate) fn create_router(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/convert", post(handlers::convert::convert))
        .route("/tokenize", post(handlers::tokenize::tokenize))
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(CompressionLayer::new()),
        )
}

//! Liveness endpoint.

/// Handle GET /health.
pub(crate) async fn health() -> &'static str {
    "ok"
}

//! HTTP server for md2html.
//!
//! This crate exposes the markdown converter over HTTP using axum:
//! - `POST /convert`: `{"markdown": "..."}` in, raw HTML out
//! - `POST /tokenize`: `{"markdown": "..."}` in, JSON token stream out
//! - `GET /health`: liveness probe
//!
//! Other methods on the conversion routes get `405`, bodies that are not valid
//! JSON get `400` with the decoder message as the body, and bodies above the
//! configured limit get `413`.
//!
//! # Quick Start
//!
//! ```ignore
//! use md2html_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         max_body_bytes: 1024 * 1024,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (md2html-server)
//!                      │
//!                      ├─► /convert  ──► md2html_renderer::convert
//!                      │
//!                      └─► /tokenize ──► md2html_renderer::tokenize
//! ```
//!
//! Each request converts its own input; no state is shared between requests.

mod app;
mod error;
mod handlers;
mod middleware;

use std::net::SocketAddr;
use std::str::FromStr;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Run the server until Ctrl-C is received.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = app::create_router(config.max_body_bytes);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, max_body_bytes = config.max_body_bytes, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from md2html config.
#[must_use]
pub fn server_config_from_config(config: &md2html_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        max_body_bytes: config.server.max_body_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = md2html_config::Config::default();
        config.server.host = "0.0.0.0".to_owned();
        config.server.port = 9000;
        config.server.max_body_bytes = 512;

        let server_config = server_config_from_config(&config);

        assert_eq!(server_config.host, "0.0.0.0");
        assert_eq!(server_config.port, 9000);
        assert_eq!(server_config.max_body_bytes, 512);
    }

    #[test]
    fn test_default_matches_config_default() {
        let from_config = server_config_from_config(&md2html_config::Config::default());
        let default = ServerConfig::default();

        assert_eq!(from_config.host, default.host);
        assert_eq!(from_config.port, default.port);
        assert_eq!(from_config.max_body_bytes, default.max_body_bytes);
    }

    #[tokio::test]
    async fn test_run_server_rejects_invalid_host() {
        let config = ServerConfig {
            host: "not a host".to_owned(),
            ..ServerConfig::default()
        };

        assert!(run_server(config).await.is_err());
    }
}

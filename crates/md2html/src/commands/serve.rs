//! `md2html serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use md2html_config::{CliSettings, Config};
use md2html_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover md2html.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "MD2HTML_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "MD2HTML_PORT")]
    port: Option<u16>,

    /// Enable verbose output (request tracing at info level).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::info!(
            host = %config.server.host,
            port = config.server.port,
            max_body_bytes = config.server.max_body_bytes,
            config_path = ?config.config_path,
            "Configuration loaded"
        );

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        match &config.config_path {
            Some(path) => output.info(&format!("Config file: {}", path.display())),
            None => output.info("Config file: none (using defaults)"),
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}

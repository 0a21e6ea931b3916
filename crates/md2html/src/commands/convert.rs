//! `md2html convert` command implementation.

use std::fmt::Write as _;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use md2html_renderer::{Token, convert, tokenize};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Markdown file to convert (reads stdin when omitted or `-`).
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the token stream instead of HTML.
    #[arg(long)]
    tokens: bool,

    /// Print the token stream as JSON.
    #[arg(long, requires = "tokens")]
    json: bool,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = read_input(self.input.as_deref())?;
        tracing::debug!(
            input = ?self.input,
            bytes = markdown.len(),
            tokens = self.tokens,
            json = self.json,
            "Read markdown input"
        );

        let rendered = if self.tokens {
            format_tokens(&tokenize(&markdown), self.json)?
        } else {
            convert(&markdown)
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered).map_err(|source| CliError::Write {
                    path: path.clone(),
                    source,
                })?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Read markdown from `path`, or from stdin when `path` is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Format tokens one per line (`Type: <kind> Value: <value>`) or as a JSON array.
fn format_tokens(tokens: &[Token], json: bool) -> Result<String, CliError> {
    if json {
        let mut out = serde_json::to_string_pretty(tokens)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{token}");
    }
    Ok(out)
}

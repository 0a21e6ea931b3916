//! HTTP request handlers.

pub(crate) mod convert;
pub(crate) mod health;
pub(crate) mod tokenize;

use serde::Deserialize;

use crate::error::ServerError;

/// Request body shared by the conversion endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ConvertRequest {
    /// Markdown source. A missing field is treated as empty input.
    #[serde(default)]
    pub(crate) markdown: String,
}

impl ConvertRequest {
    /// Decode a request body.
    ///
    /// The body is parsed as JSON regardless of its declared content type.
    pub(crate) fn from_body(body: &[u8]) -> Result<Self, ServerError> {
        Ok(serde_json::from_slice(body)?)
    }
}

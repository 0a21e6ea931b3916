//! Tokenize endpoint.
//!
//! Exposes the intermediate token stream as JSON, one object per token with
//! a `type` tag.

use axum::Json;
use axum::body::Bytes;
use md2html_renderer::Token;

use super::ConvertRequest;
use crate::error::ServerError;

/// Handle POST /tokenize.
pub(crate) async fn tokenize(body: Bytes) -> Result<Json<Vec<Token>>, ServerError> {
    let request = ConvertRequest::from_body(&body)?;
    let tokens = md2html_renderer::tokenize(&request.markdown);
    tracing::debug!(tokens = tokens.len(), "Tokenized markdown");
    Ok(Json(tokens))
}

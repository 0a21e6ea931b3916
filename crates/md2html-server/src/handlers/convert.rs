//! Conversion endpoint.
//!
//! Returns the rendered HTML as the raw response body.

use axum::body::Bytes;
use axum::response::Html;

use super::ConvertRequest;
use crate::error::ServerError;

/// Handle POST /convert.
pub(crate) async fn convert(body: Bytes) -> Result<Html<String>, ServerError> {
    let request = ConvertRequest::from_body(&body)?;
    let html = md2html_renderer::convert(&request.markdown);
    Ok(Html(html))
}

//! Line-oriented markdown tokenizer and HTML renderer.
//!
//! Conversion runs in two stages:
//! - [`tokenize`]: classifies each input line (empty line, header, list item)
//!   and scans the remaining lines for links, bold and italic spans.
//! - [`render`]: maps the resulting [`Token`] stream to HTML, tracking whether
//!   a `<ul>` is currently open.
//!
//! [`convert`] chains the two. All functions are pure and safe to call from
//! any number of threads.
//!
//! # Example
//!
//! ```
//! use md2html_renderer::convert;
//!
//! assert_eq!(convert("# Hello"), "<h1>Hello</h1>\n");
//! assert_eq!(
//!     convert("**Bold** and [a link](https://example.com)"),
//!     r#"<strong>Bold</strong> and <a href="https://example.com">a link</a>"#
//! );
//! ```

mod inline;
mod renderer;
mod token;
mod tokenizer;

pub use renderer::render;
pub use token::{LINE_BREAK_MARKER, Token, TokenKind};
pub use tokenizer::tokenize;

/// Convert markdown text to HTML.
///
/// Equivalent to `render(&tokenize(input))`.
pub fn convert(input: &str) -> String {
    let tokens = tokenize(input);
    let html = render(&tokens);
    tracing::debug!(
        input_bytes = input.len(),
        tokens = tokens.len(),
        html_bytes = html.len(),
        "Converted markdown"
    );
    html
}

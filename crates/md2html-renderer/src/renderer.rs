//! HTML renderer for token streams.

use crate::token::Token;

/// Render a token stream to HTML.
///
/// Block elements (headings, paragraphs, line breaks, list items) end with a
/// newline; inline elements and text do not. The first list item opens a
/// `<ul>` that stays open until the end of the stream, so non-list tokens
/// between items are rendered inside the same list. Text is emitted as-is,
/// without escaping.
///
/// # Example
///
/// ```
/// use md2html_renderer::{Token, render};
///
/// let html = render(&[
///     Token::ListItem { text: "a".to_owned() },
///     Token::ListItem { text: "b".to_owned() },
/// ]);
/// assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
/// ```
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() * 16);
    let mut list_open = false;

    for token in tokens {
        match token {
            Token::Header { level, text } => {
                let tag = format!("h{level}");
                push_element(&mut out, &tag, text.trim());
                out.push('\n');
            }
            Token::Paragraph { text } => {
                push_element(&mut out, "p", text);
                out.push('\n');
            }
            Token::LineBreak => out.push_str("<br/>\n"),
            Token::Bold { text } => push_element(&mut out, "strong", text),
            Token::Italic { text } => push_element(&mut out, "em", text),
            Token::Link { text, url } => {
                out.push_str(r#"<a href=""#);
                out.push_str(url);
                out.push_str(r#"">"#);
                out.push_str(text);
                out.push_str("</a>");
            }
            Token::ListItem { text } => {
                if !list_open {
                    out.push_str("<ul>\n");
                    list_open = true;
                }
                push_element(&mut out, "li", text);
                out.push('\n');
            }
            Token::Text { text } => out.push_str(text),
        }
    }

    if list_open {
        out.push_str("</ul>\n");
    }

    out
}

/// Append `<tag>content</tag>`.
fn push_element(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

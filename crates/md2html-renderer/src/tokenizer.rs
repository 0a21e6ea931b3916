//! Line tokenizer.
//!
//! Each input line is classified by the first structural rule that matches:
//! empty line, header, list item. Lines matching none of them are handed to
//! the [`InlineScanner`].

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::InlineScanner;
use crate::token::Token;

// The separator after the marker is ASCII whitespace only (`[\t\n\f\r ]`);
// a non-breaking space or other Unicode space leaves the line as text.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)[\t\n\f\r ]+(.*)").unwrap());

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*[\t\n\f\r ]+(.*)").unwrap());

/// Convert markdown text into an ordered token stream.
///
/// Lines are split on `\n`, so an empty input is a single empty line and a
/// trailing newline produces a trailing [`Token::LineBreak`]. Never fails:
/// anything that is not recognized becomes [`Token::Text`].
///
/// # Example
///
/// ```
/// use md2html_renderer::{Token, tokenize};
///
/// let tokens = tokenize("# Title\n* item");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Header { level: 1, text: "Title".to_owned() },
///         Token::ListItem { text: "item".to_owned() },
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for line in input.split('\n') {
        tokenize_line(line, &mut tokens);
    }
    tokens
}

fn tokenize_line(line: &str, tokens: &mut Vec<Token>) {
    if line.is_empty() {
        tokens.push(Token::LineBreak);
        return;
    }

    if let Some(caps) = HEADER_RE.captures(line) {
        tokens.push(Token::Header {
            level: caps[1].len(),
            text: caps[2].trim().to_owned(),
        });
        return;
    }

    if let Some(caps) = LIST_ITEM_RE.captures(line) {
        tokens.push(Token::ListItem {
            text: caps[1].to_owned(),
        });
        return;
    }

    tokens.extend(InlineScanner::new(line));
}

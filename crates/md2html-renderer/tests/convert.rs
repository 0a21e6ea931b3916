//! End-to-end conversion tests.

use md2html_renderer::{Token, TokenKind, convert, render, tokenize};
use pretty_assertions::assert_eq;

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(convert("hello world"), "hello world");
}

#[test]
fn test_headers() {
    assert_eq!(convert("# Title"), "<h1>Title</h1>\n");
    assert_eq!(convert("## Sub"), "<h2>Sub</h2>\n");
}

#[test]
fn test_single_list_item() {
    assert_eq!(convert("* item one"), "<ul>\n<li>item one</li>\n</ul>\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(convert(""), "<br/>\n");
}

#[test]
fn test_bold_and_italic() {
    assert_eq!(
        convert("**bold** and *italic*"),
        "<strong>bold</strong> and <em>italic</em>"
    );
}

#[test]
fn test_link() {
    assert_eq!(
        convert("[click](http://x.com)"),
        r#"<a href="http://x.com">click</a>"#
    );
}

#[test]
fn test_whitespace_only_line_renders_nothing() {
    assert_eq!(tokenize(" \t "), Vec::<Token>::new());
    assert_eq!(convert(" \t "), "");
}

#[test]
fn test_list_spans_interleaved_content() {
    assert_eq!(
        convert("* a\ntext\n* b"),
        "<ul>\n<li>a</li>\ntext<li>b</li>\n</ul>\n"
    );
}

#[test]
fn test_convert_is_render_of_tokenize() {
    let input = "# Notes\n\nSee [docs](/docs) for **more**.\n* first\n* second\n";
    assert_eq!(convert(input), render(&tokenize(input)));
}

#[test]
fn test_convert_is_deterministic() {
    let inputs = [
        "",
        "# a\n## b",
        "* x\ny\n* z",
        "**a** *b* [c](d)",
        "   ",
        "unclosed **bold and [link(",
    ];
    for input in inputs {
        assert_eq!(convert(input), convert(input));
    }
}

#[test]
fn test_document() {
    let input = "# Shopping\n\nBuy *fresh* bread at [the bakery](https://bakery.example).\n* flour\n* **yeast**\n";
    let expected = concat!(
        "<h1>Shopping</h1>\n",
        "<br/>\n",
        "Buy <em>fresh</em> bread at <a href=\"https://bakery.example\">the bakery</a>.",
        "<ul>\n",
        "<li>flour</li>\n",
        "<li>**yeast**</li>\n",
        "<br/>\n",
        "</ul>\n",
    );
    assert_eq!(convert(input), expected);
}

#[test]
fn test_token_kinds_in_order() {
    let kinds: Vec<TokenKind> = tokenize("# h\n\n* li\n**b** *i* [l](u) t")
        .iter()
        .map(Token::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Header,
            TokenKind::LineBreak,
            TokenKind::ListItem,
            TokenKind::Bold,
            TokenKind::Italic,
            TokenKind::Link,
            TokenKind::Text,
        ]
    );
}

#[test]
fn test_malformed_markdown_degrades_to_text() {
    let tokens = tokenize("[broken](link and *dangling");
    assert!(tokens.iter().all(|t| t.kind() == TokenKind::Text));
    assert_eq!(convert("[broken](link and *dangling"), "[broken](link and *dangling");
}

#[test]
fn test_crlf_line_endings() {
    // The trailing carriage return stays part of the line.
    assert_eq!(convert("# Title\r\n"), "<h1>Title</h1>\n<br/>\n");
    assert_eq!(convert("plain\r\n"), "plain\r<br/>\n");
}

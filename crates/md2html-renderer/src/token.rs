//! Token model shared by the tokenizer and the renderer.

use std::borrow::Cow;
use std::fmt;

/// Payload of a [`Token::LineBreak`] in its single-string form.
pub const LINE_BREAK_MARKER: &str = "\n";

/// A classified unit of markdown input.
///
/// Each variant carries only the fields it needs. Tokens are produced by
/// [`tokenize`](crate::tokenize) in input order and consumed once by
/// [`render`](crate::render).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Token {
    /// ATX-style heading (`# Title`).
    Header {
        /// Number of leading `#` characters.
        level: usize,
        /// Heading text without the `#` markers, trimmed.
        text: String,
    },
    /// Paragraph block. Never produced by the tokenizer.
    Paragraph {
        /// Paragraph content.
        text: String,
    },
    /// Empty input line.
    LineBreak,
    /// Text between `**` delimiters.
    Bold {
        /// Inner text.
        text: String,
    },
    /// Text between `*` delimiters.
    Italic {
        /// Inner text.
        text: String,
    },
    /// Inline link (`[text](url)`).
    Link {
        /// Link text.
        text: String,
        /// Link target, copied verbatim.
        url: String,
    },
    /// Bullet list item (`* item`).
    ListItem {
        /// Item text without the `* ` marker.
        text: String,
    },
    /// Literal passthrough text.
    Text {
        /// Text exactly as it appeared in the line.
        text: String,
    },
}

/// Fieldless discriminant of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum TokenKind {
    Header,
    Paragraph,
    LineBreak,
    Bold,
    Italic,
    Link,
    ListItem,
    Text,
}

impl TokenKind {
    /// Stable lowercase name, matching the serialized `type` tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::LineBreak => "line_break",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Link => "link",
            Self::ListItem => "list_item",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Create a text token.
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Header { .. } => TokenKind::Header,
            Self::Paragraph { .. } => TokenKind::Paragraph,
            Self::LineBreak => TokenKind::LineBreak,
            Self::Bold { .. } => TokenKind::Bold,
            Self::Italic { .. } => TokenKind::Italic,
            Self::Link { .. } => TokenKind::Link,
            Self::ListItem { .. } => TokenKind::ListItem,
            Self::Text { .. } => TokenKind::Text,
        }
    }

    /// Payload of this token as a single string.
    ///
    /// Links collapse into `Text: <text>, URL: <url>` and line breaks into
    /// [`LINE_BREAK_MARKER`]; every other kind returns its text unchanged.
    #[must_use]
    pub fn value(&self) -> Cow<'_, str> {
        match self {
            Self::LineBreak => Cow::Borrowed(LINE_BREAK_MARKER),
            Self::Link { text, url } => Cow::Owned(format!("Text: {text}, URL: {url}")),
            Self::Header { text, .. }
            | Self::Paragraph { text }
            | Self::Bold { text }
            | Self::Italic { text }
            | Self::ListItem { text }
            | Self::Text { text } => Cow::Borrowed(text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {} Value: {}", self.kind(), self.value())
    }
}

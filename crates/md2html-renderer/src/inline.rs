//! Inline element scanning.
//!
//! Splits one non-structural line into links, bold and italic spans, and the
//! literal text between them. At each position the earliest match wins; on a
//! tie the order is link, bold, italic.
//!
//! Each matcher's last result is kept between steps. None of the patterns
//! use anchors or look-around, so a pattern that found nothing in a suffix
//! finds nothing in any shorter suffix, and a match starting at or after the
//! cursor is still the leftmost one. Only matchers whose cached match was
//! overtaken by the cursor are searched again, which keeps a line linear in
//! its length.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::token::Token;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InlineKind {
    Link,
    Bold,
    Italic,
}

/// Matchers in tie-break priority order.
fn matchers() -> [(InlineKind, &'static Regex); 3] {
    [
        (InlineKind::Link, &*LINK_RE),
        (InlineKind::Bold, &*BOLD_RE),
        (InlineKind::Italic, &*ITALIC_RE),
    ]
}

/// A matched inline element, with offsets into the whole line.
struct InlineMatch<'a> {
    kind: InlineKind,
    start: usize,
    end: usize,
    captures: Captures<'a>,
}

impl<'a> InlineMatch<'a> {
    /// Wrap `captures` found in the suffix of the line beginning at `offset`.
    fn new(kind: InlineKind, offset: usize, captures: Captures<'a>) -> Option<Self> {
        let whole = captures.get(0)?;
        Some(Self {
            kind,
            start: offset + whole.start(),
            end: offset + whole.end(),
            captures,
        })
    }

    fn into_token(self) -> Token {
        let group = |i: usize| {
            self.captures
                .get(i)
                .map_or_else(String::new, |m| m.as_str().to_owned())
        };
        match self.kind {
            InlineKind::Link => Token::Link {
                text: group(1),
                url: group(2),
            },
            InlineKind::Bold => Token::Bold { text: group(1) },
            InlineKind::Italic => Token::Italic { text: group(1) },
        }
    }
}

/// Last search result of one matcher.
enum Cached<'a> {
    /// Never searched, or the match was consumed or overtaken.
    Stale,
    /// No match anywhere in the remaining line.
    Missing,
    Found(InlineMatch<'a>),
}

fn has_content(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Iterator over the inline tokens of a single line.
///
/// Text between elements is emitted unmodified, but only when it contains
/// something other than whitespace.
pub(crate) struct InlineScanner<'a> {
    line: &'a str,
    pos: usize,
    pending: Option<Token>,
    cache: [Cached<'a>; 3],
    #[cfg(test)]
    searches: usize,
}

impl<'a> InlineScanner<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            pending: None,
            cache: [Cached::Stale, Cached::Stale, Cached::Stale],
            #[cfg(test)]
            searches: 0,
        }
    }

    /// Re-run every matcher whose cached result no longer applies at `pos`.
    fn refresh(&mut self) {
        let line = self.line;
        let pos = self.pos;
        let rest = &line[pos..];

        for (slot, (kind, regex)) in self.cache.iter_mut().zip(matchers()) {
            let stale = match slot {
                Cached::Stale => true,
                Cached::Missing => false,
                Cached::Found(found) => found.start < pos,
            };
            if !stale {
                continue;
            }
            #[cfg(test)]
            {
                self.searches += 1;
            }
            *slot = regex
                .captures(rest)
                .and_then(|captures| InlineMatch::new(kind, pos, captures))
                .map_or(Cached::Missing, Cached::Found);
        }
    }

    /// Remove and return the earliest cached match. Ties go to the matcher
    /// listed first in [`matchers`].
    fn take_earliest(&mut self) -> Option<InlineMatch<'a>> {
        let (_, index) = self
            .cache
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Cached::Found(found) => Some((found.start, i)),
                Cached::Stale | Cached::Missing => None,
            })
            .min()?;

        match std::mem::replace(&mut self.cache[index], Cached::Stale) {
            Cached::Found(found) => Some(found),
            Cached::Stale | Cached::Missing => None,
        }
    }
}

impl Iterator for InlineScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        if self.pos >= self.line.len() {
            return None;
        }

        self.refresh();
        let line = self.line;
        let Some(found) = self.take_earliest() else {
            let rest = &line[self.pos..];
            self.pos = line.len();
            return has_content(rest).then(|| Token::text(rest));
        };

        let prefix = &line[self.pos..found.start];
        self.pos = found.end;
        let token = found.into_token();

        if has_content(prefix) {
            self.pending = Some(token);
            Some(Token::text(prefix))
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scan(line: &str) -> Vec<Token> {
        InlineScanner::new(line).collect()
    }

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(scan("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn test_whitespace_only_line_yields_nothing() {
        assert_eq!(scan("   \t "), Vec::<Token>::new());
    }

    #[test]
    fn test_bold_wins_tie_with_italic() {
        assert_eq!(
            scan("**word**"),
            vec![Token::Bold {
                text: "word".to_owned()
            }]
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            scan("*word*"),
            vec![Token::Italic {
                text: "word".to_owned()
            }]
        );
    }

    #[test]
    fn test_bold_then_italic_with_text_between() {
        assert_eq!(
            scan("**bold** and *italic*"),
            vec![
                Token::Bold {
                    text: "bold".to_owned()
                },
                text(" and "),
                Token::Italic {
                    text: "italic".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            scan("[click](http://x.com)"),
            vec![Token::Link {
                text: "click".to_owned(),
                url: "http://x.com".to_owned()
            }]
        );
    }

    #[test]
    fn test_link_wins_over_emphasis_inside_it() {
        assert_eq!(
            scan("[*a*](u)"),
            vec![Token::Link {
                text: "*a*".to_owned(),
                url: "u".to_owned()
            }]
        );
    }

    #[test]
    fn test_earliest_start_wins_regardless_of_priority() {
        assert_eq!(
            scan("*a* [b](c)"),
            vec![
                Token::Italic {
                    text: "a".to_owned()
                },
                Token::Link {
                    text: "b".to_owned(),
                    url: "c".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_prefix_and_suffix_preserved_verbatim() {
        assert_eq!(
            scan("  see [docs](/d) now  "),
            vec![
                text("  see "),
                Token::Link {
                    text: "docs".to_owned(),
                    url: "/d".to_owned()
                },
                text(" now  "),
            ]
        );
    }

    #[test]
    fn test_whitespace_between_elements_dropped() {
        assert_eq!(
            scan("*a* *b*"),
            vec![
                Token::Italic {
                    text: "a".to_owned()
                },
                Token::Italic {
                    text: "b".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_unmatched_delimiters_fall_back_to_text() {
        assert_eq!(scan("a * b [c] (d)"), vec![text("a * b [c] (d)")]);
    }

    #[test]
    fn test_empty_bold() {
        assert_eq!(
            scan("x ****"),
            vec![
                text("x "),
                Token::Bold {
                    text: String::new()
                }
            ]
        );
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(
            scan("héllo *wörld* ✓"),
            vec![
                text("héllo "),
                Token::Italic {
                    text: "wörld".to_owned()
                },
                text(" ✓"),
            ]
        );
    }

    /// Scan by searching every matcher over the whole remaining line at each step.
    fn scan_uncached(line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut rest = line;
        loop {
            let best = matchers()
                .into_iter()
                .filter_map(|(kind, regex)| {
                    regex
                        .captures(rest)
                        .and_then(|captures| InlineMatch::new(kind, 0, captures))
                })
                .reduce(|best, found| if found.start < best.start { found } else { best });
            let Some(found) = best else {
                if has_content(rest) {
                    tokens.push(Token::text(rest));
                }
                return tokens;
            };
            if has_content(&rest[..found.start]) {
                tokens.push(Token::text(&rest[..found.start]));
            }
            rest = &rest[found.end..];
            tokens.push(found.into_token());
        }
    }

    fn searches(line: &str) -> usize {
        let mut scanner = InlineScanner::new(line);
        scanner.by_ref().for_each(drop);
        scanner.searches
    }

    #[test]
    fn test_cached_scan_matches_full_rescan() {
        let lines = [
            "*a**b* [c](d) **e** *f*",
            "**a* b** *c**",
            "[a](b) *x [c](d)* **y [e](f)**",
            "*a* *b* [c](d",
            "a*b**c***d****e",
            "[*a*](u) *[b](v)* **[c](w)**",
            "  *  ** [ ]( ) *** ",
            "*a*".repeat(50).as_str(),
        ]
        .map(str::to_owned);

        for line in &lines {
            assert_eq!(scan(line), scan_uncached(line), "line: {line:?}");
        }
    }

    #[test]
    fn test_long_line_of_italics() {
        let tokens = scan(&"*a*".repeat(10_000));

        assert_eq!(tokens.len(), 10_000);
        assert!(
            tokens
                .iter()
                .all(|t| matches!(t, Token::Italic { text } if text == "a"))
        );
    }

    #[test]
    fn test_search_count_grows_linearly() {
        for unit in ["*a*", "**a** ", "[a](b) x "] {
            let short = searches(&unit.repeat(1_000));
            let long = searches(&unit.repeat(2_000));

            assert!(
                long <= 2 * short + 3,
                "{unit:?}: {short} searches for 1000 units, {long} for 2000"
            );
        }
    }

    #[test]
    fn test_missing_pattern_searched_once() {
        // Link and bold miss once each; italic runs per element plus the final miss.
        assert_eq!(searches(&"*a* ".repeat(100)), 2 + 101);
    }
}

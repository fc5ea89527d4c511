//! Scalar field lookup inside a release block
//!
//! Fields are lines indented by four spaces:
//!
//! ```text
//!     latest: "6.3.3-c842"
//!     latestReleaseDate: 2025-12-17
//! ```
//!
//! Only the first token after the colon is treated as the value, so trailing
//! comments survive a rewrite.

use regex::Regex;

/// Indentation of fields belonging to a release block
pub const FIELD_INDENT: &str = "    ";

/// Location of a field line within some text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    /// Byte offset just past the colon
    pub colon_end: usize,
    /// Byte offset of the value token (quotes included)
    pub value_start: usize,
    /// Byte offset of the end of the value token
    pub value_end: usize,
    /// Byte offset of the end of the line, before any line break
    pub line_end: usize,
}

impl FieldSpan {
    /// Raw value token, quotes included
    pub fn raw<'a>(&self, text: &'a str) -> &'a str {
        &text[self.value_start..self.value_end]
    }

    /// Value token with surrounding double quotes removed, `None` when empty
    pub fn value<'a>(&self, text: &'a str) -> Option<&'a str> {
        let value = self.raw(text).trim_matches('"');
        (!value.is_empty()).then_some(value)
    }
}

/// Finds the first `    <name>: <value>` line in a piece of text
#[derive(Debug, Clone)]
pub struct FieldLocator {
    re: Regex,
}

impl FieldLocator {
    pub fn new(name: &str) -> Self {
        let pattern = format!(
            r"(?m)^{FIELD_INDENT}{}:[ \t]*(?P<value>[^\r\n]*)",
            regex::escape(name)
        );
        Self {
            re: Regex::new(&pattern).unwrap(),
        }
    }

    pub fn locate(&self, text: &str) -> Option<FieldSpan> {
        let caps = self.re.captures(text)?;
        let whole = caps.get(0).unwrap();
        let rest = caps.name("value").unwrap();
        let colon_end = whole.start() + whole.as_str().find(':').unwrap() + 1;

        Some(FieldSpan {
            colon_end,
            value_start: rest.start(),
            value_end: rest.start() + token_len(rest.as_str()),
            line_end: rest.end(),
        })
    }
}

/// Length of the leading value token: a double-quoted string (closing quote
/// included) or a run of non-whitespace characters.
fn token_len(rest: &str) -> usize {
    if let Some(quoted) = rest.strip_prefix('"') {
        return match quoted.find('"') {
            Some(close) => close + 2,
            None => rest.trim_end().len(),
        };
    }
    rest.find(char::is_whitespace).unwrap_or(rest.len())
}

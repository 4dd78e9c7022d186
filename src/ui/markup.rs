//! ui::markup
//!
//! Inline markup for terminal output.
//!
//! # Design
//!
//! Messages are authored with lightweight inline tags (`<info>`, `<success>`,
//! `<comment>`, `<error>`) and rendered to ANSI escape sequences only at the
//! binary boundary. Library code and tests work with the raw markup, which
//! keeps assertions independent of terminal capabilities.
//!
//! Unknown tags are passed through untouched: markup is a convention, not a
//! validated grammar.

use std::fmt;

/// Tag-to-ANSI replacement table.
///
/// Open tags map to a color; every close tag maps to reset.
const TAGS: &[(&str, &str, &str)] = &[
    ("<info>", "</info>", "\x1b[32m"),
    ("<success>", "</success>", "\x1b[32m"),
    ("<comment>", "</comment>", "\x1b[33m"),
    ("<error>", "</error>", "\x1b[31m"),
];

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// A piece of user-facing text with inline markup.
///
/// # Example
///
/// ```
/// use comet::ui::MarkupText;
///
/// let text = MarkupText::new("<info>done</info>");
/// assert_eq!(text.strip(), "done");
/// assert!(text.render().contains("\x1b[32m"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupText {
    raw: String,
}

impl MarkupText {
    /// Create markup text from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Create markup text from multiple lines, joined with newlines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = lines
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .join("\n");
        Self { raw: joined }
    }

    /// The raw markup string.
    pub fn as_markup(&self) -> &str {
        &self.raw
    }

    /// True if there is nothing to print.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Render to a string with ANSI color escapes.
    pub fn render(&self) -> String {
        let mut out = self.raw.clone();
        for (open, close, color) in TAGS {
            out = out.replace(open, color).replace(close, RESET);
        }
        out
    }

    /// Remove known tags, yielding plain text.
    pub fn strip(&self) -> String {
        let mut out = self.raw.clone();
        for (open, close, _) in TAGS {
            out = out.replace(open, "").replace(close, "");
        }
        out
    }
}

// Display shows the raw markup; callers choose render() or strip() explicitly.
impl fmt::Display for MarkupText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Custom text printed on the garment.

use std::fmt;

/// Maximum number of newline-separated segments.
pub const MAX_LINES: usize = 3;

/// Maximum number of characters, newlines included.
pub const MAX_CHARS: usize = 180;

/// Print text, guaranteed to hold at most [`MAX_LINES`] segments and
/// [`MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrintText {
    value: String,
    truncated: bool,
}

impl PrintText {
    /// Creates print text from raw input, truncating it to the limits.
    ///
    /// Segments past the third are dropped, then the result is cut to
    /// [`MAX_CHARS`] characters.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        // Normalize Windows line endings so "\r" never counts as content.
        let normalized = raw.replace("\r\n", "\n");

        let mut kept: String = normalized
            .split('\n')
            .take(MAX_LINES)
            .collect::<Vec<_>>()
            .join("\n");
        let mut truncated = kept.len() < normalized.len();

        if kept.chars().count() > MAX_CHARS {
            kept = kept.chars().take(MAX_CHARS).collect();
            truncated = true;
        }

        Self {
            value: kept,
            truncated,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether construction dropped part of the input.
    #[must_use]
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Segments to render, one per line. Empty text has no lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let text = self.value.as_str();
        let has_lines = !text.is_empty();
        text.split('\n').filter(move |_| has_lines)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl fmt::Display for PrintText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_as_is() {
        let text = PrintText::new("HELLO\nWORLD");
        assert_eq!(text.as_str(), "HELLO\nWORLD");
        assert!(!text.was_truncated());
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["HELLO", "WORLD"]);
    }

    #[test]
    fn fourth_line_is_dropped() {
        let text = PrintText::new("a\nb\nc\nd");
        assert_eq!(text.as_str(), "a\nb\nc");
        assert!(text.was_truncated());
        assert_eq!(text.line_count(), 3);
    }

    #[test]
    fn trailing_newline_on_third_line_is_dropped() {
        let text = PrintText::new("a\nb\nc\n");
        assert_eq!(text.as_str(), "a\nb\nc");
        assert!(text.was_truncated());
    }

    #[test]
    fn empty_text_has_no_lines() {
        let text = PrintText::new("");
        assert!(text.is_empty());
        assert_eq!(text.line_count(), 0);
    }

    #[test]
    fn blank_lines_still_count() {
        let text = PrintText::new("\n\n");
        assert_eq!(text.line_count(), 3);
        assert!(!text.was_truncated());
    }

    #[test]
    fn long_text_is_cut_to_max_chars() {
        let raw = "é".repeat(MAX_CHARS + 20);
        let text = PrintText::new(&raw);
        assert_eq!(text.as_str().chars().count(), MAX_CHARS);
        assert!(text.was_truncated());
    }

    #[test]
    fn crlf_is_normalized() {
        let text = PrintText::new("a\r\nb");
        assert_eq!(text.as_str(), "a\nb");
        assert!(!text.was_truncated());
    }

    #[test]
    fn never_more_than_three_segments() {
        for n in 0..10 {
            let raw = vec!["x"; n].join("\n");
            assert!(PrintText::new(&raw).line_count() <= MAX_LINES);
        }
    }
}

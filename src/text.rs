//! Text helpers shared by the extractors and the dedup pass.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder values an upstream rich-text editor renders for an
/// intentionally empty line. They arrive as literal backslash-n text, not as
/// line breaks.
pub const BLANK_LINE_SENTINELS: [&str; 2] = ["\\n", "\\n\\n"];

/// Literal two-character line-break escape that may survive inside text.
pub const LINE_BREAK_SENTINEL: &str = "\\n";

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Collapse whitespace runs to one space, trim, and lowercase.
///
/// Used only to compare a text block with a neighbouring code block.
///
/// ```
/// use article_print::text::normalize_for_dedup;
///
/// assert_eq!(normalize_for_dedup("  Python\n\tprint(1) "), "python print(1)");
/// ```
#[must_use]
pub fn normalize_for_dedup(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_lowercase()
}

/// Whether `text` is one of the blank-line placeholders.
#[must_use]
pub fn is_blank_line_sentinel(text: &str) -> bool {
    BLANK_LINE_SENTINELS.contains(&text)
}

/// Trimmed text if it is worth a `Text` or `Heading` segment.
#[must_use]
pub fn meaningful(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_blank_line_sentinel(trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_and_lowercases() {
        assert_eq!(normalize_for_dedup("Hello\n\n  World"), "hello world");
        assert_eq!(normalize_for_dedup(""), "");
        assert_eq!(normalize_for_dedup(" \t\n "), "");
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        assert_eq!(normalize_for_dedup("a\u{a0}\u{2003}b"), "a b");
    }

    #[test]
    fn test_sentinels() {
        assert!(is_blank_line_sentinel("\\n"));
        assert!(is_blank_line_sentinel("\\n\\n"));
        assert!(!is_blank_line_sentinel("\n"));
        assert!(!is_blank_line_sentinel("\\n\\n\\n"));
    }

    #[test]
    fn test_meaningful() {
        assert_eq!(meaningful("  hi \n"), Some("hi"));
        assert_eq!(meaningful("   "), None);
        assert_eq!(meaningful(" \\n "), None);
        assert_eq!(meaningful("\\n\\n"), None);
        assert_eq!(meaningful("a\\nb"), Some("a\\nb"));
    }
}

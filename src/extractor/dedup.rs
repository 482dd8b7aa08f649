//! Removal of text blocks that mirror the code block after them.
//!
//! Some hosts render a rich code widget and, right before it, a plain text
//! block holding the same code (often prefixed with the language label).
//! Only a text segment immediately followed by a code segment is compared.

use tracing::debug;

use crate::result::Segment;
use crate::text::normalize_for_dedup;

/// Return a new list without the text segments that duplicate the code
/// segment right after them. Code segments are always kept.
#[must_use]
pub fn dedup_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut cleaned = Vec::with_capacity(segments.len());

    for (idx, current) in segments.iter().enumerate() {
        if let (Segment::Text { text }, Some(Segment::Code { language, text: code })) =
            (current, segments.get(idx + 1))
        {
            if mirrors_code(text, language, code) {
                debug!(index = idx, "dropping text block that mirrors the next code block");
                continue;
            }
        }
        cleaned.push(current.clone());
    }

    cleaned
}

/// Whether `text` is the code body, optionally prefixed by its language
/// label, once whitespace and case are normalized.
fn mirrors_code(text: &str, language: &str, code: &str) -> bool {
    let text = normalize_for_dedup(text);
    text == normalize_for_dedup(code)
        || text == normalize_for_dedup(&format!("{language}\n{code}"))
        || text == normalize_for_dedup(&format!("{language} {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_language_prefixed_mirror() {
        let input = vec![
            Segment::text("Hello"),
            Segment::text("python\nprint(1)"),
            Segment::code("python", "print(1)"),
        ];
        assert_eq!(
            dedup_segments(&input),
            vec![Segment::text("Hello"), Segment::code("python", "print(1)")]
        );
    }

    #[test]
    fn test_drops_bare_and_space_prefixed_mirrors() {
        let bare = vec![Segment::text("  PRINT(1) "), Segment::code("python", "print(1)")];
        assert_eq!(dedup_segments(&bare), vec![Segment::code("python", "print(1)")]);

        let spaced = vec![
            Segment::text("Python print(1)"),
            Segment::code("python", "print(1)"),
        ];
        assert_eq!(dedup_segments(&spaced), vec![Segment::code("python", "print(1)")]);
    }

    #[test]
    fn test_multiline_code_mirror() {
        let input = vec![
            Segment::text("rust\nfn main() {\nprintln!(\"hi\");\n}"),
            Segment::code("rust", "fn main() {\n    println!(\"hi\");\n}"),
        ];
        assert_eq!(dedup_segments(&input).len(), 1);
    }

    #[test]
    fn test_keeps_non_matching_text() {
        let input = vec![
            Segment::text("Run this snippet:"),
            Segment::code("python", "print(1)"),
        ];
        assert_eq!(dedup_segments(&input), input);
    }

    #[test]
    fn test_only_adjacent_pairs_are_compared() {
        let input = vec![
            Segment::text("python\nprint(1)"),
            Segment::heading("Between"),
            Segment::code("python", "print(1)"),
        ];
        assert_eq!(dedup_segments(&input), input);
    }

    #[test]
    fn test_code_then_text_is_kept() {
        let input = vec![Segment::code("", "x"), Segment::text("x")];
        assert_eq!(dedup_segments(&input), input);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_segments(&[]).is_empty());
    }
}

//! Paragraph Extraction
//!
//! Splits generated narrative text into deck pages, one per non-blank line.

/// Extract paragraphs from narrative text.
///
/// Splits on line boundaries (`\n` and `\r\n`), trims each line, and discards
/// blank lines. Original line order is preserved.
pub fn extract_paragraphs(narrative: &str) -> Vec<String> {
    narrative
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_discarded() {
        let text = "First paragraph.\n\n\nSecond paragraph.\n";
        let paragraphs = extract_paragraphs(text);
        assert_eq!(paragraphs, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let text = "  padded start\t\nclean line\n   \n";
        let paragraphs = extract_paragraphs(text);
        assert_eq!(paragraphs, vec!["padded start", "clean line"]);
    }

    #[test]
    fn test_order_preserved() {
        let text = "one\ntwo\nthree";
        let paragraphs = extract_paragraphs(text);
        assert_eq!(paragraphs, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "one\r\ntwo\r\n\r\nthree";
        let paragraphs = extract_paragraphs(text);
        assert_eq!(paragraphs, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_count_equals_non_blank_lines() {
        let text = "a\n\nb\nc\n\n";
        let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(extract_paragraphs(text).len(), non_blank);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_paragraphs("").is_empty());
        assert!(extract_paragraphs("\n\n  \n").is_empty());
    }
}

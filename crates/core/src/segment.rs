//! Splitting lyrics into slide-sized blocks.
//!
//! Verses are separated by one or more blank lines. Each verse becomes one
//! slide; the lines inside a verse stay together.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// A line break, any run of whitespace-only lines, and another line break.
static BLANK_LINE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\s*\r?\n").unwrap());

/// One trimmed, non-empty section of lyrics destined for a single slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideContentBlock(String);

impl SlideContentBlock {
    /// The block's text, exactly as it will be inserted on the slide.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Take ownership of the block's text.
    pub fn into_text(self) -> String {
        self.0
    }
}

impl AsRef<str> for SlideContentBlock {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for SlideContentBlock {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split raw lyrics on blank lines into ordered, non-empty blocks.
///
/// Any number of consecutive blank lines counts as one separator, and
/// leading or trailing blank lines never produce empty blocks. Returns an
/// empty vector for empty or whitespace-only input.
pub fn segment(raw_text: &str) -> Vec<SlideContentBlock> {
    BLANK_LINE_RUN_REGEX
        .split(raw_text)
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(|section| SlideContentBlock(section.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(raw: &str) -> Vec<String> {
        segment(raw).into_iter().map(SlideContentBlock::into_text).collect()
    }

    #[test]
    fn test_single_block() {
        assert_eq!(texts("only one block"), vec!["only one block"]);
    }

    #[test]
    fn test_two_verses() {
        assert_eq!(
            texts("Verse one line A\nline B\n\nVerse two"),
            vec!["Verse one line A\nline B", "Verse two"]
        );
    }

    #[test]
    fn test_many_blank_lines_collapse() {
        assert_eq!(texts("A\n\n\n\nB"), vec!["A", "B"]);
        assert_eq!(texts("A\n\nB"), texts("A\n\n\n\n\n\nB"));
    }

    #[test]
    fn test_blank_lines_with_spaces() {
        assert_eq!(texts("A\n   \n\t\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            texts("Line one\r\nLine two\r\n\r\nLine three"),
            vec!["Line one\r\nLine two", "Line three"]
        );
    }

    #[test]
    fn test_leading_and_trailing_blank_lines() {
        assert_eq!(texts("\n\n\nA\n\nB\n\n\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_single_newline_does_not_split() {
        assert_eq!(texts("A\nB\nC"), vec!["A\nB\nC"]);
    }

    #[test]
    fn test_blocks_are_trimmed() {
        assert_eq!(texts("   A  \n\n  B   "), vec!["A", "B"]);
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n  ").is_empty());
        assert!(segment("\n\n\n").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let raw = "Amazing grace how sweet the sound\nThat saved a wretch like me\n\nI once was lost";
        assert_eq!(segment(raw), segment(raw));
    }

    #[test]
    fn test_block_helpers() {
        let blocks = segment("One\nTwo\nThree");
        assert_eq!(blocks[0], "One\nTwo\nThree");
        assert_eq!(blocks[0].to_string(), "One\nTwo\nThree");
        assert_eq!(blocks[0].clone().into_text(), "One\nTwo\nThree");
    }
}

//! Normalization of extracted text before parsing.
//!
//! Extraction backends disagree on line endings, bullet glyphs, and
//! spacing; the line heuristics downstream expect a tidy stream. All
//! extracted text passes through [`normalize`] exactly once.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Bullet glyph variants standardized to `•`.
const BULLET_VARIANTS: [char; 6] = ['●', '○', '▪', '■', '◦', '‣'];

/// Normalize extracted resume text.
///
/// NFC normalization, CRLF→LF, exotic bullet glyphs → `•`, trailing-space
/// removal, and collapse of 3+ consecutive newlines down to two.
pub fn normalize(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let text: String = text
        .chars()
        .map(|c| if BULLET_VARIANTS.contains(&c) { '•' } else { c })
        .collect();

    let trailing_re = Regex::new(r"(?m)[ \t]+$").unwrap();
    let text = trailing_re.replace_all(&text, "");

    let blank_runs_re = Regex::new(r"\n{3,}").unwrap();
    blank_runs_re.replace_all(&text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_normalized() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_bullet_variants_standardized() {
        assert_eq!(normalize("● one\n◦ two"), "• one\n• two");
    }

    #[test]
    fn test_plain_bullets_untouched() {
        assert_eq!(normalize("- one\n* two"), "- one\n* two");
    }

    #[test]
    fn test_blank_runs_collapsed() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trailing_spaces_removed() {
        assert_eq!(normalize("a   \nb\t"), "a\nb");
    }

    #[test]
    fn test_nfc_normalization() {
        // e + combining acute → precomposed é
        assert_eq!(normalize("re\u{0301}sume\u{0301}"), "résumé");
    }
}

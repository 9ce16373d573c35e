//! LaTeX special-character escaping.

/// Escape LaTeX reserved characters in user-supplied text.
///
/// Works character-at-a-time in a single left-to-right pass, so backslashes
/// introduced by a replacement are never re-scanned. Callers must not
/// pre-escape: applying this twice double-escapes.
///
/// Pure and total for any string input; the empty string maps to itself.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\textbackslash{}"),
            '&' => result.push_str("\\&"),
            '%' => result.push_str("\\%"),
            '$' => result.push_str("\\$"),
            '#' => result.push_str("\\#"),
            '_' => result.push_str("\\_"),
            '{' => result.push_str("\\{"),
            '}' => result.push_str("\\}"),
            '~' => result.push_str("\\textasciitilde{}"),
            '^' => result.push_str("\\textasciicircum{}"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_latex(""), "");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_latex("Senior Engineer"), "Senior Engineer");
    }

    #[test]
    fn test_escape_each_reserved_char() {
        assert_eq!(escape_latex("A&B"), "A\\&B");
        assert_eq!(escape_latex("100%"), "100\\%");
        assert_eq!(escape_latex("$5"), "\\$5");
        assert_eq!(escape_latex("#1"), "\\#1");
        assert_eq!(escape_latex("snake_case"), "snake\\_case");
        assert_eq!(escape_latex("{x}"), "\\{x\\}");
        assert_eq!(escape_latex("~"), "\\textasciitilde{}");
        assert_eq!(escape_latex("^"), "\\textasciicircum{}");
        assert_eq!(escape_latex("\\"), "\\textbackslash{}");
    }

    #[test]
    fn test_escape_backslash_not_rescanned() {
        // The backslash emitted for '&' must not itself be escaped.
        assert_eq!(escape_latex("\\&"), "\\textbackslash{}\\&");
    }

    #[test]
    fn test_escape_all_reserved_on_one_line() {
        let input = "& % $ # _ { } ~ ^ \\";
        let escaped = escape_latex(input);
        // No bare reserved character survives.
        for c in ['&', '%', '$', '#', '_'] {
            assert!(!escaped.contains(&format!(" {c}")), "bare {c} in {escaped}");
        }
        assert_eq!(
            escaped,
            "\\& \\% \\$ \\# \\_ \\{ \\} \\textasciitilde{} \\textasciicircum{} \\textbackslash{}"
        );
    }
}

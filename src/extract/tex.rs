//! LaTeX source text extraction.
//!
//! Approximates the visible text of a LaTeX resume: comments go, known
//! text-wrapping commands keep their argument, remaining commands and
//! braces are dropped. This is not a LaTeX interpreter; it only needs to
//! recover enough prose for the heuristics downstream.

use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Extract approximate plain text from a LaTeX source file.
pub fn extract(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path)?;
    Ok(strip_latex(&source))
}

/// Strip LaTeX markup from source text.
pub fn strip_latex(source: &str) -> String {
    // Unescaped % starts a comment to end of line.
    let comment_re = Regex::new(r"(?m)(^|[^\\])%.*$").unwrap();
    // Commands whose single argument is document text.
    let wrapper_re =
        Regex::new(r"\\(?:textbf|textit|texttt|emph|underline|section\*?|subsection\*?|item|mbox|href\{[^}]*\})\{([^{}]*)\}")
            .unwrap();
    // Any remaining command, with or without arguments.
    let command_re = Regex::new(r"\\[A-Za-z]+(\[[^\]]*\])?(\{[^{}]*\})*").unwrap();

    let text = comment_re.replace_all(source, "$1");
    let mut text = text.into_owned();

    // Wrapper commands can nest; unwrap until none remain.
    loop {
        let next = wrapper_re.replace_all(&text, "$1").into_owned();
        if next == text {
            break;
        }
        text = next;
    }

    // Line breaks before command stripping, so `\\word` is not read as a
    // command named `word`.
    let text = text.replace("\\\\", "\n");
    let text = command_re.replace_all(&text, " ").into_owned();
    let text = text.replace(['{', '}'], "");

    // Unescape the characters LaTeX sources escape.
    let text = text
        .replace("\\&", "&")
        .replace("\\%", "%")
        .replace("\\$", "$")
        .replace("\\#", "#")
        .replace("\\_", "_");

    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_removed() {
        let text = strip_latex("kept % dropped\nalso kept");
        assert!(text.contains("kept"));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn test_escaped_percent_survives() {
        let text = strip_latex("improved throughput 40\\%");
        assert!(text.contains("40%"));
    }

    #[test]
    fn test_wrapper_argument_kept() {
        let text = strip_latex("\\textbf{Senior Engineer} at \\emph{Acme}");
        assert!(text.contains("Senior Engineer"));
        assert!(text.contains("Acme"));
        assert!(!text.contains("\\textbf"));
    }

    #[test]
    fn test_nested_wrappers_unwrapped() {
        let text = strip_latex("\\section*{\\textbf{EXPERIENCE}}");
        assert!(text.contains("EXPERIENCE"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_plain_commands_dropped() {
        let text = strip_latex("\\documentclass[11pt]{article}\nJane Doe");
        assert!(!text.contains("article"));
        assert!(text.contains("Jane Doe"));
    }

    #[test]
    fn test_double_backslash_is_linebreak() {
        let text = strip_latex("Jane Doe\\\\jane@example.com");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"Jane Doe"));
        assert!(lines.contains(&"jane@example.com"));
    }
}

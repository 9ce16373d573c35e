//! Extraction of named sections from oracle replies.
//!
//! Prompts instruct the oracle to wrap each part of its reply in
//! `<name>…</name>` tags. A missing section is substituted with a sentinel
//! string rather than failing the whole reply.

use regex::Regex;

use crate::error::{Error, Result};

/// Placeholder substituted for a section the oracle did not produce.
pub const MISSING_SECTION: &str = "Section not found in the response";

/// Extract the body of `<name>…</name>` from a reply, trimmed.
pub fn extract_section(text: &str, name: &str) -> Option<String> {
    let pattern = format!("(?s)<{name}>(.*?)</{name}>", name = regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text).map(|caps| caps[1].trim().to_string())
}

/// Extract a section, substituting [`MISSING_SECTION`] when absent.
pub fn section_or_sentinel(text: &str, name: &str) -> String {
    match extract_section(text, name) {
        Some(body) => body,
        None => {
            log::warn!("oracle reply is missing section <{name}>");
            MISSING_SECTION.to_string()
        }
    }
}

/// Extract a section, failing with [`Error::OracleSectionMissing`] when
/// absent. For callers that need the typed form instead of the sentinel.
pub fn require_section(text: &str, name: &str) -> Result<String> {
    extract_section(text, name).ok_or_else(|| Error::OracleSectionMissing(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_section() {
        let reply = "noise <summary>\n A fine resume. \n</summary> trailing";
        assert_eq!(
            extract_section(reply, "summary").as_deref(),
            Some("A fine resume.")
        );
    }

    #[test]
    fn test_extract_section_multiline() {
        let reply = "<tips>one\ntwo\nthree</tips>";
        assert_eq!(extract_section(reply, "tips").as_deref(), Some("one\ntwo\nthree"));
    }

    #[test]
    fn test_missing_section_sentinel() {
        assert_eq!(section_or_sentinel("no tags here", "summary"), MISSING_SECTION);
    }

    #[test]
    fn test_require_section_error() {
        let err = require_section("no tags", "summary").unwrap_err();
        assert!(matches!(err, Error::OracleSectionMissing(ref name) if name == "summary"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let reply = "<s>first</s><s>second</s>";
        assert_eq!(extract_section(reply, "s").as_deref(), Some("first"));
    }
}

//! Structured resume document model.
//!
//! The parser produces a [`ResumeDocument`] tree from plain text; the
//! renderer consumes it in the same call. Documents are never persisted or
//! mutated after construction.

use serde::{Deserialize, Serialize};

/// A parsed resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Candidate name as a (first, last) pair, when one could be found.
    pub candidate_name: Option<(String, String)>,

    /// Extracted contact fields.
    pub contact: ContactInfo,

    /// Blocks appearing before the first recognized section header.
    pub prelude: Vec<Block>,

    /// Sections in order of first appearance in the source text.
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.prelude.is_empty() && self.sections.is_empty()
    }

    /// Total number of blocks across the prelude and all sections.
    pub fn block_count(&self) -> usize {
        self.prelude.len() + self.sections.iter().map(|s| s.blocks.len()).sum::<usize>()
    }
}

/// Contact fields extracted from the resume text.
///
/// Absent fields are `None`, never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number in 3-3-4 digit form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// LinkedIn handle (the path segment after `/in/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl ContactInfo {
    /// Check whether any field was found.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.network.is_none()
    }

    /// Check whether `text` is byte-identical to an already-captured value.
    pub fn contains_value(&self, text: &str) -> bool {
        [&self.email, &self.phone, &self.network]
            .into_iter()
            .flatten()
            .any(|v| v == text)
    }
}

/// A titled section of the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Display title: colon-stripped, title-cased header text.
    pub title: String,

    /// Inferred bucket driving the entry-parsing strategy.
    pub kind: SectionKind,

    /// Blocks in source order.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a section from a raw header line.
    ///
    /// Strips a trailing colon and title-cases each word; the kind is
    /// inferred from the normalized title.
    pub fn from_header(raw: &str) -> Self {
        let stripped = raw.trim().trim_end_matches(':').trim();
        let title = title_case(stripped);
        let kind = SectionKind::from_title(stripped);
        Self {
            title,
            kind,
            blocks: Vec::new(),
        }
    }
}

/// Section bucket inferred from the header text.
///
/// Drives how entry-header lines are parsed; rendering structure is the
/// same for all kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Work history ({experience, work experience, employment}).
    Experience,
    /// Education history ({education, academic background}).
    Education,
    /// Anything else; entries never occur here.
    #[default]
    Generic,
}

impl SectionKind {
    /// Infer the kind from a header title, case-insensitively.
    pub fn from_title(title: &str) -> Self {
        match title.trim().to_lowercase().as_str() {
            "experience" | "work experience" | "employment" => Self::Experience,
            "education" | "academic background" => Self::Education,
            _ => Self::Generic,
        }
    }

    /// Whether entry headers are special-cased in this section.
    pub fn parses_entries(&self) -> bool {
        matches!(self, Self::Experience | Self::Education)
    }
}

/// A content block within a section (or the prelude).
///
/// All strings carried by a block are already LaTeX-escaped exactly once by
/// the builder; the renderer must not escape them again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A plain sentence or line.
    Paragraph(String),

    /// One contiguous run of bullet lines. Never empty.
    BulletList(Vec<String>),

    /// A dated line item: a role at an organization, or a degree at an
    /// institution. Field order mirrors the render order (date, primary,
    /// secondary); no semantic names are assigned beyond that.
    Entry {
        date: String,
        primary: String,
        secondary: String,
    },

    /// A short heading-like line that did not parse as an entry.
    SubHeading(String),
}

/// Title-case each whitespace-separated word.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_header() {
        let section = Section::from_header("WORK EXPERIENCE:");
        assert_eq!(section.title, "Work Experience");
        assert_eq!(section.kind, SectionKind::Experience);
        assert!(section.blocks.is_empty());
    }

    #[test]
    fn test_section_kind_synonyms() {
        assert_eq!(SectionKind::from_title("Employment"), SectionKind::Experience);
        assert_eq!(
            SectionKind::from_title("academic background"),
            SectionKind::Education
        );
        assert_eq!(SectionKind::from_title("Skills"), SectionKind::Generic);
        assert!(!SectionKind::Generic.parses_entries());
    }

    #[test]
    fn test_contact_contains_value() {
        let contact = ContactInfo {
            email: Some("a@x.com".to_string()),
            phone: None,
            network: None,
        };
        assert!(contact.contains_value("a@x.com"));
        assert!(!contact.contains_value("b@y.com"));
        assert!(!contact.is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("EDUCATION"), "Education");
        assert_eq!(title_case("work    experience"), "Work Experience");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_block_count() {
        let mut doc = ResumeDocument::new();
        assert!(doc.is_empty());
        doc.prelude.push(Block::Paragraph("intro".to_string()));
        doc.sections.push(Section {
            title: "Skills".to_string(),
            kind: SectionKind::Generic,
            blocks: vec![Block::BulletList(vec!["Rust".to_string()])],
        });
        assert_eq!(doc.block_count(), 2);
    }
}

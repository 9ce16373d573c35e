//! Section-aware structure building.
//!
//! A single forward pass over the line stream assembles the document tree.
//! State carried across the pass: the section being built, the bullet list
//! currently accepting items, the contact accumulator, and the
//! once-settable candidate name. The builder never fails: every line lands
//! in some block or is consumed as name/contact metadata.

use regex::Regex;

use crate::model::{Block, ResumeDocument, Section, SectionKind};
use crate::render::escape_latex;

use super::classify::{Classifier, LineClass};
use super::contact::ContactExtractor;
use super::cursor::LineCursor;

/// How many lines ahead an entry header may reach for its label.
const LOOKAHEAD_LINES: usize = 3;

/// Maximum length (in chars) for a looked-ahead entry label.
const LABEL_MAX_LEN: usize = 100;

/// Builds a [`ResumeDocument`] from plain resume text.
#[derive(Debug)]
pub struct StructureBuilder {
    classifier: Classifier,
    date_re: Regex,
    year_re: Regex,
}

impl StructureBuilder {
    /// Create a builder with freshly compiled patterns.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            date_re: Regex::new(r"(?i)\d{4}\s*[-–—]\s*(\d{4}|present|current)").unwrap(),
            year_re: Regex::new(r"\b\d{4}\b").unwrap(),
        }
    }

    /// Run the single forward pass over `text`.
    pub fn build(&self, text: &str) -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        let mut contacts = ContactExtractor::new();
        let mut cursor = LineCursor::new(text);
        // Index of the bullet list currently accepting items, within the
        // active block container (prelude or current section).
        let mut open_list: Option<usize> = None;

        while let Some(line) = cursor.next_line() {
            if line.is_empty() {
                continue;
            }

            contacts.observe(line);

            let class = self.classifier.classify(line);

            // The candidate name is the first short, non-contact line seen
            // before any section header.
            if doc.candidate_name.is_none()
                && doc.sections.is_empty()
                && class == LineClass::EntryHeader
                && !contacts.matches_any(line)
            {
                doc.candidate_name = Some(split_name(line));
                continue;
            }

            match class {
                LineClass::SectionHeader => {
                    open_list = None;
                    log::debug!("section header: {line}");
                    doc.sections.push(Section::from_header(line));
                }
                LineClass::Bullet => {
                    let item = strip_bullet(line);
                    if item.is_empty() {
                        continue;
                    }
                    let item = escape_latex(item);
                    let blocks = active_blocks(&mut doc);
                    match open_list {
                        Some(idx) => {
                            if let Some(Block::BulletList(items)) = blocks.get_mut(idx) {
                                items.push(item);
                            }
                        }
                        None => {
                            blocks.push(Block::BulletList(vec![item]));
                            open_list = Some(blocks.len() - 1);
                        }
                    }
                }
                LineClass::EntryHeader => {
                    // A line that merely repeats a captured contact value is
                    // dropped rather than re-emitted as content.
                    if contacts.contact().contains_value(line) {
                        continue;
                    }
                    let kind = current_kind(&doc);
                    if kind.parses_entries() {
                        if let Some((org, date)) = self.parse_entry_line(line) {
                            let label = take_label(&mut cursor, &self.classifier);
                            log::debug!("entry: {org} / {date}");
                            active_blocks(&mut doc).push(Block::Entry {
                                date: escape_latex(&date),
                                primary: escape_latex(&label),
                                secondary: escape_latex(&org),
                            });
                            continue;
                        }
                    }
                    active_blocks(&mut doc).push(Block::SubHeading(escape_latex(line)));
                }
                LineClass::Paragraph => {
                    open_list = None;
                    if contacts.contact().contains_value(line) {
                        continue;
                    }
                    active_blocks(&mut doc).push(Block::Paragraph(escape_latex(line)));
                }
            }
        }

        doc.contact = contacts.into_contact();
        doc
    }

    /// Extract an (organization, date-range) pair from an entry line.
    ///
    /// The organization is the text preceding the first `(` or the first
    /// 4-digit year; the date range is `YYYY - (YYYY|present|current)`,
    /// case-insensitive. Both must be found for the line to parse.
    fn parse_entry_line(&self, line: &str) -> Option<(String, String)> {
        let paren = line.find('(');
        let year = self.year_re.find(line).map(|m| m.start());
        let cut = match (paren, year) {
            (Some(p), Some(y)) => p.min(y),
            (Some(p), None) => p,
            (None, Some(y)) => y,
            (None, None) => return None,
        };

        let org = line[..cut]
            .trim()
            .trim_end_matches(['-', '–', ',', '|'])
            .trim();
        if org.is_empty() {
            return None;
        }

        let date = self.date_re.find(line)?.as_str().to_string();
        Some((org.to_string(), date))
    }
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Look ahead for the entry's paired role/degree label: the first of the
/// next three lines that is non-empty, not a bullet, and under 100
/// characters. The chosen line is consumed and never re-classified.
fn take_label(cursor: &mut LineCursor<'_>, classifier: &Classifier) -> String {
    for offset in 1..=LOOKAHEAD_LINES {
        let Some(candidate) = cursor.peek(offset) else {
            break;
        };
        if candidate.is_empty()
            || classifier.matches(LineClass::Bullet, candidate)
            || candidate.chars().count() >= LABEL_MAX_LEN
        {
            continue;
        }
        cursor.consume(offset);
        return candidate.to_string();
    }
    String::new()
}

/// The block container currently accepting content.
fn active_blocks(doc: &mut ResumeDocument) -> &mut Vec<Block> {
    match doc.sections.last_mut() {
        Some(section) => &mut section.blocks,
        None => &mut doc.prelude,
    }
}

/// Kind of the section currently being built (`Generic` in the prelude).
fn current_kind(doc: &ResumeDocument) -> SectionKind {
    doc.sections
        .last()
        .map(|s| s.kind)
        .unwrap_or(SectionKind::Generic)
}

/// Split a name line into a (first, last) pair.
fn split_name(line: &str) -> (String, String) {
    let mut words = line.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let last = words.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Strip the leading bullet glyph and any trailing marker punctuation.
fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '•', '*', '.', ':']).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactInfo;

    fn build(text: &str) -> ResumeDocument {
        StructureBuilder::new().build(text)
    }

    #[test]
    fn test_name_from_first_short_line() {
        let doc = build("Jane Doe\njane@example.com\nEXPERIENCE\n- built things");
        assert_eq!(
            doc.candidate_name,
            Some(("Jane".to_string(), "Doe".to_string()))
        );
    }

    #[test]
    fn test_contact_line_is_not_a_name() {
        let doc = build("jane@example.com\nJane Doe\nEXPERIENCE");
        assert_eq!(
            doc.candidate_name,
            Some(("Jane".to_string(), "Doe".to_string()))
        );
        assert_eq!(doc.contact.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_sections_in_source_order() {
        let doc = build("EXPERIENCE\n- did X\nEDUCATION\n- did Y");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].title, "Experience");
        assert_eq!(doc.sections[1].title, "Education");
        assert_eq!(
            doc.sections[0].blocks,
            vec![Block::BulletList(vec!["did X".to_string()])]
        );
        assert_eq!(
            doc.sections[1].blocks,
            vec![Block::BulletList(vec!["did Y".to_string()])]
        );
    }

    #[test]
    fn test_entry_lookahead_consumes_label() {
        let doc = build("EXPERIENCE\nAcme Corp (2020 - present)\nSenior Engineer\n- shipped feature");
        let blocks = &doc.sections[0].blocks;
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Entry {
                date: "2020 - present".to_string(),
                primary: "Senior Engineer".to_string(),
                secondary: "Acme Corp".to_string(),
            }
        );
        assert_eq!(
            blocks[1],
            Block::BulletList(vec!["shipped feature".to_string()])
        );
        // The label line must not reappear anywhere as its own block.
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_entry_year_without_paren() {
        let doc = build("EDUCATION\nState University 2014 - 2018\nBS Computer Science");
        assert_eq!(
            doc.sections[0].blocks[0],
            Block::Entry {
                date: "2014 - 2018".to_string(),
                primary: "BS Computer Science".to_string(),
                secondary: "State University".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_without_date_falls_back_to_subheading() {
        let doc = build("EXPERIENCE\nAcme Corp");
        assert_eq!(
            doc.sections[0].blocks,
            vec![Block::SubHeading("Acme Corp".to_string())]
        );
    }

    #[test]
    fn test_generic_section_never_builds_entries() {
        let doc = build("PROJECTS\nWidget (2020 - 2021)\nLead");
        let blocks = &doc.sections[0].blocks;
        assert!(blocks
            .iter()
            .all(|b| !matches!(b, Block::Entry { .. })));
    }

    #[test]
    fn test_bullet_runs_split_by_paragraph() {
        let doc = build(
            "SKILLS\n- Rust\n- Python\nAlso comfortable with all major clouds and orchestration\n- Go",
        );
        let blocks = &doc.sections[0].blocks;
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::BulletList(items) if items.len() == 2));
        assert!(matches!(&blocks[1], Block::Paragraph(_)));
        assert!(matches!(&blocks[2], Block::BulletList(items) if items.len() == 1));
    }

    #[test]
    fn test_duplicate_contact_line_dropped() {
        let doc = build("Jane Doe\njane@example.com\nSUMMARY\nWrote code");
        let all_blocks: Vec<&Block> = doc
            .prelude
            .iter()
            .chain(doc.sections.iter().flat_map(|s| s.blocks.iter()))
            .collect();
        assert!(all_blocks.iter().all(|b| match b {
            Block::Paragraph(t) | Block::SubHeading(t) => !t.contains("jane@example.com"),
            _ => true,
        }));
    }

    #[test]
    fn test_prelude_without_sections() {
        let doc = build("Jane Doe\nSeasoned developer who has shipped many systems to production");
        assert!(doc.sections.is_empty());
        assert_eq!(doc.prelude.len(), 1);
        assert!(matches!(&doc.prelude[0], Block::Paragraph(_)));
    }

    #[test]
    fn test_empty_bullet_not_emitted() {
        let doc = build("SKILLS\n-\n- Rust");
        assert_eq!(
            doc.sections[0].blocks,
            vec![Block::BulletList(vec!["Rust".to_string()])]
        );
    }

    #[test]
    fn test_contact_accumulates_across_document() {
        let doc = build("Jane Doe\njane@x.com\n555-123-4567\nlinkedin.com/in/janedoe\nEXPERIENCE");
        assert_eq!(
            doc.contact,
            ContactInfo {
                email: Some("jane@x.com".to_string()),
                phone: Some("555-123-4567".to_string()),
                network: Some("janedoe".to_string()),
            }
        );
    }

    #[test]
    fn test_block_text_is_escaped() {
        let doc = build("SKILLS\n- C&C++ tooling\nHas owned R_D work behind 100% of quarterly growth");
        let blocks = &doc.sections[0].blocks;
        assert!(matches!(&blocks[0], Block::BulletList(items) if items[0] == "C\\&C++ tooling"));
        assert!(matches!(
            &blocks[1],
            Block::Paragraph(t) if t == "Has owned R\\_D work behind 100\\% of quarterly growth"
        ));
    }

    #[test]
    fn test_lookahead_window_is_three_lines() {
        // The label sits four lines after the header; out of reach.
        let doc = build("EXPERIENCE\nAcme Corp (2020 - 2021)\n\n\n\nEngineer");
        assert!(matches!(
            &doc.sections[0].blocks[0],
            Block::Entry { primary, .. } if primary.is_empty()
        ));
    }
}

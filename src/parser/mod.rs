//! Resume parsing module.
//!
//! A line-oriented, stateful pass reconstructing document structure from
//! plain text: sections, dated entries, bullet runs, and contact fields.

mod builder;
mod classify;
mod contact;
mod cursor;

pub use builder::StructureBuilder;
pub use classify::{Classifier, LineClass, RULE_ORDER};
pub use contact::ContactExtractor;
pub use cursor::LineCursor;

use crate::model::ResumeDocument;

/// Parse plain resume text into a structured document.
///
/// Total over any string input; malformed text degrades to paragraphs
/// rather than failing.
pub fn parse_resume(text: &str) -> ResumeDocument {
    StructureBuilder::new().build(text)
}

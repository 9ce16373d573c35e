//! # applykit
//!
//! Heuristic resume parsing and LaTeX rendering for tailored job
//! applications.
//!
//! The core of this library is a line-oriented, stateful converter that
//! reconstructs document structure (sections, dated entries, bullet lists,
//! contact fields) from plain resume text and re-emits it as a complete
//! LaTeX document. Around it sit collaborators for document text
//! extraction, job-posting/company scraping, and an LLM completion oracle
//! that generates suggestions, a cover letter, and an interview-prep
//! sheet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use applykit::{extract_text, convert_resume_to_latex};
//!
//! fn main() -> applykit::Result<()> {
//!     let resume_text = extract_text("resume.pdf")?;
//!     let latex = convert_resume_to_latex(&resume_text, "");
//!     std::fs::write("resume.tex", latex)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - The converter is total: any string input yields a syntactically
//!   closed LaTeX document; it cannot fail.
//! - Section order follows the source text and is never rearranged.
//! - LaTeX special characters in user text are escaped exactly once.

pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod model;
pub mod oracle;
pub mod parser;
pub mod render;
pub mod scrape;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use generate::{ApplicationMaterials, MaterialsGenerator, ResumeSuggestions};
pub use model::{Block, ContactInfo, ResumeDocument, Section, SectionKind};
pub use oracle::{AnthropicOracle, CompletionOracle, CompletionRequest};
pub use parser::parse_resume;
pub use render::{escape_latex, to_latex};
pub use scrape::ScrapeClient;

pub use extract::{extract_text, extract_text_as, ResumeFormat};

/// Convert plain resume text into a complete LaTeX document.
///
/// This is the core boundary: a pure, synchronous transformation that
/// cannot fail. The job description is informational only and is not
/// consulted by the parsing heuristics; the parameter is kept for
/// interface stability.
///
/// # Example
///
/// ```
/// use applykit::convert_resume_to_latex;
///
/// let latex = convert_resume_to_latex("Jane Doe\nEXPERIENCE\n- built things", "");
/// assert!(latex.contains("\\begin{document}"));
/// assert!(latex.ends_with("\\end{document}\n"));
/// ```
pub fn convert_resume_to_latex(resume_text: &str, _job_description: &str) -> String {
    let doc = parser::parse_resume(resume_text);
    render::to_latex(&doc)
}

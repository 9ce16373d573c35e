//! Document text extraction.
//!
//! Supplies plain UTF-8 text for a resume file based on its declared
//! format. The format is declared by the file extension; unrecognized
//! extensions fail with [`Error::UnsupportedFormat`] and `.doc` with
//! [`Error::NotImplemented`].

mod cleanup;
mod docx;
mod pdf;
mod tex;

pub use cleanup::normalize;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Recognized resume document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word processing document.
    Docx,
    /// Legacy Word binary document (recognized, not implemented).
    Doc,
    /// Plain text.
    Txt,
    /// LaTeX source.
    Tex,
}

impl ResumeFormat {
    /// Detect the format from a file path's extension, case-insensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "doc" => Ok(Self::Doc),
            "txt" => Ok(Self::Txt),
            "tex" => Ok(Self::Tex),
            other => Err(Error::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

impl std::fmt::Display for ResumeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Doc => "DOC",
            Self::Txt => "TXT",
            Self::Tex => "LaTeX",
        };
        write!(f, "{name}")
    }
}

/// Extract plain text from a resume file, normalized for parsing.
///
/// Detects the [`ResumeFormat`] from the extension and delegates to
/// [`extract_text_as`].
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let format = ResumeFormat::from_path(path)?;
    extract_text_as(path, format)
}

/// Extract plain text from a resume file with a declared format.
///
/// Runs the extracted text through [`normalize`] before returning it.
pub fn extract_text_as<P: AsRef<Path>>(path: P, format: ResumeFormat) -> Result<String> {
    let path = path.as_ref();
    log::debug!("extracting {} from {}", format, path.display());

    let raw = match format {
        ResumeFormat::Pdf => pdf::extract(path)?,
        ResumeFormat::Docx => docx::extract(path)?,
        ResumeFormat::Doc => return Err(Error::NotImplemented("DOC".to_string())),
        ResumeFormat::Txt => fs::read_to_string(path)?,
        ResumeFormat::Tex => tex::extract(path)?,
    };

    Ok(normalize(&raw))
}

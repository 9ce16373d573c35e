//! Error types for the applykit library.

use std::io;
use thiserror::Error;

/// Result type alias for applykit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing application materials.
///
/// The core resume-to-LaTeX converter never returns these: it is total over
/// any string input. Every variant here originates in a collaborator
/// (document extraction, scraping, the completion oracle) or in
/// configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a document file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension is not one of the recognized resume formats.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The format is recognized but extraction for it is not implemented.
    #[error("{0} format support is not yet implemented")]
    NotImplemented(String),

    /// A collaborator failed to produce text from a document.
    #[error("Text extraction error: {0}")]
    Extraction(String),

    /// A network collaborator failed; callers may substitute a placeholder.
    #[error("Remote fetch failed: {0}")]
    RemoteFetch(String),

    /// A remote API rejected the request.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A required credential was absent at configuration time.
    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(&'static str),

    /// A named section was absent from the completion oracle's reply.
    #[error("Oracle reply is missing section <{0}>")]
    OracleSectionMissing(String),

    /// The completion oracle returned no text content.
    #[error("Oracle returned empty content")]
    EmptyCompletion,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP container error (DOCX extraction).
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing error (DOCX extraction).
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::Extraction(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat(".rtf".to_string());
        assert_eq!(err.to_string(), "Unsupported file format: .rtf");

        let err = Error::MissingCredential("ANTHROPIC_API_KEY");
        assert_eq!(
            err.to_string(),
            "Missing credential: environment variable ANTHROPIC_API_KEY is not set"
        );

        let err = Error::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 429): rate limited");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

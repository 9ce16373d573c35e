//! PDF text extraction.

use std::path::Path;

use crate::error::Result;

/// Extract the text content of every page, concatenated.
pub fn extract(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path)?;
    Ok(text)
}

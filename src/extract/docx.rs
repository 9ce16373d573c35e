//! DOCX text extraction.
//!
//! A DOCX file is a ZIP container; the body text lives in
//! `word/document.xml` as `<w:t>` runs grouped into `<w:p>` paragraphs.
//! Runs are joined as-is and each paragraph end emits a newline.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{Error, Result};

const DOCUMENT_XML: &str = "word/document.xml";

/// Extract paragraph text from a DOCX file.
pub fn extract(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .map_err(|_| Error::Extraction(format!("{DOCUMENT_XML} missing from archive")))?
        .read_to_string(&mut xml)?;
    extract_from_xml(&xml)
}

/// Walk the document XML, collecting `<w:t>` text and paragraph breaks.
fn extract_from_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if local_name(e.name().as_ref()) == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(e)) => match local_name(e.name().as_ref()) {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                if let Ok(s) = t.unescape() {
                    text.push_str(&s);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Strip an XML namespace prefix (`w:t` → `t`).
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

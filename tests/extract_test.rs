//! Integration tests for document text extraction.

use std::io::Write;

use applykit::{extract_text, Error, ResumeFormat};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.rtf", b"{\\rtf1 hello}");
    let err = extract_text(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == ".rtf"));
}

#[test]
fn test_doc_format_not_implemented() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.doc", b"\xd0\xcf\x11\xe0");
    let err = extract_text(&path).unwrap_err();
    assert!(matches!(err, Error::NotImplemented(ref f) if f == "DOC"));
}

#[test]
fn test_txt_extraction_normalizes() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "resume.txt",
        b"Jane Doe\r\nEXPERIENCE\r\n\r\n\r\n\r\n\xe2\x97\x8f built things   ",
    );
    let text = extract_text(&path).unwrap();
    // CRLF gone, blank run collapsed, exotic bullet standardized,
    // trailing spaces trimmed.
    assert_eq!(text, "Jane Doe\nEXPERIENCE\n\n• built things");
}

#[test]
fn test_tex_extraction_strips_markup() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "resume.tex",
        b"\\documentclass{article}\n\\begin{document}\n\\section*{EXPERIENCE}\n\\textbf{Acme Corp} (2020 - present)\\\\\nShipped 100\\% of roadmap % internal note\n\\end{document}\n",
    );
    let text = extract_text(&path).unwrap();
    assert!(text.contains("EXPERIENCE"));
    assert!(text.contains("Acme Corp (2020 - present)"));
    assert!(text.contains("Shipped 100% of roadmap"));
    assert!(!text.contains("internal note"));
    assert!(!text.contains("\\textbf"));
}

#[test]
fn test_docx_extraction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.docx");

    let document_xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>EXPERIENCE</w:t></w:r></w:p>
    <w:p><w:r><w:t>- built </w:t></w:r><w:r><w:t>things</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    let file = std::fs::File::create(&path).unwrap();
    let mut archive = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    archive.start_file("word/document.xml", options).unwrap();
    archive.write_all(document_xml.as_bytes()).unwrap();
    archive.finish().unwrap();

    let text = extract_text(&path).unwrap();
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    assert_eq!(lines, vec!["Jane Doe", "EXPERIENCE", "- built things"]);
}

#[test]
fn test_docx_without_document_xml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.docx");

    let file = std::fs::File::create(&path).unwrap();
    let mut archive = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    archive.start_file("mimetype", options).unwrap();
    archive.write_all(b"application/zip").unwrap();
    archive.finish().unwrap();

    let err = extract_text(&path).unwrap_err();
    assert!(matches!(err, Error::Extraction(_)));
}

#[test]
fn test_format_detection_is_case_insensitive() {
    assert_eq!(ResumeFormat::from_path("CV.PDF").unwrap(), ResumeFormat::Pdf);
    assert_eq!(ResumeFormat::from_path("cv.TxT").unwrap(), ResumeFormat::Txt);
}

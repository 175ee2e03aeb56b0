//! Plain-text extraction from uploaded résumé documents.
//!
//! The format is chosen from the filename extension. PDFs are read page by
//! page from memory. DOCX uploads are spooled to a uniquely named scratch file
//! that is removed when the handle drops, on success and on error alike.

use std::io::{Read, Write};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("DOCX parse error: {0}")]
    Docx(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(e: zip::result::ZipError) -> Self {
        ExtractError::Docx(e.to_string())
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(e: quick_xml::Error) -> Self {
        ExtractError::Docx(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive extension lookup. Unknown extensions yield `None`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text, spooling DOCX uploads under `scratch_dir`.
/// Unsupported extensions produce an empty string, not an error.
pub fn extract_text_in(
    filename: &str,
    bytes: &[u8],
    scratch_dir: &Path,
) -> Result<String, ExtractError> {
    match DocumentFormat::from_filename(filename) {
        Some(DocumentFormat::Pdf) => extract_pdf(bytes),
        Some(DocumentFormat::Docx) => extract_docx(bytes, scratch_dir),
        None => {
            debug!(filename, "Unsupported extension, no text extracted");
            Ok(String::new())
        }
    }
}

/// Joins per-page text with `\n`. A page that fails to extract contributes "".
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(bytes)?;
    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|&page_number| {
            doc.extract_text(&[page_number]).unwrap_or_else(|e| {
                debug!(page_number, error = %e, "Page text extraction failed");
                String::new()
            })
        })
        .collect();
    Ok(pages.join("\n"))
}

/// The scratch file is deleted when `scratch` drops, including on early `?` returns.
pub fn extract_docx(bytes: &[u8], scratch_dir: &Path) -> Result<String, ExtractError> {
    let mut scratch = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".docx")
        .tempfile_in(scratch_dir)?;
    scratch.write_all(bytes)?;
    scratch.flush()?;

    let mut archive = zip::ZipArchive::new(scratch.reopen()?)?;
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();

    // Headers, then the body, then footers.
    let mut parts: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|n| is_part(n, "header"))
        .collect();
    parts.push("word/document.xml");
    parts.extend(names.iter().map(String::as_str).filter(|n| is_part(n, "footer")));

    let mut text = String::new();
    for part in parts {
        let mut xml = String::new();
        archive.by_name(part)?.read_to_string(&mut xml)?;
        text.push_str(&wordml_to_text(&xml)?);
    }
    Ok(text.trim().to_string())
}

/// Matches `word/<kind>.xml` and `word/<kind><digits>.xml`.
fn is_part(name: &str, kind: &str) -> bool {
    name.strip_prefix("word/")
        .and_then(|rest| rest.strip_prefix(kind))
        .and_then(|rest| rest.strip_suffix(".xml"))
        .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Flattens one WordprocessingML part: runs of `w:t` text, `w:tab` as a tab,
/// `w:br`/`w:cr` as a newline, and a blank line at the start of every `w:p`.
fn wordml_to_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"w:t" {
                    in_text_run = true;
                } else {
                    push_marker(&e, &mut out);
                }
            }
            Event::Empty(e) => push_marker(&e, &mut out),
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

fn push_marker(element: &BytesStart<'_>, out: &mut String) {
    match element.name().as_ref() {
        b"w:p" => out.push_str("\n\n"),
        b"w:tab" => out.push('\t'),
        b"w:br" | b"w:cr" => out.push('\n'),
        _ => {}
    }
}

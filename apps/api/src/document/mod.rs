//! Document Loader — turns an uploaded resume PDF into plain text.
//!
//! Pages are read in page-number order and each page's text is followed by exactly
//! one line break. `pdf-extract` does the per-page text extraction since it places
//! spaces and line breaks from glyph positions; `lopdf` validates the document and
//! serves as a strict fallback when `pdf-extract` cannot decode it.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("the uploaded file is empty")]
    Empty,

    #[error("the uploaded file is not a PDF")]
    NotPdf,

    #[error("could not read PDF: {0}")]
    Malformed(String),

    #[error("the PDF has no pages")]
    NoPages,

    #[error("could not read text on page {page}: {reason}")]
    UnreadablePage { page: u32, reason: String },

    #[error("no extractable text found in PDF (scanned or image-only pages?)")]
    NoText,
}

/// Returns true when the bytes carry the PDF file signature.
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_SIGNATURE)
}

/// Extracts the resume text from an in-memory PDF.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }
    if !is_pdf(bytes) {
        return Err(ExtractionError::NotPdf);
    }

    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Malformed(e.to_string()))?;
    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(ExtractionError::NoPages);
    }

    let page_texts = match pdf_extract::extract_text_from_mem_by_pages(bytes) {
        Ok(pages) if pages.len() == page_count && has_text(&pages) => pages,
        Ok(pages) => {
            debug!(
                "pdf-extract found no usable text (pages={}), retrying with lopdf",
                pages.len()
            );
            extract_pages_with_lopdf(&doc)?
        }
        Err(e) => {
            warn!("pdf-extract failed, retrying with lopdf: {}", e);
            extract_pages_with_lopdf(&doc)?
        }
    };

    if !has_text(&page_texts) {
        return Err(ExtractionError::NoText);
    }

    let text = join_pages(&page_texts);
    debug!(
        "Extracted resume text: pages={}, chars={}",
        page_count,
        text.chars().count()
    );
    Ok(text)
}

/// Per-page text via lopdf. Any page that cannot be decoded fails the whole document.
fn extract_pages_with_lopdf(doc: &Document) -> Result<Vec<String>, ExtractionError> {
    doc.get_pages()
        .keys()
        .map(|&page| {
            doc.extract_text(&[page])
                .map_err(|e| ExtractionError::UnreadablePage {
                    page,
                    reason: e.to_string(),
                })
        })
        .collect()
}

fn has_text(pages: &[String]) -> bool {
    pages.iter().any(|p| !p.trim().is_empty())
}

/// One line break after every page, blank pages included.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page.trim_matches(['\r', '\n']));
        text.push('\n');
    }
    text
}

use std::path::Path;

use mupdf::{Document, TextPageFlags};

use simplifier_core::{PdfBackend, PdfError};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that non-PDF code paths do not transitively
/// depend on it.
///
/// Pages are extracted in order and concatenated with no separator
/// normalization; the abstract locator downstream works on raw text.
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, PdfError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| PdfError::OpenError("invalid path encoding".into()))?;

        let document = Document::open(path_str).map_err(|e| PdfError::OpenError(e.to_string()))?;

        let mut full_text = String::new();

        for page_result in document
            .pages()
            .map_err(|e| PdfError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| PdfError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| PdfError::ExtractionError(e.to_string()))?;

            // Block/line iteration matches PyMuPDF's get_text() behavior
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    full_text.push_str(&line_text);
                    full_text.push('\n');
                }
            }
        }

        Ok(full_text)
    }
}

use std::path::Path;

use crate::PdfError;

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step; the abstract
/// location heuristic lives in [`crate::locator`] and operates on the
/// returned text.
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF file, pages concatenated in
    /// order.
    fn extract_text(&self, path: &Path) -> Result<String, PdfError>;
}

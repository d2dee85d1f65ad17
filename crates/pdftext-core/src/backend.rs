use thiserror::Error;

use crate::DocumentMetadata;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF parsing backends.
///
/// Implementors wrap the external parsing library; the extraction routine
/// ([`crate::extract`]) only ever talks to these two traits, so the library
/// stays an opaque collaborator.
pub trait PdfBackend: Send + Sync {
    /// Open a byte buffer as a PDF document.
    ///
    /// Fails with [`BackendError::OpenError`] when the bytes are not valid
    /// PDF structure (corrupt file, non-PDF content, unsupported encryption).
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An opened PDF document with a stable page count and order.
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Plain text of the page at `index` (0-based, document order).
    fn page_text(&self, index: usize) -> Result<String, BackendError>;

    /// Title/author/subject from the document's info dictionary.
    ///
    /// Absent keys (or an absent info dictionary) yield empty strings.
    fn metadata(&self) -> DocumentMetadata;
}

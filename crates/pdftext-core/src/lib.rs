pub mod backend;

pub use backend::{BackendError, PdfBackend, PdfDocument};

/// Error string reported when a structurally valid document has no text layer.
pub const NO_TEXT_ERROR: &str = "No text found in PDF";

/// Hint surfaced alongside the empty-text outcome. OCR itself is never run.
pub const OCR_SUGGESTION: &str = "PDF may be scanned or image-based. OCR processing required.";

/// Title/author/subject pulled from a PDF's info dictionary.
///
/// Every field defaults to the empty string when the key (or the whole info
/// dictionary) is missing from the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
}

/// Classified result of one extraction run.
///
/// The three kinds replace the nested exception handling the service grew out
/// of: a hard parse failure, a parse that succeeded but found no text, and a
/// normal success.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Non-empty text was extracted from at least one page.
    Success {
        text: String,
        pages: usize,
        metadata: DocumentMetadata,
    },
    /// The document parsed but no page carried a usable text layer,
    /// typically a scanned/image-based PDF. `pages` is the real page count.
    EmptyText { pages: usize },
    /// The parsing library could not process the byte stream. `error` carries
    /// its diagnostic verbatim; the page count is reported as zero.
    StructuralFailure { error: String },
}

impl Outcome {
    /// Page count as reported to callers (zero for structural failures).
    pub fn pages(&self) -> usize {
        match self {
            Outcome::Success { pages, .. } | Outcome::EmptyText { pages } => *pages,
            Outcome::StructuralFailure { .. } => 0,
        }
    }
}

/// Extract the plain text of a PDF byte buffer and classify the result.
///
/// Pages are walked in document order; per-page text that is non-empty after
/// trimming is appended raw, followed by a newline separator. Pages with no
/// text layer contribute nothing and are logged at `warn` level. A page-level
/// library error is classified the same as an open failure, since both mean
/// the document could not be processed as a whole.
///
/// The routine is idempotent and has no side effects beyond `tracing` events.
pub fn extract(bytes: &[u8], backend: &dyn PdfBackend) -> Outcome {
    let document = match backend.open(bytes) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "failed to open document");
            return Outcome::StructuralFailure {
                error: e.to_string(),
            };
        }
    };

    let pages = document.page_count();
    tracing::info!(pages, bytes = bytes.len(), "document opened");

    let mut buffer = String::new();
    for index in 0..pages {
        let page_text = match document.page_text(index) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(page = index + 1, error = %e, "page extraction failed");
                return Outcome::StructuralFailure {
                    error: e.to_string(),
                };
            }
        };

        if page_text.trim().is_empty() {
            tracing::warn!(page = index + 1, "no text extracted");
        } else {
            tracing::info!(page = index + 1, chars = page_text.len(), "extracted page text");
            buffer.push_str(&page_text);
            buffer.push('\n');
        }
    }

    let text = buffer.trim().to_string();
    if text.is_empty() {
        tracing::warn!(pages, "no text found in document");
        Outcome::EmptyText { pages }
    } else {
        tracing::info!(pages, chars = text.len(), "extraction complete");
        Outcome::Success {
            text,
            pages,
            metadata: document.metadata(),
        }
    }
}

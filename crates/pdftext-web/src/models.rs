use pdftext_core::DocumentMetadata;
use serde::Serialize;

// ── Health ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

// ── Extraction envelopes ────────────────────────────────────────────────
//
// Three distinct shapes, one per outcome kind. The batch front end shares
// the classification but serializes its own (metadata-free) envelope.

#[derive(Serialize)]
pub struct MetadataJson {
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl From<DocumentMetadata> for MetadataJson {
    fn from(m: DocumentMetadata) -> Self {
        MetadataJson {
            title: m.title,
            author: m.author,
            subject: m.subject,
        }
    }
}

/// 200 body when text was extracted.
#[derive(Serialize)]
pub struct ExtractSuccess {
    pub success: bool,
    pub filename: String,
    pub pages: usize,
    pub text_length: usize,
    pub extracted_text: String,
    pub metadata: MetadataJson,
}

/// 200 body for the soft empty-text outcome (still not an error status).
#[derive(Serialize)]
pub struct ExtractEmpty {
    pub success: bool,
    pub error: &'static str,
    pub filename: String,
    pub pages: usize,
    pub text_length: usize,
    pub extracted_text: &'static str,
    pub suggestion: &'static str,
}

/// 500 body when the document could not be parsed at all.
#[derive(Serialize)]
pub struct ExtractFailure {
    pub success: bool,
    pub error: String,
    pub filename: String,
}

/// Bare error body for validation failures and unexpected request errors.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

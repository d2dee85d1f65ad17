use lopdf::{Document, Object};

use pdftext_core::{BackendError, DocumentMetadata, PdfBackend, PdfDocument};

/// lopdf-based implementation of [`PdfBackend`].
///
/// This crate is the only place the parsing library is named; everything
/// above it goes through the backend traits, so swapping the library out
/// touches nothing but this crate.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PdfDocument>, BackendError> {
        let document =
            Document::load_mem(bytes).map_err(|e| BackendError::OpenError(e.to_string()))?;

        // get_pages returns a map keyed by 1-based page number; the key order
        // is the document page order.
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();

        Ok(Box::new(LopdfDocument {
            document,
            page_numbers,
        }))
    }
}

struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        let page_number = self.page_numbers.get(index).ok_or_else(|| {
            BackendError::ExtractionError(format!("page index {index} out of range"))
        })?;

        self.document
            .extract_text(&[*page_number])
            .map_err(|e| BackendError::ExtractionError(e.to_string()))
    }

    fn metadata(&self) -> DocumentMetadata {
        let Some(info) = info_dictionary(&self.document) else {
            return DocumentMetadata::default();
        };

        DocumentMetadata {
            title: string_field(info, b"Title"),
            author: string_field(info, b"Author"),
            subject: string_field(info, b"Subject"),
        }
    }
}

/// Resolve the trailer's Info entry, which may be a reference or inlined.
fn info_dictionary(document: &Document) -> Option<&lopdf::Dictionary> {
    match document.trailer.get(b"Info").ok()? {
        Object::Reference(id) => document.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn string_field(dict: &lopdf::Dictionary, key: &[u8]) -> String {
    match dict.get(key) {
        Ok(Object::String(bytes, _)) => decode_text_string(bytes),
        _ => String::new(),
    }
}

/// Decode a PDF text string: UTF-16BE when the BOM is present, otherwise
/// treated as a byte string with lossy UTF-8 fallback.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

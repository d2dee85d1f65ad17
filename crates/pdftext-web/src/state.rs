use pdftext_pdf_lopdf::LopdfBackend;

/// Shared application state accessible from all handlers.
///
/// The backend is stateless, so concurrent requests share it freely; nothing
/// else survives across requests.
pub struct AppState {
    pub backend: LopdfBackend,
}

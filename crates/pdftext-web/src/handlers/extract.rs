use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pdftext_core::{NO_TEXT_ERROR, OCR_SUGGESTION, Outcome};

use crate::models::{ErrorResponse, ExtractEmpty, ExtractFailure, ExtractSuccess, MetadataJson};
use crate::state::AppState;
use crate::upload::{self, UploadError};

/// Accept a multipart PDF upload, run extraction, and map the outcome to an
/// HTTP status plus JSON envelope.
///
/// A request that is not multipart at all (empty body, wrong content-type)
/// carries no file either, so it gets the same envelope as a missing field.
pub async fn extract_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    tracing::info!("PDF extraction request received");

    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "request is not multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: upload::NO_FILE_PROVIDED.to_string(),
                }),
            )
                .into_response();
        }
    };

    let file = match upload::parse_multipart(multipart).await {
        Ok(file) => file,
        Err(UploadError::Validation(message)) => {
            tracing::warn!(error = message, "rejected upload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response();
        }
        Err(UploadError::Read(message)) => {
            tracing::error!(error = %message, "failed to read upload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Request processing failed: {message}"),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(filename = %file.filename, bytes = file.data.len(), "processing PDF");

    match pdftext_core::extract(&file.data, &state.backend) {
        Outcome::Success {
            text,
            pages,
            metadata,
        } => (
            StatusCode::OK,
            Json(ExtractSuccess {
                success: true,
                filename: file.filename,
                pages,
                text_length: text.chars().count(),
                extracted_text: text,
                metadata: MetadataJson::from(metadata),
            }),
        )
            .into_response(),
        Outcome::EmptyText { pages } => (
            StatusCode::OK,
            Json(ExtractEmpty {
                success: false,
                error: NO_TEXT_ERROR,
                filename: file.filename,
                pages,
                text_length: 0,
                extracted_text: "",
                suggestion: OCR_SUGGESTION,
            }),
        )
            .into_response(),
        Outcome::StructuralFailure { error } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ExtractFailure {
                success: false,
                error: format!("PDF processing failed: {error}"),
                filename: file.filename,
            }),
        )
            .into_response(),
    }
}

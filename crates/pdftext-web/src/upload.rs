use axum::extract::Multipart;

/// An uploaded file with its data and display name.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Why an upload could not be accepted.
#[derive(Debug, PartialEq, Eq)]
pub enum UploadError {
    /// Client-caused, maps to a 400 with the message as-is.
    Validation(&'static str),
    /// Transport failure while reading the multipart body, maps to a 500.
    Read(String),
}

pub const NO_FILE_PROVIDED: &str = "No file provided";
pub const NO_FILE_SELECTED: &str = "No file selected";
pub const NOT_A_PDF: &str = "File must be a PDF";

/// Parse a multipart form upload into the single expected `file` field.
///
/// Validation happens in order and stops at the first failure: missing
/// field, empty filename, then the `.pdf` suffix check.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, UploadError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Read(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::Read(e.to_string()))?
                    .to_vec();
                file = Some(UploadedFile { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    let file = file.ok_or(UploadError::Validation(NO_FILE_PROVIDED))?;
    validate_filename(&file.filename)?;
    Ok(file)
}

/// Reject empty filenames and anything not ending in `.pdf`
/// (case-insensitive).
pub fn validate_filename(filename: &str) -> Result<(), UploadError> {
    if filename.is_empty() {
        return Err(UploadError::Validation(NO_FILE_SELECTED));
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(UploadError::Validation(NOT_A_PDF));
    }
    Ok(())
}

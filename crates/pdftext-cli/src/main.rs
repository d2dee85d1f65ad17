use std::io::Read;
use std::process::ExitCode;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use serde::Serialize;

use pdftext_core::{NO_TEXT_ERROR, Outcome};
use pdftext_pdf_lopdf::LopdfBackend;

/// Extract text from a base64-encoded PDF supplied on standard input.
///
/// Writes exactly one JSON document to standard output. The exit code is 0
/// whenever processing completed, including soft extraction failures; only
/// malformed input (empty stdin, bad base64) or an unhandled error exits
/// non-zero. Intended to be invoked from another process.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

/// The single JSON line printed to stdout.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct BatchResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    text: String,
    pages: usize,
    text_length: usize,
}

impl BatchResult {
    fn failure(error: String) -> Self {
        BatchResult {
            success: false,
            error: Some(error),
            text: String::new(),
            pages: 0,
            text_length: 0,
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _cli = Cli::parse();

    // Logs go to stderr; stdout carries nothing but the result JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (result, code) = run(std::io::stdin().lock());

    // serde_json leaves non-ASCII characters unescaped.
    println!("{}", serde_json::to_string(&result).unwrap_or_default());
    ExitCode::from(code)
}

/// Process one request from `input` and report the result plus exit code.
fn run(mut input: impl Read) -> (BatchResult, u8) {
    let mut buffer = String::new();
    if let Err(e) = input.read_to_string(&mut buffer) {
        return (BatchResult::failure(format!("Unexpected error: {e}")), 1);
    }

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return (BatchResult::failure("No input data provided".to_string()), 1);
    }

    let bytes = match STANDARD.decode(trimmed) {
        Ok(bytes) => bytes,
        Err(e) => {
            return (BatchResult::failure(format!("Invalid base64 data: {e}")), 1);
        }
    };

    let backend = LopdfBackend::new();
    let result = match pdftext_core::extract(&bytes, &backend) {
        Outcome::Success { text, pages, .. } => BatchResult {
            success: true,
            error: None,
            text_length: text.chars().count(),
            text,
            pages,
        },
        // Soft outcome: classification failed, processing did not.
        Outcome::EmptyText { pages } => BatchResult {
            success: false,
            error: Some(NO_TEXT_ERROR.to_string()),
            text: String::new(),
            pages,
            text_length: 0,
        },
        Outcome::StructuralFailure { error } => BatchResult {
            success: false,
            error: Some(error),
            text: String::new(),
            pages: 0,
            text_length: 0,
        },
    };

    (result, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let operations = if page_text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                Content { operations }.encode().expect("encode content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("serialize test PDF");
        buffer
    }

    #[test]
    fn empty_input_exits_nonzero() {
        let (result, code) = run(Cursor::new(""));
        assert_eq!(code, 1);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No input data provided"));
        assert_eq!(result.pages, 0);
        assert_eq!(result.text_length, 0);
    }

    #[test]
    fn whitespace_only_input_exits_nonzero() {
        let (result, code) = run(Cursor::new("  \n\t "));
        assert_eq!(code, 1);
        assert_eq!(result.error.as_deref(), Some("No input data provided"));
    }

    #[test]
    fn invalid_base64_exits_nonzero() {
        let (result, code) = run(Cursor::new("!!! not base64 !!!"));
        assert_eq!(code, 1);
        assert!(!result.success);
        assert!(
            result
                .error
                .as_deref()
                .unwrap()
                .starts_with("Invalid base64 data: ")
        );
    }

    #[test]
    fn valid_pdf_extracts_with_exit_zero() {
        let encoded = STANDARD.encode(build_pdf(&["Hello from stdin"]));
        let (result, code) = run(Cursor::new(encoded));

        assert_eq!(code, 0);
        assert!(result.success);
        assert_eq!(result.pages, 1);
        assert!(result.text.contains("Hello from stdin"));
        assert_eq!(result.text_length, result.text.chars().count());
        assert!(result.text_length > 0);
        assert!(result.error.is_none());
    }

    #[test]
    fn surrounding_whitespace_around_base64_is_tolerated() {
        let encoded = format!("\n  {}  \n", STANDARD.encode(build_pdf(&["padded"])));
        let (result, code) = run(Cursor::new(encoded));
        assert_eq!(code, 0);
        assert!(result.success);
    }

    #[test]
    fn corrupt_pdf_is_soft_failure_with_exit_zero() {
        let encoded = STANDARD.encode(b"garbage bytes");
        let (result, code) = run(Cursor::new(encoded));

        // Processing completed; only malformed input exits non-zero.
        assert_eq!(code, 0);
        assert!(!result.success);
        assert!(!result.error.as_deref().unwrap().is_empty());
        assert_eq!(result.pages, 0);
        assert_eq!(result.text, "");
    }

    #[test]
    fn empty_text_pdf_reports_page_count_with_exit_zero() {
        let encoded = STANDARD.encode(build_pdf(&[""]));
        let (result, code) = run(Cursor::new(encoded));

        assert_eq!(code, 0);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No text found in PDF"));
        assert_eq!(result.pages, 1);
        assert_eq!(result.text_length, 0);
    }

    #[test]
    fn output_shape_omits_error_on_success() {
        let encoded = STANDARD.encode(build_pdf(&["shape"]));
        let (result, _) = run(Cursor::new(encoded));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn non_ascii_text_is_not_escaped() {
        let result = BatchResult {
            success: true,
            error: None,
            text: "café naïve".to_string(),
            pages: 1,
            text_length: 10,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("café"));
        assert!(!json.contains("\\u"));
    }
}

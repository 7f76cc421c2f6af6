// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF text extractor — plain text, page count and document information via
// the `lopdf` crate.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::UnwindSafe;
use std::time::Duration;

use lopdf::Document;
use serde::Serialize;
use tokio::task::JoinError;
use tracing::{debug, info, instrument, warn};
use unispace_core::AppConfig;
use unispace_core::error::{Result, UnispaceError};

use super::info::{PdfSummary, read_document_info};
use crate::upload::{FileUpload, validate_upload};

/// The PDF header may be preceded by junk; readers look this far ahead.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Text pulled out of a PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedPdf {
    /// Page texts, each followed by a newline, then trimmed as a whole.
    pub text: String,
    pub page_count: usize,
    /// Scalar entries of the `/Info` dictionary, keyed by field name.
    pub document_info: BTreeMap<String, String>,
}

impl ExtractedPdf {
    pub fn summary(&self) -> PdfSummary {
        PdfSummary::from_info(self.page_count, &self.document_info)
    }
}

/// Size cap and deadline applied to each extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionLimits {
    pub max_bytes: u64,
    pub timeout: Duration,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ExtractionLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_bytes: config.max_upload_bytes,
            timeout: config.extraction_timeout(),
        }
    }
}

/// Validates uploads and turns PDFs into text.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    limits: ExtractionLimits,
}

impl PdfExtractor {
    pub fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ExtractionLimits {
        self.limits
    }

    /// Validate and extract on the calling thread.
    ///
    /// No deadline applies here. A panic inside the parser is caught and
    /// reported as `UnknownExtractionFailure`, as on the worker path.
    #[instrument(skip_all, fields(name = %upload.name, size = upload.size()))]
    pub fn extract(&self, upload: &FileUpload) -> Result<ExtractedPdf> {
        validate_upload(upload, self.limits.max_bytes)?;
        catch_panics(|| extract_text(&upload.bytes))
    }

    /// Validate, then extract on a blocking worker under the configured
    /// deadline.
    ///
    /// Validation failures are returned before any worker is started. On
    /// timeout the worker is abandoned, not interrupted.
    #[instrument(skip_all, fields(name = %upload.name, size = upload.size()))]
    pub async fn extract_async(&self, upload: FileUpload) -> Result<ExtractedPdf> {
        validate_upload(&upload, self.limits.max_bytes)?;
        run_on_worker(self.limits.timeout, move || extract_text(&upload.bytes)).await
    }
}

/// Run `job` via `spawn_blocking`, mapping worker failures onto the
/// extraction error kinds.
pub(crate) async fn run_on_worker<F>(timeout: Duration, job: F) -> Result<ExtractedPdf>
where
    F: FnOnce() -> Result<ExtractedPdf> + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(job);
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(classify_join_error(join_err)),
        Err(_) => {
            warn!(timeout_ms = timeout.as_millis() as u64, "extraction timed out");
            Err(UnispaceError::ExtractionTimeout(timeout))
        }
    }
}

/// Run `job` on this thread, turning a panic into `UnknownExtractionFailure`.
fn catch_panics<F>(job: F) -> Result<ExtractedPdf>
where
    F: FnOnce() -> Result<ExtractedPdf> + UnwindSafe,
{
    std::panic::catch_unwind(job).unwrap_or_else(|payload| {
        let detail = panic_message(&*payload);
        warn!(%detail, "PDF parser panicked");
        Err(UnispaceError::UnknownExtractionFailure(detail))
    })
}

fn classify_join_error(err: JoinError) -> UnispaceError {
    if err.is_panic() {
        let detail = panic_message(&*err.into_panic());
        warn!(%detail, "extraction worker panicked");
        UnispaceError::UnknownExtractionFailure(detail)
    } else {
        warn!(error = %err, "extraction worker cancelled");
        UnispaceError::WorkerUnavailable(err.to_string())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause");
    format!("PDF parser panicked: {detail}")
}

/// Parse `data` as a PDF and collect its text.
///
/// Pages whose text cannot be decoded are logged and skipped. Metadata
/// problems never fail the extraction.
#[instrument(skip_all, fields(bytes_len = data.len()))]
pub fn extract_text(data: &[u8]) -> Result<ExtractedPdf> {
    if !has_pdf_header(data) {
        return Err(UnispaceError::InvalidFileType(
            "missing %PDF- header".into(),
        ));
    }

    let document = Document::load_mem(data).map_err(classify_load_error)?;
    if document.is_encrypted() {
        return Err(UnispaceError::PasswordProtected);
    }

    let pages = document.get_pages();
    let page_count = pages.len();
    debug!(page_count, "PDF loaded");

    let mut text = String::new();
    for &page_number in pages.keys() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(err) => warn!(page_number, %err, "skipping page with unreadable text"),
        }
    }

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(UnispaceError::NoTextFound);
    }

    let document_info = read_document_info(&document);
    info!(page_count, chars = text.len(), "text extracted");

    Ok(ExtractedPdf {
        text,
        page_count,
        document_info,
    })
}

fn has_pdf_header(data: &[u8]) -> bool {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(5).any(|w| w == b"%PDF-")
}

fn classify_load_error(err: lopdf::Error) -> UnispaceError {
    classify_load_message(err.to_string())
}

/// Encryption problems surface from lopdf as load errors; anything else
/// means the structure is broken.
fn classify_load_message(detail: String) -> UnispaceError {
    let lower = detail.to_ascii_lowercase();
    if lower.contains("password") || lower.contains("decrypt") || lower.contains("encrypt") {
        UnispaceError::PasswordProtected
    } else {
        UnispaceError::CorruptedDocument(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Build a PDF with one page per entry in `pages`, each showing that text
    /// in Courier.
    fn build_pdf(pages: &[&str], title: Option<&str>) -> Vec<u8> {
        save(build_document(pages, title))
    }

    fn save(mut doc: Document) -> Vec<u8> {
        let mut output = Vec::new();
        doc.save_to(&mut output).unwrap();
        output
    }

    fn build_document(pages: &[&str], title: Option<&str>) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let mut operations = Vec::new();
            if !page_text.is_empty() {
                operations = vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ];
            }
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title),
                "Author" => Object::string_literal("J. Doe"),
            });
            doc.trailer.set("Info", info_id);
        }
        doc
    }

    /// Standard security handler entry whose owner and user hashes match no
    /// password, so the document cannot be opened.
    fn lock(doc: &mut Document) {
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "Length" => 40,
            "P" => -44,
            "O" => Object::string_literal(vec![0x5Au8; 32]),
            "U" => Object::string_literal(vec![0xA5u8; 32]),
        });
        doc.trailer.set("Encrypt", encrypt_id);
        doc.trailer.set(
            "ID",
            vec![
                Object::string_literal(vec![0x11u8; 16]),
                Object::string_literal(vec![0x11u8; 16]),
            ],
        );
    }

    fn pdf_upload(bytes: Vec<u8>) -> FileUpload {
        FileUpload::new("test.pdf", "application/pdf", bytes)
    }

    #[test]
    fn extracts_text_from_every_page() {
        let extracted = extract_text(&build_pdf(&["Hello World", "Second page"], None)).unwrap();
        assert_eq!(extracted.page_count, 2);
        assert!(extracted.text.contains("Hello World"));
        assert!(extracted.text.contains("Second page"));
        assert_eq!(extracted.text, extracted.text.trim());
    }

    #[test]
    fn reads_document_info() {
        let extracted = extract_text(&build_pdf(&["Body"], Some("Quarterly Notes"))).unwrap();
        assert_eq!(
            extracted.document_info.get("Title").map(String::as_str),
            Some("Quarterly Notes")
        );
        let summary = extracted.summary();
        assert_eq!(summary.title, "Quarterly Notes");
        assert_eq!(summary.author, "J. Doe");
        assert_eq!(summary.subject, "No subject");
    }

    #[test]
    fn missing_info_uses_defaults() {
        let extracted = extract_text(&build_pdf(&["Body"], None)).unwrap();
        assert!(extracted.document_info.is_empty());
        assert_eq!(extracted.summary().title, "Untitled");
    }

    #[test]
    fn blank_pages_mean_no_text() {
        let result = extract_text(&build_pdf(&["", ""], None));
        assert!(matches!(result, Err(UnispaceError::NoTextFound)));
    }

    #[test]
    fn non_pdf_bytes_are_invalid_type() {
        let result = extract_text(b"PK\x03\x04 definitely a zip");
        assert!(matches!(result, Err(UnispaceError::InvalidFileType(_))));
    }

    #[test]
    fn truncated_pdf_is_corrupted() {
        let result = extract_text(b"%PDF-1.7\n1 0 obj\n<< /Type /Catalog");
        assert!(matches!(result, Err(UnispaceError::CorruptedDocument(_))));
    }

    #[test]
    fn encrypted_pdf_is_password_protected() {
        let mut doc = build_document(&["Secret minutes"], None);
        lock(&mut doc);
        let result = extract_text(&save(doc));
        assert!(matches!(result, Err(UnispaceError::PasswordProtected)));
    }

    #[test]
    fn encryption_load_errors_map_to_password_protected() {
        for detail in [
            "Decryption error: incorrect password",
            "invalid PASSWORD supplied",
            "unsupported encryption revision",
        ] {
            assert!(matches!(
                classify_load_message(detail.to_string()),
                UnispaceError::PasswordProtected
            ));
        }
    }

    #[test]
    fn other_load_errors_are_corruption() {
        let err = classify_load_message("invalid cross-reference table".to_string());
        assert!(
            matches!(err, UnispaceError::CorruptedDocument(detail) if detail.contains("cross-reference"))
        );
    }

    #[test]
    fn sync_extraction_catches_parser_panics() {
        let result = catch_panics(|| panic!("bad font program"));
        match result {
            Err(UnispaceError::UnknownExtractionFailure(detail)) => {
                assert!(detail.contains("bad font program"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn extractor_validates_before_parsing() {
        let extractor = PdfExtractor::new(ExtractionLimits {
            max_bytes: 16,
            timeout: Duration::from_secs(5),
        });
        let result = extractor.extract(&pdf_upload(build_pdf(&["Hello"], None)));
        assert!(matches!(result, Err(UnispaceError::FileTooLarge { limit: 16, .. })));
    }

    #[tokio::test]
    async fn async_extraction_matches_sync() {
        let bytes = build_pdf(&["Hello World"], None);
        let extractor = PdfExtractor::default();
        let sync = extractor.extract(&pdf_upload(bytes.clone())).unwrap();
        let from_worker = extractor.extract_async(pdf_upload(bytes)).await.unwrap();
        assert_eq!(sync, from_worker);
    }

    #[tokio::test]
    async fn async_rejects_wrong_mime_without_worker() {
        let upload = FileUpload::new("a.txt", "text/plain", b"%PDF-1.4".to_vec());
        let result = PdfExtractor::default().extract_async(upload).await;
        assert!(matches!(result, Err(UnispaceError::InvalidFileType(_))));
    }

    #[tokio::test]
    async fn slow_worker_times_out() {
        let result = run_on_worker(Duration::from_millis(20), || {
            std::thread::sleep(Duration::from_millis(500));
            Err(UnispaceError::NoTextFound)
        })
        .await;
        match result {
            Err(err @ UnispaceError::ExtractionTimeout(_)) => {
                assert_eq!(err.to_string(), "extraction timed out after 20ms");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancelled_worker_is_unavailable() {
        let handle = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
        handle.abort();
        let join_err = handle.await.unwrap_err();
        assert!(join_err.is_cancelled());
        assert!(matches!(
            classify_join_error(join_err),
            UnispaceError::WorkerUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn panicking_worker_is_reported() {
        let result = run_on_worker(Duration::from_secs(5), || panic!("parser blew up")).await;
        assert!(matches!(result, Err(UnispaceError::UnknownExtractionFailure(_))));
    }
}

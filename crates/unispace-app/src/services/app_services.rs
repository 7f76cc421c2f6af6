// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the registry, the PDF extractor and the
// clipboard, and applies their results to a `Session`.

use std::path::Path;

use tracing::{info, warn};
use unispace_bridge::fallback::{FallbackClipboard, FileClipboard};
use unispace_bridge::platform_bridge;
use unispace_bridge::traits::NativeClipboard;
use unispace_core::AppConfig;
use unispace_core::error::Result;
use unispace_core::human_errors::humanize_error;
use unispace_core::types::DocumentType;
use unispace_document::{ExtractionLimits, FileUpload, PdfExtractor, PdfSummary, format_file_size};
use unispace_text::Registry;

use super::data_dir;
use crate::state::Session;

const CLIPBOARD_FALLBACK_FILE: &str = "clipboard.txt";

/// Shared services for one run of the application.
pub struct AppServices {
    config: AppConfig,
    registry: &'static Registry,
    extractor: PdfExtractor,
    clipboard: Box<dyn NativeClipboard>,
}

impl AppServices {
    /// Wire up the standard registry, the system clipboard (falling back to a
    /// file in the data directory) and an extractor bounded by `config`.
    pub fn init(config: AppConfig) -> Self {
        let bridge = platform_bridge();
        info!(platform = bridge.platform_name(), "app services initialised");
        let fallback = FileClipboard::new(data_dir::data_dir().join(CLIPBOARD_FALLBACK_FILE));
        Self::with_clipboard(config, Box::new(FallbackClipboard::new(bridge, fallback)))
    }

    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn NativeClipboard>) -> Self {
        let extractor = PdfExtractor::new(ExtractionLimits::from(&config));
        Self {
            config,
            registry: Registry::standard(),
            extractor,
            clipboard,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// Extract a PDF from disk into `session`.
    ///
    /// The MIME type is guessed from the extension unless `force_pdf` is set.
    /// On failure the session carries the human-readable message and the
    /// error is returned as well.
    pub async fn load_pdf(
        &self,
        session: &mut Session,
        path: &Path,
        force_pdf: bool,
    ) -> Result<PdfSummary> {
        let upload = match FileUpload::from_path(path) {
            Ok(upload) if force_pdf => upload.with_mime_type(DocumentType::Pdf.mime_type()),
            Ok(upload) => upload,
            Err(err) => {
                session.report_error(humanize_error(&err).message);
                return Err(err);
            }
        };
        info!(
            name = %upload.name,
            size = %format_file_size(upload.size()),
            "extracting PDF"
        );

        match self.extractor.extract_async(upload).await {
            Ok(extracted) => {
                let summary = extracted.summary();
                session.load_pdf_text(extracted.text);
                Ok(summary)
            }
            Err(err) => {
                warn!(error = %err, "PDF extraction failed");
                session.report_error(humanize_error(&err).message);
                Err(err)
            }
        }
    }

    /// Copy `text` and return the confirmation line.
    pub fn copy(&self, text: &str, label: &str) -> Result<String> {
        self.clipboard.write_text(text)?;
        Ok(format!("Copied text with {label} spacing!"))
    }

    /// Copy the session text with one registry variant applied.
    pub fn copy_variant(&self, session: &Session, name: &str) -> Result<String> {
        let output = unispace_text::substitute_spaces(session.input_text(), &self.registry[name]);
        self.copy(&output, name)
    }

    /// Copy the custom combination output; `None` when there is nothing to copy.
    pub fn copy_custom(&self, session: &Session) -> Result<Option<String>> {
        match session.custom_output(self.registry) {
            Some(output) => self.copy(&output, "Custom").map(Some),
            None => Ok(None),
        }
    }
}

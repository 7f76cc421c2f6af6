// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// unispace-document — Getting text into Unispace from uploaded documents.
//
// Provides upload validation (size and MIME checks, human-readable file
// sizes) and PDF text extraction with metadata via `lopdf`, either inline or
// on a blocking worker with a deadline.

pub mod pdf;
pub mod upload;

// Re-export the primary structs so callers can use `unispace_document::PdfExtractor` etc.
pub use pdf::extractor::{ExtractedPdf, ExtractionLimits, PdfExtractor};
pub use pdf::info::PdfSummary;
pub use upload::{FileUpload, format_file_size, validate_upload};

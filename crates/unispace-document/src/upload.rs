// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Upload validation — checks that run before any parsing is attempted.

use std::path::Path;

use tracing::debug;
use unispace_core::error::{Result, UnispaceError};
use unispace_core::types::DocumentType;

const PDF_MIME: &str = "application/pdf";

/// A file handed over by the host (picker, drag-and-drop, CLI argument).
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing the MIME type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocumentType::from_extension)
            .map_or("application/octet-stream", |kind| kind.mime_type());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, mime_type, bytes))
    }

    /// Replace the guessed MIME type, e.g. when the user vouches for a PDF
    /// saved without its extension.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Reject uploads that must not reach the extractor.
///
/// Size is checked first, so an oversized file is refused whatever its MIME
/// type claims.
pub fn validate_upload(upload: &FileUpload, max_bytes: u64) -> Result<()> {
    let size = upload.size();
    if size > max_bytes {
        debug!(name = %upload.name, size, max_bytes, "upload too large");
        return Err(UnispaceError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }
    if upload.mime_type != PDF_MIME {
        debug!(name = %upload.name, mime = %upload.mime_type, "upload is not a PDF");
        return Err(UnispaceError::InvalidFileType(upload.mime_type.clone()));
    }
    Ok(())
}

/// Format a byte count with 1024-based units, e.g. `1536 -> "1.5 KB"`.
///
/// At most two decimals, trailing zeros dropped. Anything past GB stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

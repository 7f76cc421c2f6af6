// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Unispace.
//
// The substitution engine itself is total; everything here belongs to the
// collaborators around it (PDF extraction, clipboard, configuration).

use std::time::Duration;

use thiserror::Error;

/// Top-level error type for all Unispace operations.
#[derive(Debug, Error)]
pub enum UnispaceError {
    // -- Upload / extraction errors --
    #[error("not a PDF document: {0}")]
    InvalidFileType(String),

    #[error("file is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("PDF is password protected")]
    PasswordProtected,

    #[error("PDF structure is invalid: {0}")]
    CorruptedDocument(String),

    #[error("extraction worker unavailable: {0}")]
    WorkerUnavailable(String),

    #[error("extraction timed out after {0:?}")]
    ExtractionTimeout(Duration),

    #[error("no text content found in the PDF")]
    NoTextFound,

    #[error("PDF extraction failed: {0}")]
    UnknownExtractionFailure(String),

    // -- Text engine --
    #[error("invalid whitespace registry: {0}")]
    InvalidRegistry(String),

    #[error("markup processing failed: {0}")]
    Markup(String),

    // -- Platform bridge --
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UnispaceError {
    /// True for the failure kinds raised by the PDF extraction collaborator.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidFileType(_)
                | Self::FileTooLarge { .. }
                | Self::PasswordProtected
                | Self::CorruptedDocument(_)
                | Self::WorkerUnavailable(_)
                | Self::ExtractionTimeout(_)
                | Self::NoTextFound
                | Self::UnknownExtractionFailure(_)
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, UnispaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_timeout_keeps_its_precision() {
        let err = UnispaceError::ExtractionTimeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "extraction timed out after 250ms");
    }
}

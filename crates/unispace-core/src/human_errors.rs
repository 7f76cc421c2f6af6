// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the upload and copy flows.
//
// Every technical error is mapped to a plain sentence plus a suggestion. Each
// extraction failure kind gets its own message so the caller can surface them
// distinctly.

use crate::error::UnispaceError;

const MIB: u64 = 1024 * 1024;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worker hiccup or timeout; trying again may work.
    Transient,
    /// User must do something (pick another file, supply a password).
    ActionRequired,
    /// Cannot be fixed by retrying: broken file or missing feature.
    Permanent,
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain summary (shown as the banner text).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether repeating the same action might succeed.
    pub retriable: bool,
    /// Severity level (drives presentation).
    pub severity: Severity,
}

/// Convert a `UnispaceError` into a `HumanError`.
pub fn humanize_error(err: &UnispaceError) -> HumanError {
    match err {
        // -- Upload / extraction --
        UnispaceError::InvalidFileType(_) => HumanError {
            message: "Please select a PDF file".into(),
            suggestion: "Only PDF documents can be imported. Paste other text directly.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        UnispaceError::FileTooLarge { limit, .. } => HumanError {
            message: format!("File size must be less than {}MB", limit / MIB),
            suggestion: "Split the document or copy the text you need by hand.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        UnispaceError::PasswordProtected => HumanError {
            message: "This PDF is password protected. Please provide the password.".into(),
            suggestion: "Remove the password in your PDF viewer, then upload the copy.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        UnispaceError::CorruptedDocument(_) => HumanError {
            message: "The selected file is not a valid PDF or is corrupted.".into(),
            suggestion: "Try opening it in a PDF viewer first, or pick a different file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        UnispaceError::WorkerUnavailable(_) => HumanError {
            message: "PDF processing worker failed to start.".into(),
            suggestion: "Restart the application and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        UnispaceError::ExtractionTimeout(_) => HumanError {
            message: "PDF processing timed out. The file might be too large or complex.".into(),
            suggestion: "Try a smaller document or raise the extraction timeout in the config."
                .into(),
            retriable: true,
            severity: Severity::Transient,
        },

        UnispaceError::NoTextFound => HumanError {
            message: "No text content found in the PDF".into(),
            suggestion: "Scanned pages contain images, not text. Paste the text in manually."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        UnispaceError::UnknownExtractionFailure(detail) => HumanError {
            message: format!("Failed to parse PDF: {detail}"),
            suggestion: "Try again. If this keeps happening, try a different file.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Text engine --
        UnispaceError::InvalidRegistry(_) | UnispaceError::Markup(_) => HumanError {
            message: "The text could not be transformed.".into(),
            suggestion: "Try again with plain text. If this keeps happening, please report it."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Platform --
        UnispaceError::Clipboard(_) => HumanError {
            message: "Copying to the clipboard didn't work.".into(),
            suggestion: "Select the output and copy it by hand.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        UnispaceError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Some features need a desktop session with a clipboard.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Configuration / persistence --
        UnispaceError::Config(detail) => HumanError {
            message: "The settings file could not be read.".into(),
            suggestion: format!("Fix or delete the config file to fall back to defaults. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        UnispaceError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions, or copy the file somewhere else first."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        UnispaceError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Unispace.

use serde::{Deserialize, Serialize};

/// Where the text currently being transformed came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Typed or pasted by the user.
    #[default]
    Manual,
    /// Extracted from an uploaded PDF.
    Pdf,
}

/// Supported input document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Pdf,
    PlainText,
    Html,
}

impl DocumentType {
    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::PlainText => "text/plain",
            Self::Html => "text/html",
        }
    }

    /// Infer document type from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" | "md" => Some(Self::PlainText),
            "htm" | "html" | "xhtml" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Word, character and space counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    /// UTF-16 code units in the raw text.
    pub characters: usize,
    /// Literal U+0020 characters only.
    pub spaces: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(DocumentType::from_extension("PDF"), Some(DocumentType::Pdf));
        assert_eq!(DocumentType::from_extension("Html"), Some(DocumentType::Html));
        assert_eq!(DocumentType::from_extension("docx"), None);
    }

    #[test]
    fn pdf_mime_type() {
        assert_eq!(DocumentType::Pdf.mime_type(), "application/pdf");
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document information dictionary (`/Info` in the trailer).

use std::collections::BTreeMap;

use lopdf::{Document, Object};
use serde::Serialize;
use tracing::warn;

/// Display-ready metadata with placeholders for missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfSummary {
    pub pages: usize,
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
    pub creation_date: String,
    pub modification_date: String,
}

impl PdfSummary {
    pub fn from_info(pages: usize, info: &BTreeMap<String, String>) -> Self {
        let field = |key: &str, fallback: &str| {
            info.get(key)
                .filter(|value| !value.is_empty())
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            pages,
            title: field("Title", "Untitled"),
            author: field("Author", "Unknown"),
            subject: field("Subject", "No subject"),
            creator: field("Creator", "Unknown"),
            creation_date: field("CreationDate", "Unknown"),
            modification_date: field("ModDate", "Unknown"),
        }
    }
}

/// Read every scalar entry of the trailer's `/Info` dictionary.
///
/// Metadata is best effort: a missing or broken dictionary yields an empty map.
pub(crate) fn read_document_info(document: &Document) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();

    let Ok(entry) = document.trailer.get(b"Info") else {
        return info;
    };
    let dict = match entry {
        Object::Reference(id) => match document.get_object(*id).and_then(Object::as_dict) {
            Ok(dict) => dict,
            Err(err) => {
                warn!(?id, %err, "could not resolve /Info dictionary");
                return info;
            }
        },
        Object::Dictionary(dict) => dict,
        _ => {
            warn!("/Info is neither a dictionary nor a reference");
            return info;
        }
    };

    for (key, value) in dict.iter() {
        if let Some(text) = scalar_text(document, value) {
            info.insert(String::from_utf8_lossy(key).into_owned(), text);
        }
    }
    info
}

fn scalar_text(document: &Document, value: &Object) -> Option<String> {
    match value {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::Integer(number) => Some(number.to_string()),
        Object::Real(number) => Some(number.to_string()),
        Object::Boolean(flag) => Some(flag.to_string()),
        // One level of indirection is common for producer strings.
        Object::Reference(id) => match document.get_object(*id) {
            Ok(Object::Reference(_)) | Err(_) => None,
            Ok(resolved) => scalar_text(document, resolved),
        },
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, UTF-8 with BOM, otherwise
/// one byte per character (Latin-1, close enough to PDFDocEncoding for
/// metadata).
pub(crate) fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        return char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    }
    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }
    bytes.iter().map(|&b| b as char).collect()
}

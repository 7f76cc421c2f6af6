// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Byte-level fingerprints — SHA-256 of the UTF-8 encoding.

use sha2::{Digest, Sha256};

/// SHA-256 of `text` as a lowercase hex string.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Fingerprints and UTF-8 sizes of a text before and after transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintComparison {
    pub original: String,
    pub transformed: String,
    pub original_bytes: usize,
    pub transformed_bytes: usize,
}

impl FingerprintComparison {
    pub fn changed(&self) -> bool {
        self.original != self.transformed
    }
}

pub fn compare(original: &str, transformed: &str) -> FingerprintComparison {
    FingerprintComparison {
        original: fingerprint(original),
        transformed: fingerprint(transformed),
        original_bytes: original.len(),
        transformed_bytes: transformed.len(),
    }
}

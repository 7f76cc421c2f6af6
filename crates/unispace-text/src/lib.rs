// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// unispace-text — The text engine for Unispace.
//
// Provides the whitespace variant registry, space substitution (plain text and
// HTML text nodes), ordered variant combinations, `\uXXXX` code-point escapes,
// text statistics and SHA-256 fingerprints. Every operation is a pure function
// over its explicit inputs.

pub mod combination;
pub mod escape;
pub mod fingerprint;
pub mod html;
pub mod registry;
pub mod stats;
pub mod substitute;

// Re-export the primary API so callers can use `unispace_text::substitute_spaces` etc.
pub use combination::Combination;
pub use escape::code_point_escape;
pub use fingerprint::{FingerprintComparison, compare, fingerprint};
pub use html::{apply_custom_spacing_html, substitute_spaces_in_html};
pub use registry::{Registry, Variant};
pub use stats::{is_non_empty_text, text_stats, word_count};
pub use substitute::{apply_custom_spacing, combine_variants, quick_variants, substitute_spaces};

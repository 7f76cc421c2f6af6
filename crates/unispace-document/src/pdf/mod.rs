// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — text extraction and document information.

pub mod extractor;
pub mod info;

pub use extractor::PdfExtractor;
pub use info::PdfSummary;

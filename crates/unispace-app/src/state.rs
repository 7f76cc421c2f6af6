// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session state — the transient selections of one editing session.

use serde::Serialize;
use unispace_core::types::{InputSource, TextStats};
use unispace_text::{Combination, Registry, code_point_escape, quick_variants, text_stats};

/// One cell of the per-variant output grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOutput {
    pub name: &'static str,
    /// `\uXXXX` rendering of the variant's sequence.
    pub escaped: String,
    pub description: &'static str,
    pub output: String,
}

/// Text being worked on plus the user's custom combination.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input_text: String,
    input_source: InputSource,
    combination: Combination,
    /// Pending choice in the variant picker, not yet added.
    selected: Option<String>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn input_source(&self) -> InputSource {
        self.input_source
    }

    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text typed or pasted by the user.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.input_source = InputSource::Manual;
        self.error = None;
    }

    /// Text handed over by the PDF extractor.
    pub fn load_pdf_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.input_source = InputSource::Pdf;
        self.error = None;
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Remember a picker choice; an empty name clears it.
    pub fn select(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.selected = (!name.is_empty()).then_some(name);
    }

    /// Add the pending choice to the combination.
    ///
    /// Returns false when nothing is pending, the name is not in `registry`,
    /// or it is already part of the combination. The pending choice is only
    /// reset after a successful add.
    pub fn add_selected(&mut self, registry: &Registry) -> bool {
        let Some(name) = self.selected.as_deref() else {
            return false;
        };
        if !registry.contains(name) || !self.combination.add(name) {
            return false;
        }
        self.selected = None;
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.combination.remove(name)
    }

    /// Reset text, combination, source and error.
    pub fn clear(&mut self) {
        self.input_text.clear();
        self.combination.clear();
        self.selected = None;
        self.input_source = InputSource::Manual;
        self.error = None;
    }

    pub fn stats(&self) -> TextStats {
        text_stats(&self.input_text)
    }

    /// The combined output, or `None` while there is no text or no selection.
    pub fn custom_output(&self, registry: &Registry) -> Option<String> {
        if self.input_text.is_empty() || self.combination.is_empty() {
            return None;
        }
        Some(self.combination.apply(&self.input_text, registry))
    }

    pub fn variant_outputs(&self, registry: &Registry) -> Vec<VariantOutput> {
        quick_variants(&self.input_text, registry)
            .into_iter()
            .map(|(variant, output)| VariantOutput {
                name: variant.name,
                escaped: code_point_escape(variant.sequence),
                description: variant.description,
                output,
            })
            .collect()
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ordered selection of registry names forming one composite replacement.

use crate::registry::Registry;
use crate::substitute::{apply_custom_spacing, combine_variants};

/// Duplicate-free list of variant names, kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    names: Vec<String>,
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name`. Returns false (and changes nothing) if already selected.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Returns false if `name` was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The concatenated sequence; panics on names missing from `registry`.
    pub fn replacement(&self, registry: &Registry) -> String {
        combine_variants(&self.names, registry)
    }

    pub fn apply(&self, text: &str, registry: &Registry) -> String {
        apply_custom_spacing(&self.names, text, registry)
    }
}

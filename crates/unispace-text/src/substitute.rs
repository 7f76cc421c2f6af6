// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Space substitution engine for plain text.

use crate::registry::{Registry, Variant};

/// Replace every U+0020 in `text` with `replacement`.
///
/// Tabs, newlines, NBSP and other whitespace are left alone. An empty
/// `replacement` removes the spaces outright. The replacement is inserted
/// verbatim, so a replacement that itself contains U+0020 is not re-expanded.
pub fn substitute_spaces(text: &str, replacement: &str) -> String {
    text.replace(' ', replacement)
}

/// Concatenate the sequences for `selected` in the given order.
///
/// # Panics
///
/// Panics if a name is not in `registry`. Callers only pass names they took
/// from the registry.
pub fn combine_variants<S: AsRef<str>>(selected: &[S], registry: &Registry) -> String {
    selected
        .iter()
        .map(|name| &registry[name.as_ref()])
        .collect()
}

/// Substitute spaces using the combined sequence of `selected`.
///
/// An empty selection passes `text` through unchanged.
pub fn apply_custom_spacing<S: AsRef<str>>(
    selected: &[S],
    text: &str,
    registry: &Registry,
) -> String {
    if selected.is_empty() {
        return text.to_owned();
    }
    substitute_spaces(text, &combine_variants(selected, registry))
}

/// Every registry variant applied to `text`, in registry order.
pub fn quick_variants<'r>(text: &str, registry: &'r Registry) -> Vec<(&'r Variant, String)> {
    registry
        .iter()
        .map(|variant| (variant, substitute_spaces(text, variant.sequence)))
        .collect()
}

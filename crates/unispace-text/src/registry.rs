// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Whitespace variant registry — the fixed name → Unicode sequence table.

use std::ops::Index;
use std::sync::LazyLock;

use unispace_core::error::{Result, UnispaceError};

/// One named whitespace variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Display name, also the lookup key (e.g. "Hair Space*3").
    pub name: &'static str,
    /// One or more whitespace / zero-width code points.
    pub sequence: &'static str,
    /// One-line usage note shown next to the variant.
    pub description: &'static str,
}

const STANDARD_VARIANTS: [Variant; 12] = [
    Variant {
        name: "Em Space",
        sequence: "\u{2003}",
        description: "in wide spacing between characters",
    },
    Variant {
        name: "En Space",
        sequence: "\u{2002}",
        description: "for mid-range spacing",
    },
    Variant {
        name: "Thin Space",
        sequence: "\u{2009}",
        description: "for slightly narrower spacing",
    },
    Variant {
        name: "Thin Space*2",
        sequence: "\u{2009}\u{2009}",
        description: "for even narrower spacing",
    },
    Variant {
        name: "Hair Space",
        sequence: "\u{200A}",
        description: "for very thin spacing",
    },
    Variant {
        name: "Narrow, Hair",
        sequence: "\u{202F}\u{200A}",
        description: "for extra narrow hair-like spacing",
    },
    Variant {
        name: "Thin, Hair",
        sequence: "\u{0020}\u{2009}\u{200A}",
        description: "for a mix of thin and hair spacing",
    },
    Variant {
        name: "Hair Space*3",
        sequence: "\u{200A}\u{200A}\u{200A}",
        description: "for extremely tight spacing",
    },
    Variant {
        name: "Narrow No-Break",
        sequence: "\u{202F}",
        description: "to prevent line breaks with tight spacing",
    },
    Variant {
        name: "Narrow No-Break*2",
        sequence: "\u{202F}\u{202F}",
        description: "for even tighter no-break spacing",
    },
    Variant {
        name: "Zero Width Space",
        sequence: "\u{200A}\u{200B}\u{200A}",
        description: "to create word breaks without visible space",
    },
    Variant {
        name: "Word Joiner",
        sequence: "\u{2009}\u{2060}\u{2009}",
        description: "to prevent word breaks without adding width",
    },
];

static STANDARD: LazyLock<Registry> = LazyLock::new(|| Registry {
    variants: STANDARD_VARIANTS.to_vec(),
});

/// Ordered, immutable mapping from variant name to sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    variants: Vec<Variant>,
}

impl Registry {
    /// Build a registry, checking that names are unique and every sequence is
    /// non-empty and made only of whitespace or zero-width code points.
    pub fn new(variants: Vec<Variant>) -> Result<Self> {
        for (index, variant) in variants.iter().enumerate() {
            if variants[..index].iter().any(|v| v.name == variant.name) {
                return Err(UnispaceError::InvalidRegistry(format!(
                    "duplicate name {:?}",
                    variant.name
                )));
            }
            if variant.sequence.is_empty() {
                return Err(UnispaceError::InvalidRegistry(format!(
                    "{:?} has an empty sequence",
                    variant.name
                )));
            }
            if let Some(bad) = variant.sequence.chars().find(|&c| !is_spacing_char(c)) {
                return Err(UnispaceError::InvalidRegistry(format!(
                    "{:?} contains non-spacing character U+{:04X}",
                    variant.name, bad as u32
                )));
            }
        }
        Ok(Self { variants })
    }

    /// The built-in table, initialised once per process.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Variants in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|v| v.name)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Looking up an unknown name is a caller bug, so indexing panics.
impl Index<&str> for Registry {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(variant) => variant.sequence,
            None => panic!("unknown whitespace variant {name:?}; check Registry::contains first"),
        }
    }
}

/// Whitespace (Unicode `White_Space`) or one of the zero-width joiner-class
/// characters: ZWSP, ZWNJ, ZWJ, word joiner, BOM.
fn is_spacing_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_passes_validation() {
        let rebuilt = Registry::new(STANDARD_VARIANTS.to_vec()).unwrap();
        assert_eq!(&rebuilt, Registry::standard());
        assert_eq!(rebuilt.len(), 12);
    }

    #[test]
    fn standard_order_is_table_order() {
        let names: Vec<_> = Registry::standard().names().collect();
        assert_eq!(names.first(), Some(&"Em Space"));
        assert_eq!(names.last(), Some(&"Word Joiner"));
        assert_eq!(names[6], "Thin, Hair");
    }

    #[test]
    fn index_returns_sequence() {
        let registry = Registry::standard();
        assert_eq!(&registry["Hair Space*3"], "\u{200A}\u{200A}\u{200A}");
        assert_eq!(&registry["Thin, Hair"], " \u{2009}\u{200A}");
    }

    #[test]
    #[should_panic(expected = "unknown whitespace variant")]
    fn index_unknown_name_panics() {
        let _ = &Registry::standard()["Figure Space"];
    }

    #[test]
    fn duplicate_names_rejected() {
        let em = STANDARD_VARIANTS[0];
        let err = Registry::new(vec![em, em]).unwrap_err();
        assert!(matches!(err, UnispaceError::InvalidRegistry(_)));
    }

    #[test]
    fn visible_characters_rejected() {
        let bad = Variant {
            name: "Dash",
            sequence: "-",
            description: "not whitespace",
        };
        assert!(Registry::new(vec![bad]).is_err());
    }

    #[test]
    fn empty_sequence_rejected() {
        let bad = Variant {
            name: "Nothing",
            sequence: "",
            description: "empty",
        };
        assert!(Registry::new(vec![bad]).is_err());
    }

    #[test]
    fn descriptions_preserved() {
        let registry = Registry::standard();
        assert_eq!(
            registry.get("Word Joiner").map(|v| v.description),
            Some("to prevent word breaks without adding width")
        );
    }
}

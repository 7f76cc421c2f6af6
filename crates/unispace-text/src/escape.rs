// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code-point formatter for showing invisible characters.

use std::fmt::Write;

/// Render each UTF-16 code unit of `text` as `\uXXXX` (upper-case hex).
///
/// Display only. Characters outside the BMP come out as their two surrogate
/// halves.
pub fn code_point_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 6);
    for unit in text.encode_utf16() {
        // Writing into a String cannot fail.
        let _ = write!(out, "\\u{unit:04X}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn em_space_escape() {
        assert_eq!(code_point_escape("\u{2003}"), "\\u2003");
        assert_eq!(code_point_escape("\u{2003}").len(), 6);
    }

    #[test]
    fn hex_is_upper_case_and_padded() {
        assert_eq!(code_point_escape("\u{200A} "), "\\u200A\\u0020");
    }

    #[test]
    fn empty_input() {
        assert_eq!(code_point_escape(""), "");
    }

    #[test]
    fn astral_characters_split_into_surrogates() {
        assert_eq!(code_point_escape("\u{1F600}"), "\\uD83D\\uDE00");
    }
}

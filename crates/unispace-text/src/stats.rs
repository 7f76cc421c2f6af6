// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text inspection — word, character and space counts.
//
// Whitespace means Unicode `White_Space` (`char::is_whitespace`) for both
// trimming and word splitting. EM, EN, THIN, HAIR and NARROW NO-BREAK SPACE
// split words; ZERO WIDTH SPACE and WORD JOINER do not, so counts on
// transformed text can differ from the source.

use unispace_core::types::TextStats;

/// True iff `text` has something other than whitespace.
pub fn is_non_empty_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Number of maximal non-whitespace runs.
pub fn word_count(text: &str) -> usize {
    if !is_non_empty_text(text) {
        return 0;
    }
    text.split_whitespace().count()
}

/// Words, UTF-16 length and U+0020 count of the raw text.
///
/// Empty or whitespace-only text yields the all-zero record.
pub fn text_stats(text: &str) -> TextStats {
    if !is_non_empty_text(text) {
        return TextStats::default();
    }
    TextStats {
        words: word_count(text),
        characters: text.encode_utf16().count(),
        spaces: text.matches(' ').count(),
    }
}

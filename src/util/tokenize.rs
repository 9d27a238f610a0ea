// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization and tokenization.
//!
//! A token is a lowercased run of characters between delimiters. Delimiters
//! are whitespace, `,`, `.`, and `-`; runs of them collapse, and empty tokens
//! are dropped, so `"North-Indian,  Chinese."` yields `north`, `indian`,
//! `chinese`.
//!
//! "Whitespace" is the `\s` class of web regular expressions, not Rust's
//! `char::is_whitespace`: U+FEFF (byte order mark) separates tokens, U+0085
//! (next line) does not. Query trimming uses the same class.

#[cfg(feature = "fold-diacritics")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase `value`, folding diacritics first when `fold-diacritics` is on
/// ("Café" → "cafe").
#[cfg(feature = "fold-diacritics")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase `value`.
#[cfg(not(feature = "fold-diacritics"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Combining Diacritical Marks and its supplements.
#[cfg(feature = "fold-diacritics")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// Unicode `White_Space` minus U+0085, plus U+FEFF.
#[inline]
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

#[inline]
fn is_delimiter(c: char) -> bool {
    is_space(c) || matches!(c, ',' | '.' | '-')
}

/// Split `text` into normalized, non-empty tokens.
///
/// # Example
///
/// ```ignore
/// assert_eq!(tokenize("Cups N Crumbs"), vec!["cups", "n", "crumbs"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Length of a query as the minimum-length guard sees it: trimmed and
/// normalized, counted in characters.
pub fn query_len(query: &str) -> usize {
    normalize(query.trim_matches(is_space)).chars().count()
}

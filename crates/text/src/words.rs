//! Whitespace word splitting shared by the normalizer and the match cascade.

use std::str::SplitWhitespace;

/// Iterate the whitespace-delimited words of a label
pub fn words(label: &str) -> SplitWhitespace<'_> {
    label.split_whitespace()
}

/// Number of whitespace-delimited words
#[must_use]
pub fn word_count(label: &str) -> usize {
    words(label).count()
}

/// Exactly one word, no internal whitespace
#[must_use]
pub fn is_single_word(label: &str) -> bool {
    let mut iter = words(label);
    iter.next().is_some() && iter.next().is_none()
}

/// More than one word
#[must_use]
pub fn is_phrase(label: &str) -> bool {
    let mut iter = words(label);
    iter.next().is_some() && iter.next().is_some()
}

/// Join words back with single spaces, dropping leading/trailing whitespace
#[must_use]
pub fn collapse_whitespace(label: &str) -> String {
    words(label).collect::<Vec<_>>().join(" ")
}

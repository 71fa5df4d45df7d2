use crate::options::NormalizationOptions;
use crate::words::{collapse_whitespace, words};
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Upper bound on re-stemming a word until it stops changing
const MAX_STEM_PASSES: usize = 4;

/// Lowercase and trim surrounding whitespace
#[must_use]
pub fn normalize_case(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Decompose to NFD and drop every combining mark ("café" -> "cafe").
///
/// Characters without a decomposition (e.g. "ß", "ø") pass through unchanged,
/// and a stray combining mark with no base character is simply dropped.
#[must_use]
pub fn remove_diacritics(label: &str) -> String {
    label.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Replace every ASCII punctuation character with a space.
///
/// The set is ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``. A space is inserted rather
/// than deleting the character so "rock-n-roll" keeps three words.
#[must_use]
pub fn remove_punctuation(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect()
}

/// Label transforms used by the match cascade.
///
/// Holds a Snowball English stemmer; everything else is stateless.
pub struct TextNormalizer {
    options: NormalizationOptions,
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self {
            options,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn options(&self) -> NormalizationOptions {
        self.options
    }

    /// Apply the configured transforms to an already case-folded label.
    ///
    /// Order: diacritics, punctuation, whitespace collapse, stemming.
    /// Running it again on its own output returns the same string.
    pub fn normalize(&self, label: &str) -> String {
        let mut out = label.to_string();

        if self.options.strip_diacritics {
            out = remove_diacritics(&out);
            out = remove_punctuation(&out);
            out = collapse_whitespace(&out);
        }

        if self.options.stemming {
            out = self.stem(&out);
        }

        out
    }

    /// Stem each word independently and rejoin with single spaces
    pub fn stem(&self, label: &str) -> String {
        words(label)
            .map(|word| self.stem_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Order-insensitive signature: stemmed words, sorted, concatenated.
    ///
    /// "heart disease" and "diseases of heart" differ, "disease heart" and
    /// "heart diseases" share the signature "diseaseheart".
    pub fn term_signature(&self, label: &str) -> String {
        let mut stems: Vec<String> = words(label).map(|word| self.stem_word(word)).collect();
        stems.sort();
        stems.concat()
    }

    /// Stem one word to a fixpoint so stemmed labels are stable under re-stemming
    fn stem_word(&self, word: &str) -> String {
        let mut current = word.to_string();
        for _ in 0..MAX_STEM_PASSES {
            let next = self.stemmer.stem(&current);
            if next == current {
                break;
            }
            current = next.into_owned();
        }
        current
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizationOptions::default())
    }
}

impl fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

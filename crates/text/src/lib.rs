//! # Thesaurus Text
//!
//! Label normalization applied before vocabulary terms are compared.
//!
//! ## Pipeline
//!
//! ```text
//! prefLabel literal
//!     │
//!     ├──> normalize_case          (always, at label extraction)
//!     │
//!     ├──> remove_diacritics       (strip_diacritics)
//!     ├──> remove_punctuation      (strip_diacritics)
//!     │
//!     └──> stem                    (stemming)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use thesaurus_text::{normalize_case, NormalizationOptions, TextNormalizer};
//!
//! let normalizer = TextNormalizer::new(NormalizationOptions::all());
//! let label = normalize_case("  Running-Dogs ");
//! assert_eq!(normalizer.normalize(&label), "run dog");
//! ```

mod normalizer;
mod options;
mod words;

pub use normalizer::{normalize_case, remove_diacritics, remove_punctuation, TextNormalizer};
pub use options::NormalizationOptions;
pub use words::{collapse_whitespace, is_phrase, is_single_word, word_count, words};

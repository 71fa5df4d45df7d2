use serde::{Deserialize, Serialize};

/// Which label transforms run before two labels are compared.
///
/// Case folding is not listed here: it is applied unconditionally when labels
/// are extracted from a vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Reduce every word to its stem ("running" -> "run")
    pub stemming: bool,

    /// Drop combining marks and replace ASCII punctuation with spaces
    pub strip_diacritics: bool,
}

impl NormalizationOptions {
    /// Options with every transform disabled
    #[must_use]
    pub const fn none() -> Self {
        Self {
            stemming: false,
            strip_diacritics: false,
        }
    }

    /// Options with every transform enabled
    #[must_use]
    pub const fn all() -> Self {
        Self {
            stemming: true,
            strip_diacritics: true,
        }
    }

    /// True when normalization leaves labels untouched
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        !self.stemming && !self.strip_diacritics
    }
}

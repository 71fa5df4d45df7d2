use crate::error::{AlignError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thesaurus_graph::LabelIndex;
use thesaurus_text::NormalizationOptions;

/// Which rules of the match cascade run, one switch per heuristic.
///
/// Equality, substring and phrase overlap always run unless
/// `identical_only` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Stem every word before comparing
    pub stemming: bool,

    /// Remove diacritics and punctuation before comparing
    pub strip_diacritics: bool,

    /// Relate concepts whose narrower terms share a label
    pub compare_children: bool,

    /// Relate concepts whose broader terms share at least three labels
    pub compare_parents: bool,

    /// Map identical labels only
    pub identical_only: bool,

    /// Match multi-word labels with the same stemmed, sorted words
    pub term_signature: bool,
}

impl MatchConfig {
    pub const fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            stemming: self.stemming,
            strip_diacritics: self.strip_diacritics,
        }
    }

    /// True when ancestor or descendant label sets are needed
    pub const fn needs_hierarchy(&self) -> bool {
        !self.identical_only && (self.compare_children || self.compare_parents)
    }

    /// Switches enabled in either config (a switch can be turned on, never off)
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            stemming: self.stemming || other.stemming,
            strip_diacritics: self.strip_diacritics || other.strip_diacritics,
            compare_children: self.compare_children || other.compare_children,
            compare_parents: self.compare_parents || other.compare_parents,
            identical_only: self.identical_only || other.identical_only,
            term_signature: self.term_signature || other.term_signature,
        }
    }

    /// Enabled rules that never run because `identical_only` stops the
    /// cascade after equality
    pub fn inert_rules(&self) -> Vec<&'static str> {
        if !self.identical_only {
            return Vec::new();
        }

        [
            (self.term_signature, "term_signature"),
            (self.compare_children, "compare_children"),
            (self.compare_parents, "compare_parents"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }

    /// Warn about switches that have no effect; every combination is accepted
    pub fn validate(&self) -> Result<()> {
        let inert = self.inert_rules();
        if !inert.is_empty() {
            log::warn!(
                "identical_only is set; {} will not run",
                inert.join(", ")
            );
        }
        Ok(())
    }
}

/// Label selection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// Preferred language tag for `skos:prefLabel` (e.g. "en")
    pub language: Option<String>,
}

impl LabelConfig {
    pub fn label_index(&self) -> LabelIndex {
        match &self.language {
            Some(language) => LabelIndex::with_language(language.clone()),
            None => LabelIndex::new(),
        }
    }
}

/// Complete alignment configuration, optionally loaded from TOML:
///
/// ```toml
/// [matching]
/// stemming = true
/// compare_parents = true
///
/// [labels]
/// language = "en"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignConfig {
    pub matching: MatchConfig,
    pub labels: LabelConfig,
}

impl AlignConfig {
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self> {
        toml::from_str(raw).map_err(|source| AlignError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| AlignError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw, path)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.matching.validate()?;
        if let Some(language) = &self.labels.language {
            if language.trim().is_empty() {
                return Err(AlignError::invalid_config("labels.language must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_valid() {
        assert!(AlignConfig::default().validate().is_ok());
    }

    #[test]
    fn identical_only_accepts_inert_rules() {
        let config = MatchConfig {
            identical_only: true,
            compare_parents: true,
            term_signature: true,
            ..Default::default()
        };
        assert_eq!(config.inert_rules(), vec!["term_signature", "compare_parents"]);
        assert!(config.validate().is_ok());
        assert!(!config.needs_hierarchy());

        let config = MatchConfig {
            identical_only: true,
            stemming: true,
            strip_diacritics: true,
            ..Default::default()
        };
        assert!(config.inert_rules().is_empty());

        let config = MatchConfig {
            compare_children: true,
            ..Default::default()
        };
        assert!(config.inert_rules().is_empty());
    }

    #[test]
    fn union_only_enables() {
        let file = MatchConfig {
            stemming: true,
            ..Default::default()
        };
        let flags = MatchConfig {
            compare_children: true,
            ..Default::default()
        };
        let merged = file.union(flags);
        assert!(merged.stemming && merged.compare_children);
        assert!(!merged.compare_parents);
        assert_eq!(merged.union(MatchConfig::default()), merged);
    }

    #[test]
    fn parses_toml() {
        let raw = r#"
            [matching]
            stemming = true
            compare_parents = true

            [labels]
            language = "en"
        "#;
        let config = AlignConfig::from_toml_str(raw, Path::new("align.toml")).unwrap();
        assert_eq!(
            config,
            AlignConfig {
                matching: MatchConfig {
                    stemming: true,
                    compare_parents: true,
                    ..Default::default()
                },
                labels: LabelConfig {
                    language: Some("en".to_string()),
                },
            }
        );
        assert_eq!(config.labels.label_index().language(), Some("en"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = AlignConfig::from_toml_str("[matching]\nfuzzy = true\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, AlignError::ConfigParse { .. }));
    }

    #[test]
    fn rejects_blank_language() {
        let config = AlignConfig {
            labels: LabelConfig {
                language: Some("  ".to_string()),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

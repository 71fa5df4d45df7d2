use crate::error::{GraphError, Result};
use crate::store::{ConceptId, VocabularyGraph};
use crate::vocab::skos;
use oxrdf::TermRef;
use std::collections::HashMap;
use thesaurus_text::normalize_case;

/// Concept -> case-folded preferred label, for one vocabulary.
///
/// Entries iterate in identifier order so runs are reproducible.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: Vec<(ConceptId, String)>,
    index: HashMap<ConceptId, usize>,
}

impl LabelMap {
    fn from_entries(mut entries: Vec<(ConceptId, String)>) -> Self {
        entries.sort_by_cached_key(|(id, _)| id.to_string());
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, (id, _))| (id.clone(), pos))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, concept: &ConceptId) -> Option<&str> {
        self.index
            .get(concept)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, concept: &ConceptId) -> bool {
        self.index.contains_key(concept)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConceptId, &str)> {
        self.entries.iter().map(|(id, label)| (id, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts `skos:prefLabel` values from a vocabulary graph.
///
/// A concept with several preferred labels keeps the lexicographically
/// smallest one. With a preferred language set, labels in that language win
/// over untagged labels and other languages.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    language: Option<String>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer labels tagged with this language (compared case-insensitively)
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn extract(&self, graph: &VocabularyGraph) -> Result<LabelMap> {
        // concept -> (rank, label); lower rank wins, then smaller label
        let mut best: HashMap<ConceptId, (u8, String)> = HashMap::new();

        for triple in graph.triples_for_predicate(skos::PREF_LABEL) {
            let literal = match triple.object {
                TermRef::Literal(literal) => literal,
                other => {
                    return Err(GraphError::malformed(format!(
                        "{}: prefLabel of {} is not a literal: {}",
                        graph.name(),
                        triple.subject,
                        other
                    )))
                }
            };

            let rank = self.rank(literal.language());
            let candidate = (rank, normalize_case(literal.value()));
            let concept = triple.subject.into_owned();

            match best.get_mut(&concept) {
                Some(current) if candidate < *current => *current = candidate,
                Some(_) => {}
                None => {
                    best.insert(concept, candidate);
                }
            }
        }

        let labels = LabelMap::from_entries(
            best.into_iter()
                .map(|(concept, (_, label))| (concept, label))
                .collect(),
        );

        log::info!("Extracted {} labels from {}", labels.len(), graph.name());
        Ok(labels)
    }

    fn rank(&self, language: Option<&str>) -> u8 {
        match (&self.language, language) {
            (None, _) => 0,
            (Some(wanted), Some(tag)) if wanted.eq_ignore_ascii_case(tag) => 0,
            (Some(_), _) => 1,
        }
    }
}

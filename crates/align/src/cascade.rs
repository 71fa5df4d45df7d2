use crate::config::MatchConfig;
use crate::report::Category;
use std::collections::BTreeSet;
use thesaurus_graph::ConceptId;
use thesaurus_text::{is_phrase, is_single_word, words, TextNormalizer};

/// Shared broader labels needed before two concepts count as related
pub const ANCESTOR_THRESHOLD: usize = 3;

/// Shared narrower labels needed before two concepts count as related
pub const DESCENDANT_THRESHOLD: usize = 1;

/// One side of a comparison, normalized once per vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparableConcept {
    pub id: ConceptId,

    /// Label after the configured normalization
    pub label: String,

    /// Term signature, only for multi-word labels with signature matching on
    pub signature: Option<String>,

    /// Labels of transitive broader concepts (empty unless compare_parents)
    pub ancestors: BTreeSet<String>,

    /// Labels of transitive narrower concepts (empty unless compare_children)
    pub descendants: BTreeSet<String>,
}

/// The heuristic cascade.
///
/// Rules run in a fixed order and the first one that fires decides the
/// category:
///
/// 1. equal labels -> `Equals`
/// 2. identical-only mode stops here
/// 3. two single words, one inside the other -> `Substrings`
/// 4. at least one phrase, a word in common -> `Phrase`
/// 5. two phrases, same term signature -> `Phrase`
/// 6. a shared descendant label -> `Related`
/// 7. three or more shared ancestor labels -> `Related`
#[derive(Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    normalizer: TextNormalizer,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config.normalization()),
            config,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Normalize a case-folded label for comparison. Neighbor sets start empty.
    pub fn prepare(&self, id: ConceptId, label: &str) -> ComparableConcept {
        let label = self.normalizer.normalize(label);
        let signature = (self.config.term_signature && is_phrase(&label))
            .then(|| self.normalizer.term_signature(&label));

        ComparableConcept {
            id,
            label,
            signature,
            ancestors: BTreeSet::new(),
            descendants: BTreeSet::new(),
        }
    }

    pub fn classify(&self, a: &ComparableConcept, b: &ComparableConcept) -> Option<Category> {
        // An empty label would equal, or sit inside, too much
        if a.label.is_empty() || b.label.is_empty() {
            return None;
        }

        if is_same_term(&a.label, &b.label) {
            return Some(Category::Equals);
        }

        if self.config.identical_only {
            return None;
        }

        if is_substring(&a.label, &b.label) {
            return Some(Category::Substrings);
        }

        if is_phrase_match(&a.label, &b.label) {
            return Some(Category::Phrase);
        }

        if self.config.term_signature && is_same_signature(a, b) {
            return Some(Category::Phrase);
        }

        if self.config.compare_children
            && shared_count(&a.descendants, &b.descendants) >= DESCENDANT_THRESHOLD
        {
            return Some(Category::Related);
        }

        if self.config.compare_parents
            && shared_count(&a.ancestors, &b.ancestors) >= ANCESTOR_THRESHOLD
        {
            return Some(Category::Related);
        }

        None
    }
}

pub fn is_same_term(a: &str, b: &str) -> bool {
    a == b
}

/// Both labels single words and one contains the other
pub fn is_substring(a: &str, b: &str) -> bool {
    is_single_word(a) && is_single_word(b) && (a.contains(b) || b.contains(a))
}

/// At least one label is a phrase and some word appears in both
pub fn is_phrase_match(a: &str, b: &str) -> bool {
    if !(is_phrase(a) || is_phrase(b)) {
        return false;
    }
    words(a).any(|word| words(b).any(|other| other == word))
}

fn is_same_signature(a: &ComparableConcept, b: &ComparableConcept) -> bool {
    matches!((&a.signature, &b.signature), (Some(x), Some(y)) if x == y)
}

fn shared_count(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    a.intersection(b).count()
}

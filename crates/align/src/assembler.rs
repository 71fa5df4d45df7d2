use crate::report::{Category, ReportingCounters};
use oxrdf::NamedNodeRef;
use thesaurus_graph::vocab::{exa, skos};
use thesaurus_graph::{ConceptId, MergedGraph, VocabularyGraph};

/// Predicate written for a matched pair.
///
/// Any pairing that involves a concept scheme is a distant match whatever
/// the category; ordinary terms get a SKOS mapping predicate.
pub fn mapping_predicate(category: Category, involves_scheme: bool) -> NamedNodeRef<'static> {
    if involves_scheme {
        return exa::DISTANT_MATCH;
    }
    match category {
        Category::Equals => skos::CLOSE_MATCH,
        Category::Substrings | Category::Phrase => skos::RELATED_MATCH,
        Category::Related => skos::SEMANTIC_RELATION,
    }
}

/// Result of a finished alignment run
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    pub merged: MergedGraph,
    pub counters: ReportingCounters,
}

/// Owns the merged graph and the counters for one run.
///
/// Every emitted mapping goes through `emit`, which adds the triple and bumps
/// its counter together, so the counters always sum to the mapping triples
/// actually present in the merged graph.
#[derive(Debug, Default)]
pub struct ResultAssembler {
    merged: MergedGraph,
    counters: ReportingCounters,
}

impl ResultAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move an input vocabulary's triples into the merged graph
    pub fn absorb(&mut self, vocabulary: VocabularyGraph) -> usize {
        self.merged.absorb(vocabulary)
    }

    /// Write the mapping triple for a matched pair.
    ///
    /// Returns false when the same triple is already in the merged graph; it
    /// is then neither added again nor counted.
    pub fn emit(&mut self, subject: &ConceptId, object: &ConceptId, category: Category) -> bool {
        let involves_scheme =
            self.merged.is_concept_scheme(subject) || self.merged.is_concept_scheme(object);
        let predicate = mapping_predicate(category, involves_scheme);

        if !self.merged.add_mapping(subject, predicate, object) {
            log::debug!("Skipping existing mapping {subject} {predicate} {object}");
            return false;
        }

        self.counters.increment(category);
        log::debug!("Added {category} mapping {subject} {predicate} {object}");
        true
    }

    pub fn counters(&self) -> &ReportingCounters {
        &self.counters
    }

    pub fn merged(&self) -> &MergedGraph {
        &self.merged
    }

    pub fn finish(self) -> AlignmentOutcome {
        AlignmentOutcome {
            merged: self.merged,
            counters: self.counters,
        }
    }
}

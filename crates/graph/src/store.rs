use crate::vocab::{exa, owl, rdf, skos};
use oxrdf::{Graph, NamedNodeRef, Subject, Term, Triple, TripleRef};
use std::collections::BTreeMap;

/// Identifier of a concept: an IRI, or a blank node for anonymous terms
pub type ConceptId = Subject;

/// Triples loaded from one input vocabulary
#[derive(Debug, Clone, Default)]
pub struct VocabularyGraph {
    /// File name or other human-readable origin, used in logs and errors
    name: String,

    /// Set of triples (duplicates collapse)
    graph: Graph,
}

impl VocabularyGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: Graph::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a triple, returns false when it was already present
    pub fn insert<'a>(&mut self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph.insert(triple)
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.graph.iter()
    }

    /// All triples using the given predicate
    pub fn triples_for_predicate<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = TripleRef<'a>> + 'a {
        self.graph.triples_for_predicate(predicate)
    }
}

/// The union of every input vocabulary plus the inferred mapping triples.
///
/// Nothing is ever removed. Mapping triples are counted separately so the
/// per-category counters can be checked against what was actually added.
#[derive(Debug, Clone)]
pub struct MergedGraph {
    graph: Graph,

    /// Prefix bindings handed to the serializer (deterministic order)
    prefixes: BTreeMap<String, String>,

    /// Mapping triples added through `add_mapping`
    mapping_triples: usize,
}

impl MergedGraph {
    /// Empty graph with `skos:`/`exa:` bound and `exa:distantMatch` declared
    pub fn new() -> Self {
        let mut merged = Self {
            graph: Graph::new(),
            prefixes: BTreeMap::new(),
            mapping_triples: 0,
        };

        merged.bind_prefix("skos", skos::NAMESPACE);
        merged.bind_prefix("exa", exa::NAMESPACE);
        merged
            .graph
            .insert(TripleRef::new(exa::DISTANT_MATCH, rdf::TYPE, owl::OBJECT_PROPERTY));

        merged
    }

    pub fn bind_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Move every triple of an input vocabulary into the merged graph.
    ///
    /// Returns how many triples were new (vocabularies may overlap).
    pub fn absorb(&mut self, vocabulary: VocabularyGraph) -> usize {
        let before = self.graph.len();
        for triple in vocabulary.iter() {
            self.graph.insert(triple);
        }
        let added = self.graph.len() - before;

        log::debug!(
            "Merged {}: {} triples ({} new)",
            vocabulary.name(),
            vocabulary.len(),
            added
        );

        added
    }

    /// Add one inferred mapping triple.
    ///
    /// Returns false, and counts nothing, when the triple already exists.
    pub fn add_mapping(
        &mut self,
        subject: &ConceptId,
        predicate: NamedNodeRef<'_>,
        object: &ConceptId,
    ) -> bool {
        let triple = Triple::new(subject.clone(), predicate, Term::from(object.clone()));
        let added = self.graph.insert(&triple);
        if added {
            self.mapping_triples += 1;
        }
        added
    }

    /// True when any input declared the concept as a `skos:ConceptScheme`
    pub fn is_concept_scheme(&self, concept: &ConceptId) -> bool {
        self.graph
            .contains(TripleRef::new(concept, rdf::TYPE, skos::CONCEPT_SCHEME))
    }

    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph.contains(triple)
    }

    pub fn mapping_count(&self) -> usize {
        self.mapping_triples
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.graph.iter()
    }

    /// Triples ordered by their N-Triples text.
    ///
    /// `iter()` order depends on the graph's hashing; every serializer
    /// writes from this list so equal graphs give equal bytes.
    pub fn sorted_triples(&self) -> Vec<TripleRef<'_>> {
        let mut triples: Vec<_> = self.graph.iter().collect();
        triples.sort_by_cached_key(|triple| triple.to_string());
        triples
    }
}

impl Default for MergedGraph {
    fn default() -> Self {
        Self::new()
    }
}

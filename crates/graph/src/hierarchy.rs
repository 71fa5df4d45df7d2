use crate::error::{GraphError, Result};
use crate::labels::LabelMap;
use crate::store::{ConceptId, VocabularyGraph};
use crate::vocab::skos;
use oxrdf::{NamedNodeRef, TermRef};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Hierarchical link between two concepts, as stated in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// A skos:broader B (B is more general)
    Broader,

    /// A skos:narrower B (B is more specific)
    Narrower,
}

impl Relation {
    const fn predicate(self) -> NamedNodeRef<'static> {
        match self {
            Self::Broader => skos::BROADER,
            Self::Narrower => skos::NARROWER,
        }
    }
}

/// Broader/narrower structure of one vocabulary.
///
/// Only explicitly stated links are followed: a `skos:narrower` triple is
/// not read as the inverse of `skos:broader` and vice versa.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    graph: DiGraph<ConceptId, Relation>,

    /// Concept -> NodeIndex mapping for fast lookup
    index: HashMap<ConceptId, NodeIndex>,
}

impl Hierarchy {
    pub fn build(vocabulary: &VocabularyGraph) -> Result<Self> {
        let mut hierarchy = Self::default();

        for relation in [Relation::Broader, Relation::Narrower] {
            for triple in vocabulary.triples_for_predicate(relation.predicate()) {
                let target: ConceptId = match triple.object {
                    TermRef::NamedNode(node) => node.into_owned().into(),
                    TermRef::BlankNode(node) => node.into_owned().into(),
                    other => {
                        return Err(GraphError::malformed(format!(
                            "{}: {} of {} is not a concept: {}",
                            vocabulary.name(),
                            relation.predicate(),
                            triple.subject,
                            other
                        )))
                    }
                };

                let from = hierarchy.node(triple.subject.into_owned());
                let to = hierarchy.node(target);
                hierarchy.graph.add_edge(from, to, relation);
            }
        }

        log::debug!(
            "Built hierarchy for {}: {} concepts, {} links",
            vocabulary.name(),
            hierarchy.graph.node_count(),
            hierarchy.graph.edge_count()
        );

        Ok(hierarchy)
    }

    fn node(&mut self, concept: ConceptId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&concept) {
            return idx;
        }
        let idx = self.graph.add_node(concept.clone());
        self.index.insert(concept, idx);
        idx
    }

    /// Every concept reachable over `relation`, excluding the start concept.
    ///
    /// Cycles are safe: each concept is visited at most once.
    pub fn closure(&self, concept: &ConceptId, relation: Relation) -> Vec<&ConceptId> {
        let Some(&start) = self.index.get(concept) else {
            return Vec::new();
        };

        let mut visited = HashSet::from([start]);
        let mut stack = vec![start];
        let mut reached = Vec::new();

        while let Some(current) = stack.pop() {
            for edge in self.graph.edges(current) {
                if *edge.weight() != relation {
                    continue;
                }
                let target = edge.target();
                if visited.insert(target) {
                    reached.push(&self.graph[target]);
                    stack.push(target);
                }
            }
        }

        reached
    }

    /// Labels of every transitive `skos:broader` concept
    pub fn ancestor_labels(&self, concept: &ConceptId, labels: &LabelMap) -> BTreeSet<String> {
        self.labels_of(self.closure(concept, Relation::Broader), labels)
    }

    /// Labels of every transitive `skos:narrower` concept
    pub fn descendant_labels(&self, concept: &ConceptId, labels: &LabelMap) -> BTreeSet<String> {
        self.labels_of(self.closure(concept, Relation::Narrower), labels)
    }

    fn labels_of(&self, concepts: Vec<&ConceptId>, labels: &LabelMap) -> BTreeSet<String> {
        concepts
            .into_iter()
            .filter_map(|concept| labels.get(concept))
            .map(str::to_string)
            .collect()
    }

    pub fn concept_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::parse_str;
    use crate::labels::LabelIndex;
    use crate::InputFormat;
    use oxrdf::NamedNode;
    use pretty_assertions::assert_eq;

    fn iri(s: &str) -> ConceptId {
        NamedNode::new_unchecked(format!("http://ex.org/{s}")).into()
    }

    fn load(ttl: &str) -> (Hierarchy, LabelMap) {
        let doc = format!(
            "@prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n\
             @prefix ex: <http://ex.org/> .\n{ttl}"
        );
        let graph = parse_str(&doc, InputFormat::Turtle, "test.ttl").unwrap();
        let labels = LabelIndex::new().extract(&graph).unwrap();
        (Hierarchy::build(&graph).unwrap(), labels)
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const ANIMALS: &str = r#"
        ex:animal skos:prefLabel "Animal" .
        ex:mammal skos:prefLabel "Mammal" ; skos:broader ex:animal ; skos:narrower ex:cat .
        ex:cat skos:prefLabel "Cat" ; skos:broader ex:mammal .
        ex:kitten skos:prefLabel "Kitten" ; skos:broader ex:cat .
        ex:animal skos:narrower ex:mammal .
    "#;

    #[test]
    fn ancestors_are_transitive() {
        let (hierarchy, labels) = load(ANIMALS);
        assert_eq!(
            hierarchy.ancestor_labels(&iri("kitten"), &labels),
            set(&["animal", "cat", "mammal"])
        );
        assert_eq!(hierarchy.ancestor_labels(&iri("animal"), &labels), set(&[]));
    }

    #[test]
    fn descendants_follow_only_narrower_links() {
        let (hierarchy, labels) = load(ANIMALS);
        // kitten is only linked upward with skos:broader
        assert_eq!(
            hierarchy.descendant_labels(&iri("animal"), &labels),
            set(&["cat", "mammal"])
        );
    }

    #[test]
    fn cycles_terminate_and_exclude_start() {
        let (hierarchy, labels) = load(
            r#"
            ex:a skos:prefLabel "a" ; skos:broader ex:b .
            ex:b skos:prefLabel "b" ; skos:broader ex:c .
            ex:c skos:prefLabel "c" ; skos:broader ex:a .
            "#,
        );
        assert_eq!(hierarchy.ancestor_labels(&iri("a"), &labels), set(&["b", "c"]));
        assert_eq!(hierarchy.closure(&iri("a"), Relation::Broader).len(), 2);
    }

    #[test]
    fn identical_ancestor_labels_collapse() {
        let (hierarchy, labels) = load(
            r#"
            ex:leaf skos:prefLabel "leaf" ; skos:broader ex:p1, ex:p2 .
            ex:p1 skos:prefLabel "Plants" .
            ex:p2 skos:prefLabel "plants" .
            "#,
        );
        assert_eq!(hierarchy.ancestor_labels(&iri("leaf"), &labels), set(&["plants"]));
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let (hierarchy, labels) = load(ANIMALS);
        let first = hierarchy.ancestor_labels(&iri("kitten"), &labels);
        let second = hierarchy.ancestor_labels(&iri("kitten"), &labels);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_concept_has_no_neighbors() {
        let (hierarchy, labels) = load(ANIMALS);
        assert!(hierarchy.ancestor_labels(&iri("unicorn"), &labels).is_empty());
    }

    #[test]
    fn literal_broader_is_graph_access_error() {
        let doc = "@prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n\
                   <http://ex.org/a> skos:broader \"animals\" .";
        let graph = parse_str(doc, InputFormat::Turtle, "bad.ttl").unwrap();
        let err = Hierarchy::build(&graph).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GraphAccess);
    }
}

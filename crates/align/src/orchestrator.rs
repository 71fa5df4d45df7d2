use crate::assembler::{AlignmentOutcome, ResultAssembler};
use crate::cascade::{ComparableConcept, MatchEngine};
use crate::config::AlignConfig;
use crate::error::{AlignError, Result};
use crate::report::Category;
use rayon::prelude::*;
use std::collections::VecDeque;
use std::path::Path;
use thesaurus_graph::{parse_file, Hierarchy, InputFormat, LabelIndex, VocabularyGraph};

/// Comparable view of one input vocabulary.
///
/// Built once per input; the graph itself is moved into the merged graph
/// right after, so the comparison loop only sees these.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub name: String,
    pub concepts: Vec<ComparableConcept>,
}

impl Vocabulary {
    pub fn prepare(
        graph: &VocabularyGraph,
        engine: &MatchEngine,
        label_index: &LabelIndex,
    ) -> Result<Self> {
        let labels = label_index.extract(graph)?;
        let config = engine.config();

        let hierarchy = if config.needs_hierarchy() {
            let hierarchy = Hierarchy::build(graph)?;
            log::debug!(
                "{}: {} concepts in hierarchy, {} links",
                graph.name(),
                hierarchy.concept_count(),
                hierarchy.link_count()
            );
            Some(hierarchy)
        } else {
            None
        };

        let concepts = labels
            .iter()
            .map(|(id, label)| {
                let mut concept = engine.prepare(id.clone(), label);
                if let Some(hierarchy) = &hierarchy {
                    if config.compare_parents {
                        concept.ancestors = hierarchy.ancestor_labels(id, &labels);
                    }
                    if config.compare_children {
                        concept.descendants = hierarchy.descendant_labels(id, &labels);
                    }
                }
                concept
            })
            .collect();

        Ok(Self {
            name: graph.name().to_string(),
            concepts,
        })
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// Drives the pivot-and-compare loop over all input vocabularies
#[derive(Debug)]
pub struct AlignmentOrchestrator {
    engine: MatchEngine,
    label_index: LabelIndex,
}

impl AlignmentOrchestrator {
    pub fn new(config: AlignConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            label_index: config.labels.label_index(),
            engine: MatchEngine::new(config.matching),
        })
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Parse every input file, then align them
    pub fn align_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
        format: Option<InputFormat>,
    ) -> Result<AlignmentOutcome> {
        if paths.len() < 2 {
            return Err(AlignError::TooFewVocabularies(paths.len()));
        }

        let graphs = paths
            .iter()
            .map(|path| parse_file(path.as_ref(), format))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.run(graphs)
    }

    /// Align the vocabularies and merge them into one graph.
    ///
    /// Each round takes the first pending vocabulary, in input order, as the
    /// pivot and compares it with every vocabulary still pending; the pivot
    /// is never compared with itself. Mapping triples point from the pivot
    /// concept to the other concept, so earlier inputs are subjects.
    pub fn run(&self, graphs: Vec<VocabularyGraph>) -> Result<AlignmentOutcome> {
        if graphs.len() < 2 {
            return Err(AlignError::TooFewVocabularies(graphs.len()));
        }

        let mut assembler = ResultAssembler::new();
        let mut pending = VecDeque::with_capacity(graphs.len());

        for graph in graphs {
            let vocabulary = Vocabulary::prepare(&graph, &self.engine, &self.label_index)?;
            log::info!("{}: {} labeled concepts", vocabulary.name, vocabulary.len());
            let triples = assembler.absorb(graph);
            log::debug!("{}: merged {} triples", vocabulary.name, triples);
            pending.push_back(vocabulary);
        }

        let mut round = 0;
        while pending.len() >= 2 {
            let Some(pivot) = pending.pop_front() else {
                break;
            };
            round += 1;
            log::info!(
                "Round {round}: comparing {} with {} remaining vocabularies",
                pivot.name,
                pending.len()
            );

            for other in &pending {
                let matches = self.compare(&pivot, other);
                let mut added = 0;
                for (i, j, category) in matches {
                    if assembler.emit(&pivot.concepts[i].id, &other.concepts[j].id, category) {
                        added += 1;
                    }
                }
                log::info!("{} x {}: {added} mappings", pivot.name, other.name);
            }
        }

        let outcome = assembler.finish();
        log::info!("Alignment finished: {} mappings", outcome.counters.total());
        Ok(outcome)
    }

    /// Classify the full cross product of two vocabularies.
    ///
    /// Returns (pivot index, other index, category) in pivot order.
    pub fn compare(&self, pivot: &Vocabulary, other: &Vocabulary) -> Vec<(usize, usize, Category)> {
        pivot
            .concepts
            .par_iter()
            .enumerate()
            .flat_map_iter(|(i, a)| {
                other
                    .concepts
                    .iter()
                    .enumerate()
                    .filter(move |(_, b)| a.id != b.id)
                    .filter_map(move |(j, b)| self.engine.classify(a, b).map(|c| (i, j, c)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LabelConfig, MatchConfig};
    use thesaurus_graph::parse_str;

    const SKOS: &str = "@prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n";

    fn vocab(name: &str, body: &str) -> VocabularyGraph {
        parse_str(&format!("{SKOS}{body}"), InputFormat::Turtle, name).unwrap()
    }

    fn orchestrator(matching: MatchConfig) -> AlignmentOrchestrator {
        AlignmentOrchestrator::new(AlignConfig {
            matching,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn rejects_single_vocabulary() {
        let err = orchestrator(MatchConfig::default())
            .run(vec![vocab("a", "<http://a/x> skos:prefLabel \"x\" .")])
            .unwrap_err();
        assert!(matches!(err, AlignError::TooFewVocabularies(1)));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = AlignConfig {
            labels: LabelConfig {
                language: Some(String::new()),
            },
            ..Default::default()
        };
        assert!(matches!(
            AlignmentOrchestrator::new(config),
            Err(AlignError::InvalidConfig(_))
        ));
    }

    #[test]
    fn prepare_fills_only_requested_context() {
        let graph = vocab(
            "a",
            r#"
            <http://a/cat> skos:prefLabel "Cat" ; skos:broader <http://a/mammal> ;
                skos:narrower <http://a/kitten> .
            <http://a/mammal> skos:prefLabel "Mammal" .
            <http://a/kitten> skos:prefLabel "Kitten" .
            "#,
        );
        let engine = MatchEngine::new(MatchConfig {
            compare_parents: true,
            ..Default::default()
        });
        let vocabulary = Vocabulary::prepare(&graph, &engine, &LabelIndex::new()).unwrap();
        let cat = vocabulary
            .concepts
            .iter()
            .find(|c| c.label == "cat")
            .unwrap();

        assert!(cat.ancestors.contains("mammal"));
        assert!(cat.descendants.is_empty());
    }

    #[test]
    fn pivot_is_subject_of_mapping() {
        let orchestrator = orchestrator(MatchConfig::default());
        let first = vocab("a", "<http://a/cat> skos:prefLabel \"cat\" .");
        let second = vocab("b", "<http://b/cat> skos:prefLabel \"Cat\" .");

        let vocabularies: Vec<_> = [&first, &second]
            .into_iter()
            .map(|g| Vocabulary::prepare(g, orchestrator.engine(), &LabelIndex::new()).unwrap())
            .collect();
        let matches = orchestrator.compare(&vocabularies[0], &vocabularies[1]);
        assert_eq!(matches, vec![(0, 0, Category::Equals)]);

        let outcome = orchestrator.run(vec![first, second]).unwrap();
        let mapping = outcome
            .merged
            .iter()
            .find(|t| t.predicate.as_str().ends_with("closeMatch"))
            .unwrap();
        assert_eq!(mapping.subject.to_string(), "<http://a/cat>");
        assert_eq!(mapping.object.to_string(), "<http://b/cat>");
        assert_eq!(outcome.counters.equals, 1);
    }

    #[test]
    fn shared_iri_is_not_a_pair() {
        let outcome = orchestrator(MatchConfig::default())
            .run(vec![
                vocab("a", "<http://shared/cat> skos:prefLabel \"cat\" ."),
                vocab("b", "<http://shared/cat> skos:prefLabel \"cat\" ."),
            ])
            .unwrap();
        assert_eq!(outcome.counters.total(), 0);
    }

    #[test]
    fn earlier_input_is_subject_in_every_round() {
        let outcome = orchestrator(MatchConfig::default())
            .run(vec![
                vocab("a", "<http://a/cat> skos:prefLabel \"cat\" ."),
                vocab("b", "<http://b/cat> skos:prefLabel \"cat\" ."),
                vocab("c", "<http://c/cat> skos:prefLabel \"cat\" ."),
            ])
            .unwrap();

        let mut pairs: Vec<(String, String)> = outcome
            .merged
            .iter()
            .filter(|t| t.predicate.as_str().ends_with("closeMatch"))
            .map(|t| (t.subject.to_string(), t.object.to_string()))
            .collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("<http://a/cat>".to_string(), "<http://b/cat>".to_string()),
                ("<http://a/cat>".to_string(), "<http://c/cat>".to_string()),
                ("<http://b/cat>".to_string(), "<http://c/cat>".to_string()),
            ]
        );
        assert_eq!(outcome.counters.equals, 3);
    }

    #[test]
    fn identical_only_ignores_other_heuristics() {
        let orchestrator = orchestrator(MatchConfig {
            identical_only: true,
            compare_children: true,
            compare_parents: true,
            term_signature: true,
            ..Default::default()
        });
        let outcome = orchestrator
            .run(vec![
                vocab("a", "<http://a/cat> skos:prefLabel \"cat\" .\n<http://a/dog> skos:prefLabel \"dog\" ."),
                vocab("b", "<http://b/cat> skos:prefLabel \"Cat\" .\n<http://b/dh> skos:prefLabel \"dog house\" ."),
            ])
            .unwrap();
        assert_eq!(outcome.counters.equals, 1);
        assert_eq!(outcome.counters.total(), 1);
    }
}

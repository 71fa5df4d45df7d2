//! # Thesaurus Align
//!
//! Pairwise alignment of SKOS vocabularies.
//!
//! Every concept of a pivot vocabulary is compared with every concept of the
//! remaining vocabularies through a fixed heuristic cascade. Matches become
//! mapping triples in one merged graph:
//!
//! | category     | predicate                |
//! |--------------|--------------------------|
//! | `equals`     | `skos:closeMatch`        |
//! | `substrings` | `skos:relatedMatch`      |
//! | `phrase`     | `skos:relatedMatch`      |
//! | `related`    | `skos:semanticRelation`  |
//!
//! Pairs involving a `skos:ConceptScheme` always get `exa:distantMatch`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use thesaurus_align::{AlignConfig, AlignmentOrchestrator};
//!
//! let orchestrator = AlignmentOrchestrator::new(AlignConfig::default())?;
//! let outcome = orchestrator.align_files(&["a.rdf", "b.rdf"], None)?;
//! for (category, count) in outcome.counters.iter() {
//!     println!("{count}  {category}  found");
//! }
//! # Ok::<(), thesaurus_align::AlignError>(())
//! ```

mod assembler;
mod cascade;
mod config;
mod error;
mod orchestrator;
mod report;

pub use assembler::{mapping_predicate, AlignmentOutcome, ResultAssembler};
pub use cascade::{
    is_phrase_match, is_same_term, is_substring, ComparableConcept, MatchEngine,
    ANCESTOR_THRESHOLD, DESCENDANT_THRESHOLD,
};
pub use config::{AlignConfig, LabelConfig, MatchConfig};
pub use error::{AlignError, Result};
pub use orchestrator::{AlignmentOrchestrator, Vocabulary};
pub use report::{Category, ReportingCounters};

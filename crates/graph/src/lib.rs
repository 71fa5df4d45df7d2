//! # Thesaurus Graph
//!
//! Vocabulary graphs and the structure the aligner reads out of them.
//!
//! ## Features
//!
//! - **Graph I/O** - parse RDF/XML, Turtle, N-Triples, N3 and quad formats;
//!   write xml, turtle, n3, nt, pretty-xml and trix
//! - **Label index** - concept -> case-folded `skos:prefLabel`
//! - **Hierarchy** - transitive `skos:broader` / `skos:narrower` closures
//! - **Merged graph** - union of all inputs plus inferred mapping triples
//!
//! ## Architecture
//!
//! ```text
//! thesaurus file
//!     │
//!     ├──> parse_file (oxrdfio) ──> VocabularyGraph
//!     │                                │
//!     │                                ├──> LabelIndex ──> LabelMap
//!     │                                ├──> Hierarchy (petgraph)
//!     │                                │      └─ ancestor / descendant labels
//!     │                                └──> MergedGraph::absorb
//!     │
//!     └──> MergedGraph + mapping triples ──> write_file
//! ```

mod error;
mod format;
mod hierarchy;
mod io;
mod labels;
mod store;
mod trix;
pub mod vocab;

pub use error::{ErrorKind, GraphError, Result};
pub use format::{InputFormat, OutputFormat};
pub use hierarchy::{Hierarchy, Relation};
pub use io::{parse_file, parse_reader, parse_str, write_file, write_to};
pub use labels::{LabelIndex, LabelMap};
pub use store::{ConceptId, MergedGraph, VocabularyGraph};

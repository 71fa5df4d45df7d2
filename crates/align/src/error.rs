use std::path::PathBuf;
use thesaurus_graph::{ErrorKind, GraphError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlignError>;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("Please specify at least TWO input files (got {0})")]
    TooFewVocabularies(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl AlignError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Input errors are reported before any output exists; graph access
    /// errors abort a run that already started reading triples.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Graph(err) => err.kind(),
            _ => ErrorKind::Input,
        }
    }
}

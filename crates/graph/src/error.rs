use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Coarse classification used to decide how a failure is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments, unreadable or unparseable input, unsupported format
    Input,

    /// Malformed triple data met while reading a loaded graph
    GraphAccess,
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed triple: {0}")]
    MalformedTriple(String),
}

impl GraphError {
    pub fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedTriple(msg.into())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Parse { .. } | Self::UnsupportedFormat(_) => ErrorKind::Input,
            Self::Write { .. } | Self::Serialization(_) | Self::MalformedTriple(_) => {
                ErrorKind::GraphAccess
            }
        }
    }
}

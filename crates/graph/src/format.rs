use crate::error::GraphError;
use oxrdfio::RdfFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Syntax of an input vocabulary file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Xml,
    Turtle,
    Nt,
    N3,
    Nquads,
    Trig,
}

impl InputFormat {
    /// Guess from the file extension; anything unknown is read as RDF/XML
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("ttl") => Self::Turtle,
            Some("nt") => Self::Nt,
            Some("n3") => Self::N3,
            Some("nq") => Self::Nquads,
            Some("trig") => Self::Trig,
            _ => Self::Xml,
        }
    }

    pub const fn rdf_format(self) -> RdfFormat {
        match self {
            Self::Xml => RdfFormat::RdfXml,
            Self::Turtle => RdfFormat::Turtle,
            Self::Nt => RdfFormat::NTriples,
            Self::N3 => RdfFormat::N3,
            Self::Nquads => RdfFormat::NQuads,
            Self::Trig => RdfFormat::TriG,
        }
    }
}

/// Syntax of the merged output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Xml,
    Turtle,
    N3,
    Nt,
    PrettyXml,
    Trix,
}

impl OutputFormat {
    pub const ALL: [Self; 6] = [
        Self::Xml,
        Self::Turtle,
        Self::N3,
        Self::Nt,
        Self::PrettyXml,
        Self::Trix,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Turtle => "turtle",
            Self::N3 => "n3",
            Self::Nt => "nt",
            Self::PrettyXml => "pretty-xml",
            Self::Trix => "trix",
        }
    }

    /// Serializer backing this format, `None` for TriX which is written in-crate
    pub(crate) const fn rdf_format(self) -> Option<RdfFormat> {
        match self {
            Self::Xml | Self::PrettyXml => Some(RdfFormat::RdfXml),
            // Turtle is a syntactic subset of N3
            Self::Turtle | Self::N3 => Some(RdfFormat::Turtle),
            Self::Nt => Some(RdfFormat::NTriples),
            Self::Trix => None,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Xml
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| GraphError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn input_format_follows_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.ttl")), InputFormat::Turtle);
        assert_eq!(InputFormat::from_path(Path::new("a.NT")), InputFormat::Nt);
        assert_eq!(InputFormat::from_path(Path::new("a.rdf")), InputFormat::Xml);
        assert_eq!(InputFormat::from_path(Path::new("thesaurus")), InputFormat::Xml);
    }

    #[test]
    fn output_format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn unknown_output_format_is_input_error() {
        let err = "json-ld".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, GraphError::UnsupportedFormat(ref f) if f == "json-ld"));
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}

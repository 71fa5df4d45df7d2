use crate::error::{GraphError, Result};
use crate::format::{InputFormat, OutputFormat};
use crate::store::{MergedGraph, VocabularyGraph};
use crate::trix;
use oxrdf::{GraphNameRef, Triple};
use oxrdfio::{RdfParser, RdfSerializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Parse one vocabulary file.
///
/// The format is guessed from the extension unless `format` is given.
pub fn parse_file(path: &Path, format: Option<InputFormat>) -> Result<VocabularyGraph> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let file = File::open(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Parsing {} as {:?}", path.display(), format);
    parse_reader(BufReader::new(file), format, &path.display().to_string())
}

/// Parse a vocabulary from any reader; `name` labels the graph in logs and errors.
///
/// Quad formats are flattened into one graph. Blank nodes get fresh ids so
/// graphs parsed separately never share one by accident.
pub fn parse_reader(reader: impl Read, format: InputFormat, name: &str) -> Result<VocabularyGraph> {
    let mut graph = VocabularyGraph::new(name);
    let parser = RdfParser::from_format(format.rdf_format()).rename_blank_nodes();

    for quad in parser.for_reader(reader) {
        let quad = quad.map_err(|e| GraphError::parse(name, e))?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }

    log::debug!("Parsed {}: {} triples", name, graph.len());
    Ok(graph)
}

pub fn parse_str(data: &str, format: InputFormat, name: &str) -> Result<VocabularyGraph> {
    parse_reader(data.as_bytes(), format, name)
}

/// Serialize the merged graph to `path`.
///
/// Writes to a temporary sibling first and renames it into place, so a
/// failed run never leaves a truncated output file behind.
pub fn write_file(graph: &MergedGraph, path: &Path, format: OutputFormat) -> Result<()> {
    let write_err = |source: std::io::Error| GraphError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = parent.join(format!(
        ".{}.tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("merged"),
        std::process::id()
    ));

    log::info!("Writing {} triples to {} ({})", graph.len(), path.display(), format);

    let result = File::create(&tmp)
        .map_err(write_err)
        .and_then(|file| write_to(graph, BufWriter::new(file), format))
        .and_then(|writer| {
            let file = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
            file.sync_all().map_err(write_err)
        })
        .and_then(|()| std::fs::rename(&tmp, path).map_err(write_err));

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

/// Serialize the merged graph into a writer, returning the writer when done
pub fn write_to<W: Write>(graph: &MergedGraph, writer: W, format: OutputFormat) -> Result<W> {
    let Some(rdf_format) = format.rdf_format() else {
        return trix::write(graph, writer);
    };

    let mut serializer = RdfSerializer::from_format(rdf_format);
    for (prefix, namespace) in graph.prefixes() {
        serializer = serializer
            .with_prefix(prefix, namespace)
            .map_err(|e| GraphError::Serialization(format!("prefix {prefix}: {e}")))?;
    }

    let mut out = serializer.for_writer(writer);
    for triple in graph.sorted_triples() {
        out.serialize_quad(triple.in_graph(GraphNameRef::DefaultGraph))
            .map_err(|e| GraphError::Serialization(e.to_string()))?;
    }
    out.finish()
        .map_err(|e| GraphError::Serialization(e.to_string()))
}

//! TriX (RDF triples in XML) output, which oxrdfio has no serializer for.

use crate::error::{GraphError, Result};
use crate::store::MergedGraph;
use crate::vocab::xsd;
use oxrdf::{SubjectRef, TermRef};
use std::io::Write;

const TRIX_NAMESPACE: &str = "http://www.w3.org/2004/03/trix/trix-1/";

pub(crate) fn write<W: Write>(graph: &MergedGraph, mut writer: W) -> Result<W> {
    write_document(graph, &mut writer).map_err(|e| GraphError::Serialization(e.to_string()))?;
    Ok(writer)
}

fn write_document<W: Write>(graph: &MergedGraph, out: &mut W) -> std::io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    writeln!(out, r#"<TriX xmlns="{TRIX_NAMESPACE}">"#)?;
    writeln!(out, "  <graph>")?;

    for triple in graph.sorted_triples() {
        writeln!(out, "    <triple>")?;
        match triple.subject {
            SubjectRef::NamedNode(node) => write_uri(out, node.as_str())?,
            SubjectRef::BlankNode(node) => write_id(out, node.as_str())?,
            #[allow(unreachable_patterns)]
            other => write_uri(out, &other.to_string())?,
        }
        write_uri(out, triple.predicate.as_str())?;
        write_term(out, triple.object)?;
        writeln!(out, "    </triple>")?;
    }

    writeln!(out, "  </graph>")?;
    writeln!(out, "</TriX>")?;
    out.flush()
}

fn write_term<W: Write>(out: &mut W, term: TermRef<'_>) -> std::io::Result<()> {
    match term {
        TermRef::NamedNode(node) => write_uri(out, node.as_str()),
        TermRef::BlankNode(node) => write_id(out, node.as_str()),
        TermRef::Literal(literal) => {
            let value = escape(literal.value());
            if let Some(lang) = literal.language() {
                writeln!(
                    out,
                    r#"      <plainLiteral xml:lang="{}">{value}</plainLiteral>"#,
                    escape(lang)
                )
            } else if literal.datatype() == xsd::STRING {
                writeln!(out, "      <plainLiteral>{value}</plainLiteral>")
            } else {
                writeln!(
                    out,
                    r#"      <typedLiteral datatype="{}">{value}</typedLiteral>"#,
                    escape(literal.datatype().as_str())
                )
            }
        }
        #[allow(unreachable_patterns)]
        other => write_uri(out, &other.to_string()),
    }
}

fn write_uri<W: Write>(out: &mut W, iri: &str) -> std::io::Result<()> {
    writeln!(out, "      <uri>{}</uri>", escape(iri))
}

fn write_id<W: Write>(out: &mut W, id: &str) -> std::io::Result<()> {
    writeln!(out, "      <id>{}</id>", escape(id))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

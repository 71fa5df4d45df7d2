//! Vocabulary IRIs used when reading thesauri and writing mappings.

use oxrdf::NamedNodeRef;

/// SKOS core vocabulary (http://www.w3.org/2004/02/skos/core#)
pub mod skos {
    use super::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2004/02/skos/core#";

    /// skos:prefLabel
    pub const PREF_LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");

    /// skos:broader
    pub const BROADER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#broader");

    /// skos:narrower
    pub const NARROWER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#narrower");

    /// skos:ConceptScheme
    pub const CONCEPT_SCHEME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#ConceptScheme");

    /// skos:closeMatch
    pub const CLOSE_MATCH: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#closeMatch");

    /// skos:relatedMatch
    pub const RELATED_MATCH: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#relatedMatch");

    /// skos:semanticRelation
    pub const SEMANTIC_RELATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#semanticRelation");
}

/// Local extension namespace for mappings SKOS has no predicate for
pub mod exa {
    use super::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.example.com/#";

    /// exa:distantMatch, used whenever a concept scheme takes part in a match
    pub const DISTANT_MATCH: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.example.com/#distantMatch");
}

/// RDF vocabulary
pub mod rdf {
    use super::NamedNodeRef;

    /// rdf:type
    pub const TYPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

/// OWL vocabulary
pub mod owl {
    use super::NamedNodeRef;

    /// owl:ObjectProperty
    pub const OBJECT_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
}

/// XSD vocabulary
pub mod xsd {
    use super::NamedNodeRef;

    /// xsd:string
    pub const STRING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
}

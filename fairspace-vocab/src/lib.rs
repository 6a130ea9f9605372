//! RDF Vocabulary Constants for Fairspace metadata
//!
//! This crate provides a centralized location for the IRIs the metadata
//! layer reads from vocabulary (SHACL shape) graphs and metadata graphs.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `jsonld` - JSON-LD keywords used in expanded documents
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `shacl` - SHACL vocabulary (http://www.w3.org/ns/shacl#)
//! - `dash` - DASH data shapes vocabulary (http://datashapes.org/dash#)
//! - `fs` - Fairspace ontology (https://fairspace.nl/ontology#)

/// JSON-LD keywords
///
/// Expanded JSON-LD nodes use these reserved keys next to full predicate IRIs.
pub mod jsonld {
    /// @id keyword (node identifier, or reference wrapper)
    pub const ID: &str = "@id";

    /// @type keyword (array of class IRIs on a node)
    pub const TYPE: &str = "@type";

    /// @value keyword (literal wrapper)
    pub const VALUE: &str = "@value";

    /// @list keyword (ordered container)
    pub const LIST: &str = "@list";

    /// Returns true for keys that describe node structure rather than a predicate.
    pub fn is_keyword(key: &str) -> bool {
        key.starts_with('@')
    }
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:time IRI
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";

    // ========================================================================
    // Datatype Family Helpers
    // ========================================================================

    /// Returns true for datatypes rendered as numbers
    #[inline]
    pub fn is_numeric(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            INTEGER | INT | LONG | DECIMAL | FLOAT | DOUBLE
        )
    }

    /// Returns true for date, time and dateTime
    #[inline]
    pub fn is_temporal(datatype_iri: &str) -> bool {
        matches!(datatype_iri, DATE_TIME | DATE | TIME)
    }
}

/// SHACL vocabulary constants
pub mod shacl {
    /// SHACL namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    // ========================================================================
    // Targeting and Structure
    // ========================================================================

    /// sh:targetClass IRI
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";

    /// sh:property IRI
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";

    /// sh:path IRI
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";

    /// sh:node IRI
    pub const NODE: &str = "http://www.w3.org/ns/shacl#node";

    // ========================================================================
    // Constraints
    // ========================================================================

    /// sh:minCount IRI
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";

    /// sh:maxCount IRI
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";

    /// sh:datatype IRI
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";

    /// sh:nodeKind IRI
    pub const NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";

    /// sh:class IRI
    pub const CLASS: &str = "http://www.w3.org/ns/shacl#class";

    /// sh:maxLength IRI
    pub const MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";

    /// sh:in IRI
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";

    // ========================================================================
    // Node Kind Values
    // ========================================================================

    /// sh:IRI - node kind for IRI references
    pub const IRI: &str = "http://www.w3.org/ns/shacl#IRI";

    /// sh:Literal - node kind for literals
    pub const LITERAL: &str = "http://www.w3.org/ns/shacl#Literal";

    // ========================================================================
    // Non-validating Properties
    // ========================================================================

    /// sh:name IRI
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";

    /// sh:description IRI
    pub const DESCRIPTION: &str = "http://www.w3.org/ns/shacl#description";
}

/// DASH data shapes vocabulary constants
pub mod dash {
    /// DASH namespace IRI
    pub const NS: &str = "http://datashapes.org/dash#";

    /// dash:ListShape - marks a property whose values form an rdf:List
    pub const LIST_SHAPE: &str = "http://datashapes.org/dash#ListShape";
}

/// Fairspace ontology constants
pub mod fs {
    /// Fairspace namespace IRI
    pub const NS: &str = "https://fairspace.nl/ontology#";

    /// fs:machineOnly - property is maintained by the system, not by users
    pub const MACHINE_ONLY: &str = "https://fairspace.nl/ontology#machineOnly";

    /// fs:showInCatalog - class shape is listed in the metadata catalog
    pub const SHOW_IN_CATALOG: &str = "https://fairspace.nl/ontology#showInCatalog";

    /// fs:fixedShape - existing properties of the shape cannot be edited
    pub const FIXED_SHAPE: &str = "https://fairspace.nl/ontology#fixedShape";

    /// fs:systemProperties - property shapes that cannot be removed from a fixed shape
    pub const SYSTEM_PROPERTIES: &str = "https://fairspace.nl/ontology#systemProperties";

    /// fs:Collection IRI
    pub const COLLECTION: &str = "https://fairspace.nl/ontology#Collection";

    /// fs:File IRI
    pub const FILE: &str = "https://fairspace.nl/ontology#File";

    /// fs:nil - object of a predicate whose values are to be removed
    pub const NIL: &str = "https://fairspace.nl/ontology#nil";

    /// fs:User IRI
    pub const USER: &str = "https://fairspace.nl/ontology#User";
}

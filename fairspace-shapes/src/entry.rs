//! Vocabulary entries
//!
//! A `VocabularyEntry` is one node of the vocabulary graph: either a class
//! shape (`sh:targetClass` + `sh:property` references) or a property shape
//! (`sh:path` + display and cardinality constraints). The entry keeps the raw
//! node and reads fields on demand with first-value semantics.

use crate::node::{self, JsonNode};
use fairspace_vocab::{dash, fs, shacl};
use serde_json::Value as JsonValue;

/// One node of the vocabulary graph
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    node: JsonNode,
}

impl VocabularyEntry {
    /// Wrap an expanded JSON-LD node
    pub fn new(node: JsonNode) -> Self {
        Self { node }
    }

    /// Subject IRI (or blank node id) of this entry
    pub fn id(&self) -> Option<&str> {
        node::node_id(&self.node)
    }

    // ========================================================================
    // Class shape fields
    // ========================================================================

    /// First `sh:targetClass`
    pub fn target_class(&self) -> Option<&str> {
        node::first_id(&self.node, shacl::TARGET_CLASS)
    }

    /// Every `sh:targetClass`, in document order
    pub fn target_classes(&self) -> Vec<&str> {
        node::ids(&self.node, shacl::TARGET_CLASS)
    }

    /// Ids of the referenced property shapes, in reference order
    pub fn property_refs(&self) -> Vec<&str> {
        node::ids(&self.node, shacl::PROPERTY)
    }

    /// Whether instances of this class are listed in the metadata catalog
    pub fn shows_in_catalog(&self) -> bool {
        node::first_bool(&self.node, fs::SHOW_IN_CATALOG).unwrap_or(false)
    }

    /// Whether the existing properties of this shape are locked
    pub fn is_fixed_shape(&self) -> bool {
        node::first_bool(&self.node, fs::FIXED_SHAPE).unwrap_or(false)
    }

    /// Property shapes that may never be removed from this shape
    pub fn system_properties(&self) -> Vec<&str> {
        node::ids(&self.node, fs::SYSTEM_PROPERTIES)
    }

    // ========================================================================
    // Property shape fields
    // ========================================================================

    /// `sh:path`: the predicate governed by this property shape
    pub fn path(&self) -> Option<&str> {
        node::first_id(&self.node, shacl::PATH)
    }

    pub fn name(&self) -> Option<&str> {
        node::first_str(&self.node, shacl::NAME)
    }

    pub fn description(&self) -> Option<&str> {
        node::first_str(&self.node, shacl::DESCRIPTION)
    }

    pub fn datatype(&self) -> Option<&str> {
        node::first_id(&self.node, shacl::DATATYPE)
    }

    /// `sh:class`: the class every value must be an instance of
    pub fn class_range(&self) -> Option<&str> {
        node::first_id(&self.node, shacl::CLASS)
    }

    /// `sh:node`: the shape every value must conform to
    pub fn node_shape(&self) -> Option<&str> {
        node::first_id(&self.node, shacl::NODE)
    }

    pub fn node_kind(&self) -> Option<&str> {
        node::first_id(&self.node, shacl::NODE_KIND)
    }

    pub fn min_count(&self) -> Option<u64> {
        node::first_u64(&self.node, shacl::MIN_COUNT)
    }

    pub fn max_count(&self) -> Option<u64> {
        node::first_u64(&self.node, shacl::MAX_COUNT)
    }

    pub fn max_length(&self) -> Option<u64> {
        node::first_u64(&self.node, shacl::MAX_LENGTH)
    }

    pub fn is_machine_only(&self) -> bool {
        node::first_bool(&self.node, fs::MACHINE_ONLY).unwrap_or(false)
    }

    /// Enumerated values of the first `sh:in`, verbatim
    pub fn allowed_values(&self) -> Option<&[JsonValue]> {
        node::first_list(&self.node, shacl::IN)
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// True for shapes declaring a target class
    pub fn is_class_shape(&self) -> bool {
        self.node.contains_key(shacl::TARGET_CLASS)
    }

    /// True for shapes governing a predicate
    pub fn is_property_shape(&self) -> bool {
        self.path().is_some()
    }

    /// True iff values form an ordered `rdf:List` (`sh:node dash:ListShape`)
    pub fn is_rdf_list(&self) -> bool {
        self.node_shape() == Some(dash::LIST_SHAPE)
    }

    /// True iff values may reference any resource (`sh:nodeKind sh:IRI`)
    pub fn is_generic_iri_resource(&self) -> bool {
        self.node_kind() == Some(shacl::IRI)
    }

    pub fn as_json(&self) -> &JsonNode {
        &self.node
    }
}

impl From<JsonNode> for VocabularyEntry {
    fn from(node: JsonNode) -> Self {
        Self::new(node)
    }
}

impl std::fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name(), self.id()) {
            (Some(name), _) => write!(f, "{name}"),
            (None, Some(id)) => write!(f, "{id}"),
            (None, None) => write!(f, "(unnamed shape)"),
        }
    }
}

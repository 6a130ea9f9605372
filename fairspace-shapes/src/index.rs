//! Vocabulary index
//!
//! Holds the vocabulary graph with lookup tables by subject id, target class
//! and property path. The index is immutable once built; every lookup takes
//! `&self`, so one instance can be shared across threads.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, trace, warn};

use crate::entry::VocabularyEntry;
use crate::error::{Result, ShapesError};
use crate::node::JsonNode;

/// Indexed vocabulary (SHACL shapes) graph
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    /// All entries, in vocabulary order
    entries: Arc<[VocabularyEntry]>,
    /// Index: `@id` -> first entry with that id
    by_id: HashMap<String, usize>,
    /// Index: target class -> first class shape targeting it
    by_target_class: HashMap<String, usize>,
    /// Index: path -> first named property shape for it
    ///
    /// Unnamed shapes for the same path only add constraints (typically a
    /// `sh:minCount`) and carry nothing to display.
    by_path: HashMap<String, usize>,
}

impl VocabularyIndex {
    /// Build an index from expanded vocabulary nodes
    pub fn new(nodes: Vec<JsonNode>) -> Self {
        let entries: Vec<VocabularyEntry> = nodes.into_iter().map(VocabularyEntry::new).collect();

        let mut by_id = HashMap::new();
        let mut by_target_class = HashMap::new();
        let mut by_path = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if let Some(id) = entry.id() {
                by_id.entry(id.to_string()).or_insert(idx);
            }
            for class in entry.target_classes() {
                by_target_class.entry(class.to_string()).or_insert(idx);
            }
            if let (Some(path), Some(_)) = (entry.path(), entry.name()) {
                by_path.entry(path.to_string()).or_insert(idx);
            }
        }

        debug!(
            entries = entries.len(),
            class_shapes = by_target_class.len(),
            property_shapes = by_path.len(),
            "Built vocabulary index"
        );

        Self {
            entries: entries.into(),
            by_id,
            by_target_class,
            by_path,
        }
    }

    /// Build an index from a vocabulary payload
    ///
    /// The payload must be a JSON array of expanded nodes. Anything else is a
    /// caller bug and fails; non-object items are skipped.
    pub fn from_json(vocabulary: &JsonValue) -> Result<Self> {
        let items = vocabulary
            .as_array()
            .ok_or_else(|| ShapesError::InvalidVocabulary {
                message: format!(
                    "expected an array of expanded JSON-LD nodes, found {}",
                    json_kind(vocabulary)
                ),
            })?;

        let nodes = items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| match item.as_object() {
                Some(node) => Some(node.clone()),
                None => {
                    warn!(position, kind = json_kind(item), "Skipping vocabulary item that is not a node");
                    None
                }
            })
            .collect();

        Ok(Self::new(nodes))
    }

    // ========================================================================
    // Shape resolution
    // ========================================================================

    /// Class shape targeting `type_iri` (first match in vocabulary order)
    pub fn determine_shape_for_type(&self, type_iri: &str) -> Option<&VocabularyEntry> {
        self.by_target_class
            .get(type_iri)
            .map(|&idx| &self.entries[idx])
    }

    /// Named property shape governing `path`, independent of any class
    pub fn determine_shape_for_property(&self, path: &str) -> Option<&VocabularyEntry> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    /// Property shapes referenced by a class shape, in reference order
    ///
    /// Repeated references are returned once; references to unknown ids are dropped.
    pub fn determine_property_shapes_for_node_shape(
        &self,
        shape: &VocabularyEntry,
    ) -> Vec<&VocabularyEntry> {
        let mut seen = HashSet::new();
        self.property_shape_indices(shape)
            .filter(|idx| seen.insert(*idx))
            .map(|idx| &self.entries[idx])
            .collect()
    }

    /// Property shapes applicable to instances of `type_iri`
    pub fn determine_property_shapes_for_type(&self, type_iri: &str) -> Vec<&VocabularyEntry> {
        match self.determine_shape_for_type(type_iri) {
            Some(shape) => self.determine_property_shapes_for_node_shape(shape),
            None => {
                trace!(type_iri, "No shape for type");
                Vec::new()
            }
        }
    }

    /// Union of the property shapes of every type, in first-seen order
    pub fn determine_property_shapes_for_types<I, S>(&self, type_iris: I) -> Vec<&VocabularyEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut shapes = Vec::new();

        for type_iri in type_iris {
            let Some(shape) = self.determine_shape_for_type(type_iri.as_ref()) else {
                trace!(type_iri = type_iri.as_ref(), "No shape for type");
                continue;
            };
            for idx in self.property_shape_indices(shape) {
                if seen.insert(idx) {
                    shapes.push(&self.entries[idx]);
                }
            }
        }

        shapes
    }

    fn property_shape_indices<'a>(
        &'a self,
        shape: &'a VocabularyEntry,
    ) -> impl Iterator<Item = usize> + 'a {
        shape.property_refs().into_iter().filter_map(move |id| {
            let idx = self.by_id.get(id).copied();
            if idx.is_none() {
                trace!(shape = shape.id(), property = id, "Dangling property shape reference");
            }
            idx
        })
    }

    // ========================================================================
    // Labels and catalog
    // ========================================================================

    /// Display name of a predicate, falling back to the IRI itself
    pub fn get_label_for_predicate(&self, predicate: &str) -> String {
        self.determine_shape_for_property(predicate)
            .and_then(VocabularyEntry::name)
            .unwrap_or(predicate)
            .to_string()
    }

    /// Class shapes listed in the metadata catalog, in vocabulary order
    pub fn catalog_classes(&self) -> Vec<&VocabularyEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.shows_in_catalog())
            .collect()
    }

    /// Alias of [`Self::catalog_classes`]
    pub fn fairspace_classes(&self) -> Vec<&VocabularyEntry> {
        self.catalog_classes()
    }

    /// Whether instances of `class_iri` are listed in the catalog
    pub fn is_catalog_class(&self, class_iri: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.shows_in_catalog() && entry.target_classes().contains(&class_iri))
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// See [`VocabularyEntry::is_rdf_list`]
    pub fn is_rdf_list(shape: &VocabularyEntry) -> bool {
        shape.is_rdf_list()
    }

    /// See [`VocabularyEntry::is_generic_iri_resource`]
    pub fn is_generic_iri_resource(shape: &VocabularyEntry) -> bool {
        shape.is_generic_iri_resource()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn get(&self, id: &str) -> Option<&VocabularyEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }
}

impl Default for VocabularyIndex {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<JsonNode> for VocabularyIndex {
    fn from_iter<T: IntoIterator<Item = JsonNode>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

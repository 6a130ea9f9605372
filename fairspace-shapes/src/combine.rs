//! Combining metadata with the vocabulary
//!
//! `combine` turns one subject of an expanded metadata graph into the ordered
//! property list shown to users: properties with values (sorted by label),
//! then the empty properties the subject's shapes allow (sorted by label),
//! then the subject's types.

use fairspace_vocab::{jsonld, xsd};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::entry::VocabularyEntry;
use crate::index::{json_kind, VocabularyIndex};
use crate::node::{self, JsonNode};
use crate::view::{PropertyView, ValueEntry, ValueKind, TYPE_KEY, TYPE_LABEL};

/// Max count assumed when a property shape declares none
pub const DEFAULT_MAX_COUNT: u64 = 1000;

/// Max length assumed when a property shape declares none
pub const DEFAULT_MAX_LENGTH: u64 = 1000;

/// String properties allowing more characters than this are edited multi-line
pub const MULTI_LINE_THRESHOLD: u64 = 255;

impl VocabularyIndex {
    /// Property list for one subject of an expanded metadata graph
    ///
    /// Without `subject` the graph must hold exactly one node. Ambiguous input,
    /// an unknown subject or a subject without an `@type` array yield an empty
    /// list.
    pub fn combine(&self, metadata: &[JsonValue], subject: Option<&str>) -> Vec<PropertyView> {
        let node = match subject {
            Some(subject) => metadata
                .iter()
                .filter_map(JsonValue::as_object)
                .find(|node| node::node_id(node) == Some(subject)),
            None if metadata.len() == 1 => metadata[0].as_object(),
            None => {
                warn!(
                    nodes = metadata.len(),
                    "Cannot combine metadata for a graph without exactly one node when no subject is given"
                );
                return Vec::new();
            }
        };

        let Some(node) = node else {
            warn!(subject, "Subject not found in metadata graph");
            return Vec::new();
        };

        let Some(types) = node::node_types(node) else {
            warn!(
                subject = node::node_id(node),
                "Cannot combine metadata without an @type array; is it in expanded form?"
            );
            return Vec::new();
        };

        let property_shapes = self.determine_property_shapes_for_types(&types);
        self.generate_properties_for_metadata(node, &types, &property_shapes, metadata)
    }

    /// [`Self::combine`] for a metadata payload of unchecked shape
    pub fn combine_json(&self, metadata: &JsonValue, subject: Option<&str>) -> Vec<PropertyView> {
        match metadata.as_array() {
            Some(graph) => self.combine(graph, subject),
            None => {
                warn!(
                    kind = json_kind(metadata),
                    "Metadata graph should be an array of expanded JSON-LD nodes"
                );
                Vec::new()
            }
        }
    }

    /// Property list for a new, still empty, instance of a class shape
    pub fn empty_linked_data(&self, shape: &VocabularyEntry) -> Vec<PropertyView> {
        let property_shapes = self.determine_property_shapes_for_node_shape(shape);
        let types = shape.target_classes();
        self.generate_properties_for_metadata(&JsonNode::new(), &types, &property_shapes, &[])
    }

    fn generate_properties_for_metadata(
        &self,
        node: &JsonNode,
        types: &[&str],
        property_shapes: &[&VocabularyEntry],
        graph: &[JsonValue],
    ) -> Vec<PropertyView> {
        let path_shapes = resolve_path_shapes(property_shapes);
        let mut properties = self.convert_metadata_into_property_list(node, &path_shapes, graph);
        properties.extend(self.determine_additional_empty_properties(node, &path_shapes));
        properties.push(self.generate_type_property(types));
        properties
    }

    fn convert_metadata_into_property_list(
        &self,
        node: &JsonNode,
        path_shapes: &[PathShape<'_>],
        graph: &[JsonValue],
    ) -> Vec<PropertyView> {
        let mut prefilled = Vec::new();

        for (predicate, raw) in node {
            if jsonld::is_keyword(predicate) {
                continue;
            }

            let Some(governing) = path_shapes
                .iter()
                .find(|p| p.path == predicate.as_str())
            else {
                debug!(predicate = %predicate, "Dropping predicate without a property shape for the subject's types");
                continue;
            };
            let shape = governing.shape;

            let Some(raw_values) = raw.as_array() else {
                warn!(
                    predicate = %predicate,
                    kind = json_kind(raw),
                    "Skipping predicate whose value is not an array; is the metadata in expanded form?"
                );
                continue;
            };

            let values = if shape.is_rdf_list() {
                let mut values = Vec::new();
                for entry in raw_values {
                    match entry.get(jsonld::LIST).and_then(JsonValue::as_array) {
                        Some(items) => values.extend(
                            items.iter().map(|item| Self::generate_value_entry(item, graph)),
                        ),
                        None => values.push(Self::generate_value_entry(entry, graph)),
                    }
                }
                values
            } else {
                let mut values: Vec<ValueEntry> = raw_values
                    .iter()
                    .map(|entry| Self::generate_value_entry(entry, graph))
                    .collect();
                values.sort_by(ValueEntry::display_order);
                values
            };

            prefilled.push(self.generate_path_entry(governing, values));
        }

        prefilled.sort_by(PropertyView::label_order);
        prefilled
    }

    fn determine_additional_empty_properties(
        &self,
        node: &JsonNode,
        path_shapes: &[PathShape<'_>],
    ) -> Vec<PropertyView> {
        let mut empty: Vec<PropertyView> = path_shapes
            .iter()
            .filter(|p| !node.contains_key(p.path))
            .map(|p| self.generate_path_entry(p, Vec::new()))
            .collect();

        empty.sort_by(PropertyView::label_order);
        empty
    }

    fn generate_path_entry(
        &self,
        governing: &PathShape<'_>,
        values: Vec<ValueEntry>,
    ) -> PropertyView {
        let mut view = self.generate_property_entry(governing.path, values, governing.shape);
        view.min_values_count = governing.min_count;
        view
    }

    fn generate_type_property(&self, types: &[&str]) -> PropertyView {
        let values = types
            .iter()
            .map(|&type_iri| {
                let shape = self.determine_shape_for_type(type_iri);
                ValueEntry {
                    id: Some(type_iri.to_string()),
                    value: None,
                    label: Some(shape.and_then(VocabularyEntry::name).unwrap_or(type_iri).to_string()),
                    comment: Some(
                        shape
                            .and_then(VocabularyEntry::description)
                            .unwrap_or(type_iri)
                            .to_string(),
                    ),
                }
            })
            .collect();

        PropertyView {
            key: TYPE_KEY.to_string(),
            label: Some(TYPE_LABEL.to_string()),
            values,
            allow_multiple: false,
            machine_only: true,
            value_kind: ValueKind::Reference,
            ..Default::default()
        }
    }

    /// Property view for `predicate` as governed by `shape`
    pub(crate) fn generate_property_entry(
        &self,
        predicate: &str,
        values: Vec<ValueEntry>,
        shape: &VocabularyEntry,
    ) -> PropertyView {
        let datatype = shape.datatype();
        let class_name = shape.class_range();
        // rdf:List values are unbounded whatever sh:maxCount says
        let declared_max_count = if shape.is_rdf_list() { None } else { shape.max_count() };
        let max_count = declared_max_count.unwrap_or(DEFAULT_MAX_COUNT);
        let max_length = shape.max_length().unwrap_or(DEFAULT_MAX_LENGTH);
        let allow_addition_of_entities = class_name.is_some_and(|class| self.is_catalog_class(class));

        PropertyView {
            key: predicate.to_string(),
            label: shape.name().map(str::to_string),
            values,
            datatype: datatype.map(str::to_string),
            class_name: class_name.map(str::to_string),
            description: shape.description().map(str::to_string),
            allow_multiple: max_count > 1,
            machine_only: shape.is_machine_only(),
            multi_line: datatype == Some(xsd::STRING) && max_length > MULTI_LINE_THRESHOLD,
            allowed_values: shape.allowed_values().map(<[JsonValue]>::to_vec),
            is_rdf_list: shape.is_rdf_list(),
            is_generic_iri_resource: shape.is_generic_iri_resource(),
            allow_addition_of_entities,
            min_values_count: shape.min_count(),
            max_values_count: declared_max_count,
            value_kind: ValueKind::for_shape(shape, allow_addition_of_entities),
        }
    }

    /// Display value for one value wrapper of a metadata node
    ///
    /// References are labelled from the referenced node when it is part of `graph`.
    pub fn generate_value_entry(entry: &JsonValue, graph: &[JsonValue]) -> ValueEntry {
        let id = entry.get(jsonld::ID).and_then(JsonValue::as_str);
        ValueEntry {
            id: id.map(str::to_string),
            value: entry.get(jsonld::VALUE).cloned(),
            label: id.and_then(|id| Self::lookup_label(id, graph)),
            comment: None,
        }
    }

    /// Label of the node with `@id == value_id` in `graph`
    ///
    /// Reads the node's own `rdfs:label` or `sh:name`; no further resolution.
    pub fn lookup_label(value_id: &str, graph: &[JsonValue]) -> Option<String> {
        graph
            .iter()
            .filter_map(JsonValue::as_object)
            .find(|node| node::node_id(node) == Some(value_id))
            .and_then(node::label)
            .map(str::to_string)
    }
}

/// The shape governing one predicate, plus the minCount that applies to it
#[derive(Debug, Clone, Copy)]
struct PathShape<'a> {
    path: &'a str,
    shape: &'a VocabularyEntry,
    min_count: Option<u64>,
}

/// One governing shape per path, in first-seen order
///
/// Among shapes sharing a path the first named shape supplies the display
/// fields. An unnamed shape only contributes its minCount when the governing
/// shape declares none. Between named shapes the first one wins outright.
fn resolve_path_shapes<'a>(property_shapes: &[&'a VocabularyEntry]) -> Vec<PathShape<'a>> {
    let mut resolved: Vec<PathShape<'a>> = Vec::new();

    for &shape in property_shapes {
        let Some(path) = shape.path() else {
            continue;
        };
        let named = shape.name().is_some();

        match resolved.iter_mut().find(|p| p.path == path) {
            None => resolved.push(PathShape {
                path,
                shape,
                min_count: shape.min_count(),
            }),
            Some(existing) => {
                let existing_named = existing.shape.name().is_some();
                if named && !existing_named {
                    existing.min_count = shape.min_count().or(existing.min_count);
                    existing.shape = shape;
                } else if !named {
                    existing.min_count = existing.min_count.or(shape.min_count());
                }
            }
        }
    }

    resolved
}

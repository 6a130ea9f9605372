//! Converting edited values back into expanded JSON-LD
//!
//! The inverse of [`VocabularyIndex::combine`] for a single predicate: the
//! values a user entered for one property become a metadata node fragment
//! that can be sent back to the metadata store.

use fairspace_vocab::{fs, jsonld};
use serde_json::{json, Value as JsonValue};
use tracing::trace;

use crate::index::VocabularyIndex;
use crate::node::JsonNode;
use crate::view::ValueEntry;

impl VocabularyIndex {
    /// Expanded JSON-LD node holding `values` for `predicate` on `subject`
    ///
    /// Values without an id and without a non-empty literal are dropped. When
    /// none remain the predicate points at `fs:nil`, which marks it for
    /// removal. rdf:List properties wrap their values in a single `@list`;
    /// other literals carry the property shape's `sh:datatype` as `@type`.
    ///
    /// Returns `None` when `subject` or `predicate` is empty.
    pub fn to_json_ld(
        &self,
        subject: &str,
        predicate: &str,
        values: &[ValueEntry],
    ) -> Option<JsonNode> {
        if subject.is_empty() || predicate.is_empty() {
            return None;
        }

        let valid: Vec<&ValueEntry> = values.iter().filter(|entry| is_valid_value(entry)).collect();

        let object = if valid.is_empty() {
            trace!(subject, predicate, "No values left; marking predicate for removal");
            json!([{ (jsonld::ID): fs::NIL }])
        } else {
            let shape = self.determine_shape_for_property(predicate);
            if shape.is_some_and(|shape| shape.is_rdf_list()) {
                let items: Vec<JsonValue> = valid
                    .iter()
                    .map(|entry| JsonValue::Object(value_wrapper(entry, None)))
                    .collect();
                json!([{ (jsonld::LIST): items }])
            } else {
                let datatype = shape.and_then(|shape| shape.datatype());
                JsonValue::Array(
                    valid
                        .iter()
                        .map(|entry| JsonValue::Object(value_wrapper(entry, datatype)))
                        .collect(),
                )
            }
        };

        let mut node = JsonNode::new();
        node.insert(jsonld::ID.to_string(), JsonValue::String(subject.to_string()));
        node.insert(predicate.to_string(), object);
        Some(node)
    }
}

/// A value counts when it references a node or holds a non-empty literal
///
/// `0` and `false` are values; `null` and the empty string are not.
fn is_valid_value(entry: &ValueEntry) -> bool {
    entry.id.as_deref().is_some_and(|id| !id.is_empty()) || entry.value.as_ref().is_some_and(is_non_empty)
}

fn is_non_empty(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn value_wrapper(entry: &ValueEntry, datatype: Option<&str>) -> JsonNode {
    let mut wrapper = JsonNode::new();
    if let Some(id) = entry.id.as_deref().filter(|id| !id.is_empty()) {
        wrapper.insert(jsonld::ID.to_string(), JsonValue::String(id.to_string()));
    }
    if let Some(value) = entry.value.as_ref().filter(|value| is_non_empty(value)) {
        wrapper.insert(jsonld::VALUE.to_string(), value.clone());
        if let Some(datatype) = datatype {
            wrapper.insert(jsonld::TYPE.to_string(), JsonValue::String(datatype.to_string()));
        }
    }
    wrapper
}

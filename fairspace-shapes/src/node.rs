//! Accessors for expanded JSON-LD nodes
//!
//! In expanded form every predicate maps to an array of wrappers:
//! `{"@id": ...}` for references, `{"@value": ...}` for literals and
//! `{"@list": [...]}` for ordered containers. Vocabulary conventions only
//! ever look at the first wrapper of a predicate, so most helpers here do too.

use fairspace_vocab::{jsonld, rdfs, shacl};
use serde_json::{Map, Value as JsonValue};

/// One node of an expanded JSON-LD graph
pub type JsonNode = Map<String, JsonValue>;

/// The `@id` of a node
pub fn node_id(node: &JsonNode) -> Option<&str> {
    node.get(jsonld::ID).and_then(JsonValue::as_str)
}

/// The `@type` IRIs of a node
///
/// Returns `None` when `@type` is absent or not an array, which means the
/// node is not in expanded form.
pub fn node_types(node: &JsonNode) -> Option<Vec<&str>> {
    node.get(jsonld::TYPE)?
        .as_array()
        .map(|types| types.iter().filter_map(JsonValue::as_str).collect())
}

fn first_wrapper<'a>(node: &'a JsonNode, predicate: &str) -> Option<&'a JsonNode> {
    node.get(predicate)?.as_array()?.first()?.as_object()
}

/// `@id` of the first value of `predicate`
pub fn first_id<'a>(node: &'a JsonNode, predicate: &str) -> Option<&'a str> {
    first_wrapper(node, predicate)?
        .get(jsonld::ID)?
        .as_str()
}

/// `@value` of the first value of `predicate`
pub fn first_value<'a>(node: &'a JsonNode, predicate: &str) -> Option<&'a JsonValue> {
    first_wrapper(node, predicate)?.get(jsonld::VALUE)
}

/// First literal of `predicate` as a string
pub fn first_str<'a>(node: &'a JsonNode, predicate: &str) -> Option<&'a str> {
    first_value(node, predicate)?.as_str()
}

/// First literal of `predicate` as a boolean (`true`/`false` strings accepted)
pub fn first_bool(node: &JsonNode, predicate: &str) -> Option<bool> {
    match first_value(node, predicate)? {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First literal of `predicate` as a non-negative integer (numeric strings accepted)
pub fn first_u64(node: &JsonNode, predicate: &str) -> Option<u64> {
    match first_value(node, predicate)? {
        JsonValue::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Contents of the `@list` container in the first value of `predicate`
pub fn first_list<'a>(node: &'a JsonNode, predicate: &str) -> Option<&'a [JsonValue]> {
    first_wrapper(node, predicate)?
        .get(jsonld::LIST)?
        .as_array()
        .map(Vec::as_slice)
}

/// `@id` of every value of `predicate`, in document order
pub fn ids<'a>(node: &'a JsonNode, predicate: &str) -> Vec<&'a str> {
    node.get(predicate)
        .and_then(JsonValue::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.get(jsonld::ID).and_then(JsonValue::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Human label of a node: `rdfs:label`, falling back to `sh:name`
pub fn label(node: &JsonNode) -> Option<&str> {
    first_str(node, rdfs::LABEL).or_else(|| first_str(node, shacl::NAME))
}

//! Display-ready property views
//!
//! `PropertyView` is the output record of [`crate::VocabularyIndex::combine`]:
//! one predicate of a subject with its values and the display metadata derived
//! from the governing property shape.

use std::cmp::Ordering;

use crate::entry::VocabularyEntry;
use fairspace_vocab::xsd;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Key of the synthesized type property
pub const TYPE_KEY: &str = "@type";

/// Label of the synthesized type property
pub const TYPE_LABEL: &str = "Type";

/// How the values of a property are edited and displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    /// Free text
    #[default]
    LiteralString,
    /// Numeric literal (xsd:integer, xsd:decimal, ...)
    LiteralNumber,
    /// Date, time or dateTime literal
    LiteralDate,
    LiteralBoolean,
    /// Reference to an existing resource
    Reference,
    /// Reference to a resource that may be created in place
    ReferenceWithCreation,
}

impl ValueKind {
    /// Classify a property shape
    ///
    /// `allow_creation` is only honoured for reference-valued shapes.
    pub fn for_shape(shape: &VocabularyEntry, allow_creation: bool) -> Self {
        if shape.class_range().is_some() || shape.is_generic_iri_resource() {
            return if allow_creation {
                ValueKind::ReferenceWithCreation
            } else {
                ValueKind::Reference
            };
        }

        match shape.datatype() {
            Some(dt) if xsd::is_numeric(dt) => ValueKind::LiteralNumber,
            Some(dt) if xsd::is_temporal(dt) => ValueKind::LiteralDate,
            Some(xsd::BOOLEAN) => ValueKind::LiteralBoolean,
            _ => ValueKind::LiteralString,
        }
    }
}

/// One displayed value of a property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueEntry {
    /// Referenced resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Literal value, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
    /// Human label of the referenced resource, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ValueEntry {
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn literal(value: impl Into<JsonValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Display order of set-valued properties: label, then id, then literal value
    ///
    /// Missing components sort after present ones.
    pub fn display_order(&self, other: &Self) -> Ordering {
        cmp_present_first(self.label.as_deref(), other.label.as_deref(), Ord::cmp)
            .then_with(|| cmp_present_first(self.id.as_deref(), other.id.as_deref(), Ord::cmp))
            .then_with(|| {
                cmp_present_first(self.value.as_ref(), other.value.as_ref(), compare_literals)
            })
    }
}

/// One predicate of a subject, ready for display
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    /// Predicate IRI, or `@type`
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub values: Vec<ValueEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    /// Class every value must be an instance of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub allow_multiple: bool,
    pub machine_only: bool,
    pub multi_line: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<JsonValue>>,
    pub is_rdf_list: bool,
    pub is_generic_iri_resource: bool,
    pub allow_addition_of_entities: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values_count: Option<u64>,
    pub value_kind: ValueKind,
}

impl PropertyView {
    pub fn is_type(&self) -> bool {
        self.key == TYPE_KEY
    }

    /// Label shown to users, falling back to the key
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    /// Property list order: ascending by label, unlabelled properties last
    pub fn label_order(&self, other: &Self) -> Ordering {
        cmp_present_first(self.label.as_deref(), other.label.as_deref(), Ord::cmp)
    }
}

fn cmp_present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total order over literal values
///
/// Numbers compare numerically, strings and booleans naturally. Values of
/// different JSON types order by type: null, boolean, number, string, array, object.
fn compare_literals(a: &&JsonValue, b: &&JsonValue) -> Ordering {
    match (*a, *b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (JsonValue::String(x), JsonValue::String(y)) => x.cmp(y),
        (JsonValue::Bool(x), JsonValue::Bool(y)) => x.cmp(y),
        (x, y) => type_rank(x)
            .cmp(&type_rank(y))
            .then_with(|| x.to_string().cmp(&y.to_string())),
    }
}

fn type_rank(value: &JsonValue) -> u8 {
    match value {
        JsonValue::Null => 0,
        JsonValue::Bool(_) => 1,
        JsonValue::Number(_) => 2,
        JsonValue::String(_) => 3,
        JsonValue::Array(_) => 4,
        JsonValue::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairspace_vocab::{fs, shacl};
    use serde_json::json;

    fn shape(value: JsonValue) -> VocabularyEntry {
        VocabularyEntry::new(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_value_kind_for_literals() {
        let number = shape(json!({(shacl::DATATYPE): [{"@id": xsd::DECIMAL}]}));
        let date = shape(json!({(shacl::DATATYPE): [{"@id": xsd::DATE_TIME}]}));
        let boolean = shape(json!({(shacl::DATATYPE): [{"@id": xsd::BOOLEAN}]}));
        let untyped = shape(json!({}));

        assert_eq!(ValueKind::for_shape(&number, false), ValueKind::LiteralNumber);
        assert_eq!(ValueKind::for_shape(&date, false), ValueKind::LiteralDate);
        assert_eq!(ValueKind::for_shape(&boolean, false), ValueKind::LiteralBoolean);
        assert_eq!(ValueKind::for_shape(&untyped, true), ValueKind::LiteralString);
    }

    #[test]
    fn test_value_kind_for_references() {
        let class_range = shape(json!({(shacl::CLASS): [{"@id": fs::FILE}]}));
        let generic = shape(json!({(shacl::NODE_KIND): [{"@id": shacl::IRI}]}));

        assert_eq!(ValueKind::for_shape(&class_range, false), ValueKind::Reference);
        assert_eq!(
            ValueKind::for_shape(&class_range, true),
            ValueKind::ReferenceWithCreation
        );
        assert_eq!(ValueKind::for_shape(&generic, false), ValueKind::Reference);
    }

    #[test]
    fn test_display_order_tie_breaks() {
        let mut values = vec![
            ValueEntry::literal("b"),
            ValueEntry {
                label: Some("Zeta".into()),
                ..ValueEntry::reference("http://example.com/1")
            },
            ValueEntry::reference("http://example.com/3"),
            ValueEntry::literal("a"),
            ValueEntry {
                label: Some("Alpha".into()),
                ..ValueEntry::reference("http://example.com/2")
            },
            ValueEntry::reference("http://example.com/0"),
        ];
        values.sort_by(ValueEntry::display_order);

        let keys: Vec<_> = values
            .iter()
            .map(|v| {
                v.label
                    .clone()
                    .or_else(|| v.id.clone())
                    .or_else(|| v.value.as_ref().and_then(|v| v.as_str()).map(String::from))
                    .unwrap()
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                "Alpha",
                "Zeta",
                "http://example.com/0",
                "http://example.com/3",
                "a",
                "b"
            ]
        );
    }

    #[test]
    fn test_numeric_literals_compare_numerically() {
        let mut values = vec![
            ValueEntry::literal(10),
            ValueEntry::literal(9),
            ValueEntry::literal(2.5),
        ];
        values.sort_by(ValueEntry::display_order);

        assert_eq!(
            values.iter().map(|v| v.value.clone().unwrap()).collect::<Vec<_>>(),
            vec![json!(2.5), json!(9), json!(10)]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let view = PropertyView {
            key: "http://www.w3.org/2000/01/rdf-schema#label".into(),
            label: Some("Label".into()),
            values: vec![ValueEntry::literal("My Collection")],
            allow_multiple: false,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "key": "http://www.w3.org/2000/01/rdf-schema#label",
                "label": "Label",
                "values": [{"value": "My Collection"}],
                "allowMultiple": false,
                "machineOnly": false,
                "multiLine": false,
                "isRdfList": false,
                "isGenericIriResource": false,
                "allowAdditionOfEntities": false,
                "valueKind": "literalString"
            })
        );
    }

    #[test]
    fn test_label_order_puts_unlabelled_last() {
        let labelled = PropertyView {
            label: Some("Zeta".into()),
            ..Default::default()
        };
        let unlabelled = PropertyView::default();

        assert_eq!(labelled.label_order(&unlabelled), Ordering::Less);
        assert_eq!(unlabelled.display_label(), "");
    }
}

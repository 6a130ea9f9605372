//! Editing info for shapes shown in the vocabulary editor
//!
//! When a shape is itself the subject being edited, `fs:fixedShape` locks its
//! existing properties. New property shapes may still be attached through
//! `sh:property`, except that the ids listed in `fs:systemProperties` may never
//! be removed.

use fairspace_vocab::shacl;
use serde::Serialize;

use crate::entry::VocabularyEntry;
use crate::view::PropertyView;

/// Editing constraints of the subject being displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingOptions {
    /// Whether the user may edit the subject at all
    pub editable: bool,
    pub is_fixed: bool,
    /// Property shape ids that cannot be removed from a fixed shape
    pub system_properties: Vec<String>,
}

impl EditingOptions {
    /// Options for editing `shape`, given the user's own edit permission
    pub fn for_shape(shape: &VocabularyEntry, editable: bool) -> Self {
        Self {
            editable,
            is_fixed: shape.is_fixed_shape(),
            system_properties: shape
                .system_properties()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A property view annotated with its edit permission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableProperty {
    #[serde(flatten)]
    pub property: PropertyView,
    pub editable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_properties: Vec<String>,
}

/// Annotate each property with whether it may be edited
pub fn extend_with_editing_info(
    properties: Vec<PropertyView>,
    options: &EditingOptions,
) -> Vec<EditableProperty> {
    properties
        .into_iter()
        .map(|property| {
            if options.is_fixed && property.key == shacl::PROPERTY {
                EditableProperty {
                    property,
                    editable: options.editable,
                    system_properties: options.system_properties.clone(),
                }
            } else {
                EditableProperty {
                    property,
                    editable: options.editable && !options.is_fixed,
                    system_properties: Vec::new(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairspace_vocab::{fs, rdfs};
    use serde_json::json;

    fn properties() -> Vec<PropertyView> {
        [rdfs::LABEL, shacl::PROPERTY]
            .into_iter()
            .map(|key| PropertyView {
                key: key.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_regular_shape_follows_permission() {
        let options = EditingOptions {
            editable: true,
            ..Default::default()
        };
        let result = extend_with_editing_info(properties(), &options);
        assert!(result.iter().all(|p| p.editable));

        let read_only = extend_with_editing_info(properties(), &EditingOptions::default());
        assert!(read_only.iter().all(|p| !p.editable));
    }

    #[test]
    fn test_fixed_shape_only_allows_new_properties() {
        let shape = VocabularyEntry::new(
            json!({
                "@id": "http://example.com/CollectionShape",
                (fs::FIXED_SHAPE): [{"@value": true}],
                (fs::SYSTEM_PROPERTIES): [{"@id": "http://example.com/labelShape"}]
            })
            .as_object()
            .cloned()
            .unwrap(),
        );
        let options = EditingOptions::for_shape(&shape, true);
        let result = extend_with_editing_info(properties(), &options);

        assert!(!result[0].editable);
        assert!(result[0].system_properties.is_empty());
        assert!(result[1].editable);
        assert_eq!(
            result[1].system_properties,
            vec!["http://example.com/labelShape".to_string()]
        );
    }

    #[test]
    fn test_flattened_serialization() {
        let options = EditingOptions {
            editable: true,
            ..Default::default()
        };
        let result = extend_with_editing_info(properties(), &options);
        let json = serde_json::to_value(&result[0]).unwrap();

        assert_eq!(json["key"], json!(rdfs::LABEL));
        assert_eq!(json["editable"], json!(true));
        assert!(json.get("systemProperties").is_none());
    }
}

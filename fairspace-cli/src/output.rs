use crate::error::CliResult;
use clap::ValueEnum;
use comfy_table::{ContentArrangement, Table};
use fairspace_shapes::{EditableProperty, PropertyView, ValueEntry, VocabularyEntry};
use serde::{Deserialize, Serialize};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn new_table(header: impl Into<comfy_table::Row>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Short human rendering of one value.
fn display_value(value: &ValueEntry) -> String {
    match (&value.label, &value.id, &value.value) {
        (Some(label), Some(id), _) if label != id => format!("{label} <{id}>"),
        (_, Some(id), _) => id.clone(),
        (_, None, Some(serde_json::Value::String(s))) => s.clone(),
        (_, None, Some(other)) => other.to_string(),
        (_, None, None) => String::new(),
    }
}

fn property_cells(property: &PropertyView) -> Vec<String> {
    let mut flags = Vec::new();
    if property.allow_multiple {
        flags.push("multiple");
    }
    if property.machine_only {
        flags.push("machine-only");
    }
    if property.is_rdf_list {
        flags.push("list");
    }

    vec![
        property.display_label().to_string(),
        property.key.clone(),
        property
            .values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join("\n"),
        format!("{:?}", property.value_kind),
        flags.join(", "),
    ]
}

const PROPERTY_HEADER: [&str; 5] = ["LABEL", "KEY", "VALUES", "KIND", "FLAGS"];

/// Format a property list.
pub fn format_properties(properties: &[PropertyView], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(properties),
        OutputFormat::Table => {
            if properties.is_empty() {
                return Ok("(no properties)".to_string());
            }
            let mut table = new_table(PROPERTY_HEADER);
            for property in properties {
                table.add_row(property_cells(property));
            }
            Ok(table.to_string())
        }
    }
}

/// Format a property list annotated with editing info.
pub fn format_editable_properties(
    properties: &[EditableProperty],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(properties),
        OutputFormat::Table => {
            if properties.is_empty() {
                return Ok("(no properties)".to_string());
            }
            let mut table = new_table(PROPERTY_HEADER.into_iter().chain(["EDITABLE"]));
            for editable in properties {
                let mut cells = property_cells(&editable.property);
                cells.push(if editable.editable { "yes" } else { "no" }.to_string());
                table.add_row(cells);
            }
            Ok(table.to_string())
        }
    }
}

/// Format vocabulary entries (shapes).
pub fn format_entries(entries: &[&VocabularyEntry], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let nodes: Vec<_> = entries.iter().map(|entry| entry.as_json()).collect();
            to_json(&nodes)
        }
        OutputFormat::Table => {
            if entries.is_empty() {
                return Ok("(no shapes)".to_string());
            }
            let mut table = new_table(["ID", "NAME", "TARGET CLASS / PATH", "DESCRIPTION"]);
            for entry in entries {
                table.add_row(vec![
                    entry.id().unwrap_or_default().to_string(),
                    entry.name().unwrap_or_default().to_string(),
                    entry
                        .target_class()
                        .or_else(|| entry.path())
                        .unwrap_or_default()
                        .to_string(),
                    entry.description().unwrap_or_default().to_string(),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

/// Format a single label.
pub fn format_label(label: &str, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(label),
        OutputFormat::Table => Ok(label.to_string()),
    }
}

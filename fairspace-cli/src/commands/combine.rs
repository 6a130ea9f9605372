use crate::error::{CliError, CliResult};
use crate::input::{self, InputSource};
use crate::output::{self, OutputFormat};
use fairspace_shapes::{
    extend_with_editing_info, node, EditingOptions, VocabularyEntry, VocabularyIndex,
};

/// How the vocabulary editor may change the subject.
pub enum Editing {
    Off,
    On { editable: bool },
}

pub fn run(
    vocabulary: &VocabularyIndex,
    metadata: &InputSource,
    subject: Option<&str>,
    editing: Editing,
    format: OutputFormat,
) -> CliResult<()> {
    let graph = input::read_json(metadata)?;
    if !graph.is_array() {
        return Err(CliError::Input(format!(
            "{metadata} is not an expanded JSON-LD graph (expected an array)"
        )));
    }

    let properties = vocabulary.combine_json(&graph, subject);

    let rendered = match editing {
        Editing::Off => output::format_properties(&properties, format)?,
        Editing::On { editable } => {
            let options = subject_shape(&graph, subject)
                .map(|shape| EditingOptions::for_shape(&shape, editable))
                .unwrap_or(EditingOptions {
                    editable,
                    ..Default::default()
                });
            let annotated = extend_with_editing_info(properties, &options);
            output::format_editable_properties(&annotated, format)?
        }
    };

    println!("{rendered}");
    Ok(())
}

/// The subject node itself, read as a shape.
fn subject_shape(graph: &serde_json::Value, subject: Option<&str>) -> Option<VocabularyEntry> {
    let nodes = graph.as_array()?;
    let found = match subject {
        Some(subject) => nodes
            .iter()
            .filter_map(serde_json::Value::as_object)
            .find(|n| node::node_id(n) == Some(subject)),
        None if nodes.len() == 1 => nodes[0].as_object(),
        None => None,
    };
    found.cloned().map(VocabularyEntry::new)
}

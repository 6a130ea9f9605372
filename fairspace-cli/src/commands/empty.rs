use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use fairspace_shapes::VocabularyIndex;

pub fn run(vocabulary: &VocabularyIndex, type_iri: &str, format: OutputFormat) -> CliResult<()> {
    let shape = vocabulary
        .determine_shape_for_type(type_iri)
        .ok_or_else(|| CliError::NotFound(format!("no shape targets class '{type_iri}'")))?;

    let properties = vocabulary.empty_linked_data(shape);
    println!("{}", output::format_properties(&properties, format)?);
    Ok(())
}

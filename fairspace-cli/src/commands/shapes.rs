use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use fairspace_shapes::VocabularyIndex;

pub fn run(vocabulary: &VocabularyIndex, types: &[String], format: OutputFormat) -> CliResult<()> {
    let shapes = vocabulary.determine_property_shapes_for_types(types);
    println!("{}", output::format_entries(&shapes, format)?);
    Ok(())
}

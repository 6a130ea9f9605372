use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use fairspace_shapes::VocabularyIndex;

pub fn run(vocabulary: &VocabularyIndex, format: OutputFormat) -> CliResult<()> {
    let classes = vocabulary.catalog_classes();
    println!("{}", output::format_entries(&classes, format)?);
    Ok(())
}

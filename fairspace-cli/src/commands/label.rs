use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use fairspace_shapes::VocabularyIndex;

pub fn run(vocabulary: &VocabularyIndex, predicate: &str, format: OutputFormat) -> CliResult<()> {
    let label = vocabulary.get_label_for_predicate(predicate);
    println!("{}", output::format_label(&label, format)?);
    Ok(())
}

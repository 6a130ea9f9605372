pub mod classes;
pub mod combine;
pub mod empty;
pub mod label;
pub mod shapes;

use crate::error::CliResult;
use crate::input::{self, InputSource};
use fairspace_shapes::VocabularyIndex;

/// Read and index the vocabulary.
pub fn load_vocabulary(source: &InputSource) -> CliResult<VocabularyIndex> {
    let json = input::read_json(source)?;
    let index = VocabularyIndex::from_json(&json)?;
    tracing::info!(source = %source, entries = index.len(), "Loaded vocabulary");
    Ok(index)
}

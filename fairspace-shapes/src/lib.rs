//! SHACL-driven property views for Fairspace metadata
//!
//! This crate combines an expanded JSON-LD metadata graph with the vocabulary
//! (a graph of SHACL shapes) into the ordered, display-ready property list that
//! metadata forms and catalog pages render.
//!
//! # Overview
//!
//! Combining works by:
//! 1. Indexing the vocabulary by subject id, target class and property path
//! 2. Resolving the property shapes of every `@type` of the subject
//! 3. Turning each predicate of the subject into a `PropertyView`, dropping
//!    predicates no applicable shape governs
//! 4. Adding an empty `PropertyView` for every applicable shape without values
//! 5. Appending the `@type` view
//!
//! Properties with values come first, then empty ones, each block sorted by
//! label. Values of ordered-list properties keep their document order; all
//! other values are sorted by label, id and literal value.
//!
//! `to_json_ld` goes the other way for a single predicate, turning edited
//! values back into an expanded JSON-LD fragment.
//!
//! # Example
//!
//! ```ignore
//! use fairspace_shapes::VocabularyIndex;
//!
//! let vocabulary = VocabularyIndex::from_json(&vocabulary_json)?;
//! let properties = vocabulary.combine(&metadata_graph, Some("http://example.com/collections/1"));
//!
//! for property in &properties {
//!     println!("{}: {} value(s)", property.display_label(), property.values.len());
//! }
//! ```

pub mod combine;
pub mod convert;
pub mod editing;
pub mod entry;
pub mod error;
pub mod index;
pub mod node;
pub mod view;

pub use combine::{DEFAULT_MAX_COUNT, DEFAULT_MAX_LENGTH, MULTI_LINE_THRESHOLD};
pub use editing::{extend_with_editing_info, EditableProperty, EditingOptions};
pub use entry::VocabularyEntry;
pub use error::{Result, ShapesError};
pub use index::VocabularyIndex;
pub use node::JsonNode;
pub use view::{PropertyView, ValueEntry, ValueKind, TYPE_KEY, TYPE_LABEL};

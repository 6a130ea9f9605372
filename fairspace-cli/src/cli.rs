use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fairspace",
    about = "Fairspace metadata shapes CLI",
    long_about = "Combine expanded JSON-LD metadata with a SHACL vocabulary into display-ready property lists",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vocabulary file (expanded JSON-LD); `-` reads stdin
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    /// Output format (defaults to the configured format, else json)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file or directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Combine a subject's metadata with the vocabulary
    Combine {
        /// Metadata file (expanded JSON-LD graph); `-` reads stdin
        metadata: PathBuf,

        /// Subject IRI (required when the graph holds more than one node)
        #[arg(long, short = 's')]
        subject: Option<String>,

        /// Annotate properties with vocabulary-editor permissions of the subject shape
        #[arg(long)]
        editing: bool,

        /// With --editing: the user may not edit the subject
        #[arg(long, requires = "editing")]
        read_only: bool,
    },

    /// Show the empty property list for a new instance of a type
    Empty {
        /// Class IRI
        #[arg(value_name = "TYPE")]
        type_iri: String,
    },

    /// List the property shapes that apply to one or more types
    Shapes {
        /// Class IRIs
        #[arg(value_name = "TYPE", required = true)]
        types: Vec<String>,
    },

    /// List the classes shown in the metadata catalog
    Classes,

    /// Show the display label of a predicate
    Label {
        /// Predicate IRI
        predicate: String,
    },
}

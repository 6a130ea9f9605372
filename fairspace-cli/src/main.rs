mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{exit_with_error, CliError};
use input::InputSource;

fn init_tracing(cli: &Cli, config: &Config) {
    // CLI tracing policy:
    //   --quiet   → always "off"
    //   --verbose → RUST_LOG if set, otherwise "info"
    //   default   → the configured log_level ("warn" unless set), so data
    //               problems in the graphs still show up on stderr.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::try_new(config.log_level())
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_LEVEL))
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr, so piping stdout keeps colored errors on the terminal.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with_error(e),
    };

    init_tracing(&cli, &config);

    if let Err(e) = run(cli, config) {
        exit_with_error(e);
    }
}

fn run(cli: Cli, config: Config) -> error::CliResult<()> {
    let format = config.format(cli.format);
    let vocabulary_source = config.vocabulary(cli.vocabulary.as_deref())?;

    if let Commands::Combine { metadata, .. } = &cli.command {
        if InputSource::from_arg(metadata).is_stdin() && vocabulary_source.is_stdin() {
            return Err(CliError::Usage(
                "vocabulary and metadata cannot both be read from stdin".into(),
            ));
        }
    }

    let vocabulary = commands::load_vocabulary(&vocabulary_source)?;

    match cli.command {
        Commands::Combine {
            metadata,
            subject,
            editing,
            read_only,
        } => {
            let editing = if editing {
                commands::combine::Editing::On {
                    editable: !read_only,
                }
            } else {
                commands::combine::Editing::Off
            };
            commands::combine::run(
                &vocabulary,
                &InputSource::from_arg(&metadata),
                subject.as_deref(),
                editing,
                format,
            )
        }
        Commands::Empty { type_iri } => commands::empty::run(&vocabulary, &type_iri, format),
        Commands::Shapes { types } => commands::shapes::run(&vocabulary, &types, format),
        Commands::Classes => commands::classes::run(&vocabulary, format),
        Commands::Label { predicate } => commands::label::run(&vocabulary, &predicate, format),
    }
}

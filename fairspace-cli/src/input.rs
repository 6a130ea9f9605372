use crate::error::{CliError, CliResult};
use std::fmt;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where a JSON-LD document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// From a file on disk.
    File(PathBuf),
    /// From stdin (piped), requested with `-`.
    Stdin,
}

impl InputSource {
    /// Interpret a path argument; `-` means stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Read content from the resolved input source.
pub fn read_input(source: &InputSource) -> CliResult<String> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display()))),
        InputSource::Stdin => {
            if io::stdin().is_terminal() {
                return Err(CliError::Input(format!(
                    "no input provided\n  {} pass a file, or pipe JSON-LD via stdin",
                    colored::Colorize::bold(colored::Colorize::cyan("help:"))
                )));
            }
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read and parse an expanded JSON-LD document.
pub fn read_json(source: &InputSource) -> CliResult<serde_json::Value> {
    let content = read_input(source)?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::Input(format!("failed to parse {source}: {e}")))
}

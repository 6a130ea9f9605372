use crate::error::{CliError, CliResult};
use crate::input::InputSource;
use crate::output::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const FAIRSPACE_DIR: &str = ".fairspace";
const CONFIG_FILE: &str = "config.toml";

/// Log filter used when neither `--verbose` nor `--quiet` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
    /// Default vocabulary file, relative to the config directory
    pub vocabulary: Option<PathBuf>,
}

/// Resolved CLI configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Directory holding the config file, if one was found
    pub dir: Option<PathBuf>,
    pub file: FileConfig,
}

impl Config {
    /// Load configuration: `--config` override, else `.fairspace/` found by
    /// walking up from cwd, else `~/.fairspace/`, else defaults.
    pub fn load(config_override: Option<&Path>) -> CliResult<Self> {
        let config_file = match config_override {
            Some(p) => Some(resolve_config_override(p)?),
            None => find_or_global_fairspace_dir()
                .map(|dir| dir.join(CONFIG_FILE))
                .filter(|path| path.is_file()),
        };

        let Some(path) = config_file else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let file: FileConfig = toml::from_str(&content)?;

        Ok(Self {
            dir: path.parent().map(Path::to_path_buf),
            file,
        })
    }

    pub fn log_level(&self) -> &str {
        self.file.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Output format: flag > config > json.
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.file.format).unwrap_or_default()
    }

    /// Vocabulary source: flag > config.
    pub fn vocabulary(&self, flag: Option<&Path>) -> CliResult<InputSource> {
        if let Some(p) = flag {
            return Ok(InputSource::from_arg(p));
        }
        let configured = self.file.vocabulary.as_ref().ok_or(CliError::NoVocabulary)?;
        let path = match &self.dir {
            Some(dir) if configured.is_relative() => dir.join(configured),
            _ => configured.clone(),
        };
        Ok(InputSource::File(path))
    }
}

/// Walk up from `start` looking for a `.fairspace/` directory.
fn find_fairspace_dir_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(FAIRSPACE_DIR);
        if candidate.is_dir() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Find `.fairspace/` by walking up from cwd, falling back to `~/.fairspace/`.
fn find_or_global_fairspace_dir() -> Option<PathBuf> {
    let local = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_fairspace_dir_from(&cwd));
    if local.is_some() {
        return local;
    }
    let global = dirs::home_dir()?.join(FAIRSPACE_DIR);
    if global.is_dir() {
        Some(global)
    } else {
        None
    }
}

/// Resolve a `--config` override to a config file path.
///
/// Accepts either a file (used as is) or a directory (its `config.toml`).
fn resolve_config_override(p: &Path) -> CliResult<PathBuf> {
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if resolved.is_file() {
        return Ok(resolved);
    }

    if resolved.is_dir() {
        let file = resolved.join(CONFIG_FILE);
        if file.is_file() {
            return Ok(file);
        }
        return Err(CliError::Config(format!(
            "no {CONFIG_FILE} in {}",
            resolved.display()
        )));
    }

    Err(CliError::Config(format!(
        "config path does not exist: {}",
        p.display()
    )))
}

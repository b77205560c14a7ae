//! Configuration loading and input/output path resolution
//!
//! There are no CLI flags and no environment variables; a single batch run
//! reads two CSV inputs and writes two CSV outputs. Paths resolve in
//! priority order:
//! 1. An optional `chordon.toml` in the working directory (any subset of keys)
//! 2. Compiled defaults matching the published dataset artifacts

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "chordon.toml";

const DEFAULT_DATASET: &str = "chordonomicon_v2.csv";
const DEFAULT_MAPPING: &str = "chords_mapping.csv";
const DEFAULT_PROGRESSION_OUTPUT: &str = "swift_chords.csv";
const DEFAULT_MAPPED_OUTPUT: &str = "swift_mapped.csv";

/// Resolved pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Chord-progression dataset CSV
    pub dataset_path: PathBuf,
    /// Chord-to-degree mapping CSV
    pub mapping_path: PathBuf,
    /// Per-song progression export destination
    pub progression_output: PathBuf,
    /// Per-chord mapped export destination
    pub mapped_output: PathBuf,
}

/// Optional overrides read from `chordon.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    dataset_path: Option<PathBuf>,
    mapping_path: Option<PathBuf>,
    progression_output: Option<PathBuf>,
    mapped_output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            mapping_path: PathBuf::from(DEFAULT_MAPPING),
            progression_output: PathBuf::from(DEFAULT_PROGRESSION_OUTPUT),
            mapped_output: PathBuf::from(DEFAULT_MAPPED_OUTPUT),
        }
    }
}

impl Config {
    /// Resolve configuration from the working directory
    pub fn resolve() -> Result<Self> {
        Self::resolve_from(Path::new(CONFIG_FILE))
    }

    /// Resolve configuration from an explicit config-file path
    ///
    /// A missing file is not an error; the compiled defaults apply. A file
    /// that exists but fails to parse is a fatal configuration error.
    pub fn resolve_from(config_path: &Path) -> Result<Self> {
        let mut config = Config::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let overrides: ConfigFile = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", config_path.display(), e)))?;
            config.apply(overrides);
        }

        Ok(config)
    }

    fn apply(&mut self, overrides: ConfigFile) {
        if let Some(path) = overrides.dataset_path {
            self.dataset_path = path;
        }
        if let Some(path) = overrides.mapping_path {
            self.mapping_path = path;
        }
        if let Some(path) = overrides.progression_output {
            self.progression_output = path;
        }
        if let Some(path) = overrides.mapped_output {
            self.mapped_output = path;
        }
    }
}

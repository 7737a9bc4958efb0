//! Configuration loading

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StagehandError, StagehandResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration from a JSON document.
///
/// Any read or parse failure is fatal; there is no default-to-empty path.
pub fn load(path: &Path) -> StagehandResult<Config> {
    load_with_warnings(path).map(|(config, _)| config)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StagehandResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StagehandError::ConfigRead {
        file: path.to_path_buf(),
        source: e,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(&content);

    let config: Config = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StagehandError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (STAGEHAND_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, std::env::var_os("STAGEHAND_DESTINATION"))
}

fn apply_overrides(mut config: Config, destination: Option<OsString>) -> Config {
    if let Some(dest) = destination {
        if !dest.is_empty() {
            config.destination = PathBuf::from(dest);
        }
    }
    config
}

//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Well-known name of the configuration file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// File name the compiler writes its primary output under.
///
/// The artifact rename step only runs when `outputFileName` differs from
/// this name.
pub const DEFAULT_OUTPUT_FILE: &str = "index.js";

/// Deployment configuration loaded from `config.json`.
///
/// Field names map to the camelCase keys of the on-disk document. Every key
/// is optional; the serde defaults below are the fallbacks applied when a
/// key is absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Deployment directory receiving the staged build output
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Directory the build command writes compiled output into
    #[serde(default = "default_compile_output_name")]
    pub compile_output_name: String,

    /// Whether to symlink the local dependency directory into the destination
    #[serde(default)]
    pub node_module_attach: bool,

    /// Name the primary output artifact should carry after deployment
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Build entry point. Recognized and validated, but consumed by the
    /// build command itself rather than by the pipeline.
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            compile_output_name: default_compile_output_name(),
            node_module_attach: false,
            output_file_name: default_output_file_name(),
            entry_point: default_entry_point(),
        }
    }
}

impl Config {
    /// Whether the primary artifact needs renaming after compilation.
    pub fn needs_rename(&self) -> bool {
        self.output_file_name != DEFAULT_OUTPUT_FILE
    }
}

fn default_destination() -> PathBuf {
    PathBuf::from("./deploy")
}

fn default_compile_output_name() -> String {
    "dist".to_string()
}

fn default_output_file_name() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_entry_point() -> String {
    "index.ts".to_string()
}

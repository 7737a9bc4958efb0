//! Error types for stagehand
//!
//! Library errors use `thiserror`; the binary edge wraps them in `anyhow`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for stagehand operations
pub type StagehandResult<T> = Result<T, StagehandError>;

/// Main error type for stagehand operations
///
/// Every variant corresponds to a fatal pipeline condition and names the
/// offending path or command in its message. Recoverable conditions (a
/// missing or malformed route listing) are reported inline and never
/// surface here.
#[derive(Error, Debug)]
pub enum StagehandError {
    /// Configuration file could not be read
    #[error("error loading configuration file '{file}': {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not a valid JSON document
    #[error("error loading configuration file '{file}': {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Build command could not be started
    #[error("failed to run '{command}': {source}")]
    BuildSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Build command completed with a non-zero exit status
    #[error("compilation failed: '{command}' exited with {status}")]
    BuildFailed { command: String, status: ExitStatus },

    /// Expected compiler output file is missing from the build output directory
    #[error("compiled output file '{file}' not found in '{dir}'")]
    MissingArtifact { file: String, dir: PathBuf },

    /// Build output directory does not exist
    #[error("source directory '{dir}' does not exist")]
    SourceDirMissing { dir: PathBuf },

    /// Dependency directory is missing from the current working directory
    #[error("'{dir}' directory does not exist in the current working directory")]
    DependencyMissing { dir: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

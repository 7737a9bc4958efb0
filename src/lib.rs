//! Stagehand - build-and-deploy utility
//!
//! Stagehand runs a project's build command, stages the compiled output
//! into a deployment directory, optionally attaches the local dependency
//! directory by symbolic link, and offers a small interactive menu for
//! inspecting recorded route definitions.

pub mod config;
pub mod error;
pub mod menu;
pub mod pipeline;
pub mod routes;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE};
pub use error::{StagehandError, StagehandResult};
pub use menu::{MenuAction, MenuState};
pub use pipeline::{BuildCommand, CopyOutcome, LinkOutcome};
pub use routes::{RouteListing, ROUTES_FILE};

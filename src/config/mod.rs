//! Deployment configuration
//!
//! One `Config` value is constructed at startup and passed explicitly into
//! every component that needs it; there is no ambient configuration state.

mod loader;
mod types;

pub use loader::{load, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{Config, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE};

//! Fixed-step deployment pipeline
//!
//! compile → rename → copy → link, in that order. Every step returns a
//! `StagehandResult`; the orchestrator stops at the first failure, so
//! nothing after a failed step runs and nothing already done is rolled
//! back. The rename and link steps are conditionally skipped per
//! configuration, never on error.

mod build;
mod copy;
mod link;
mod rename;

use std::path::Path;

use crate::config::{Config, DEFAULT_OUTPUT_FILE};
use crate::error::StagehandResult;
use crate::ui::Reporter;

pub use build::{BuildCommand, BUILD_COMMAND_ENV};
pub use copy::{stage_build_output, CopyOutcome, CopyStats};
pub use link::{attach_dependencies, LinkOutcome, DEPENDENCY_DIR};
pub use rename::rename_output_file;

/// Run the full pipeline against the current working directory.
pub fn run(config: &Config, build: &BuildCommand, reporter: &Reporter) -> StagehandResult<()> {
    reporter.step("Compiling project...");
    build.run()?;
    reporter.success("Compilation completed successfully.");

    let build_dir = Path::new(&config.compile_output_name);

    if config.needs_rename() {
        rename_output_file(build_dir, DEFAULT_OUTPUT_FILE, &config.output_file_name)?;
        reporter.info(&format!(
            "Renamed '{}' to '{}'.",
            DEFAULT_OUTPUT_FILE, config.output_file_name
        ));
    }

    let outcome = stage_build_output(build_dir, &config.destination)?;
    if outcome.created_destination {
        reporter.info(&format!(
            "Created destination directory '{}'.",
            config.destination.display()
        ));
    }
    reporter.success(&format!(
        "Staged {} files from '{}' into '{}'.",
        outcome.stats.files,
        build_dir.display(),
        config.destination.display()
    ));

    if config.node_module_attach {
        let cwd = std::env::current_dir()?;
        match attach_dependencies(&cwd, &config.destination)? {
            LinkOutcome::AlreadyPresent => reporter.info(&format!(
                "'{}' already exists in '{}'.",
                DEPENDENCY_DIR,
                config.destination.display()
            )),
            LinkOutcome::Created => reporter.success(&format!(
                "Created symbolic link for '{}' in '{}'.",
                DEPENDENCY_DIR,
                config.destination.display()
            )),
        }
    }

    Ok(())
}

//! Artifact rename step

use std::fs;
use std::path::Path;

use crate::error::{StagehandError, StagehandResult};

/// Rename the compiler's default-named output file inside the build output
/// directory.
///
/// The default-named file must exist; a missing source is fatal, not
/// skippable, because the configured output name could otherwise never
/// appear in the deployment.
pub fn rename_output_file(
    build_dir: &Path,
    original_name: &str,
    new_name: &str,
) -> StagehandResult<()> {
    let original = build_dir.join(original_name);
    let renamed = build_dir.join(new_name);

    if !original.exists() {
        return Err(StagehandError::MissingArtifact {
            file: original_name.to_string(),
            dir: build_dir.to_path_buf(),
        });
    }

    fs::rename(&original, &renamed)?;
    Ok(())
}

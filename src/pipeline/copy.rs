//! Deployment copy step
//!
//! Recursive merge-copy of the build output tree into the destination.
//! Existing destination entries at the same relative path are overwritten
//! unconditionally; the copy is neither atomic nor transactional, so a
//! mid-copy failure leaves a partially merged destination.

use std::fs;
use std::path::Path;

use crate::error::{StagehandError, StagehandResult};

/// Counts reported after a staging run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Result of staging build output into the destination.
#[derive(Debug, Clone, Copy)]
pub struct CopyOutcome {
    /// Whether the destination directory had to be created
    pub created_destination: bool,
    pub stats: CopyStats,
}

/// Copy every direct entry of `source` into `destination`, merging with any
/// existing tree.
///
/// A missing source directory is fatal: there is nothing valid to deploy,
/// and creating an empty deployment would hide the problem. A missing
/// destination is created, intermediate directories included.
pub fn stage_build_output(source: &Path, destination: &Path) -> StagehandResult<CopyOutcome> {
    if !source.is_dir() {
        return Err(StagehandError::SourceDirMissing {
            dir: source.to_path_buf(),
        });
    }

    let created_destination = !destination.exists();
    if created_destination {
        fs::create_dir_all(destination)?;
    }

    let mut stats = CopyStats::default();
    copy_dir_recursive(source, destination, &mut stats)?;

    Ok(CopyOutcome {
        created_destination,
        stats,
    })
}

fn copy_dir_recursive(src_dir: &Path, dest_dir: &Path, stats: &mut CopyStats) -> StagehandResult<()> {
    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dest_path)?;
            stats.dirs += 1;
            copy_dir_recursive(&src_path, &dest_path, stats)?;
        } else {
            copy_file(&src_path, &dest_path)?;
            stats.files += 1;
        }
    }
    Ok(())
}

/// Copy one file, carrying the source's modification time onto the copy.
fn copy_file(src: &Path, dest: &Path) -> StagehandResult<()> {
    fs::copy(src, dest)?;

    let modified = fs::metadata(src)?.modified()?;
    fs::File::options()
        .write(true)
        .open(dest)?
        .set_modified(modified)?;
    Ok(())
}

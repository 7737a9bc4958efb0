//! Dependency attach step
//!
//! Shares the local dependency directory into the deployment by symbolic
//! link rather than by copy, so the deployment never owns a duplicate.

use std::path::Path;

use crate::error::{StagehandError, StagehandResult};

/// Fixed name of the dependency directory, in the working directory and in
/// the deployment.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// What the attach step found at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    AlreadyPresent,
}

/// Link `node_modules` from `working_dir` into `destination`.
///
/// A missing source directory is fatal. An entry of any kind already at the
/// destination path (including a dangling symlink) counts as already
/// attached and is left untouched, keeping repeat deploys idempotent.
pub fn attach_dependencies(working_dir: &Path, destination: &Path) -> StagehandResult<LinkOutcome> {
    let source = working_dir.join(DEPENDENCY_DIR);
    if !source.exists() {
        return Err(StagehandError::DependencyMissing {
            dir: DEPENDENCY_DIR.to_string(),
        });
    }

    let target = destination.join(DEPENDENCY_DIR);
    if target.symlink_metadata().is_ok() {
        return Ok(LinkOutcome::AlreadyPresent);
    }

    symlink_dir(&source, &target)?;
    Ok(LinkOutcome::Created)
}

#[cfg(unix)]
fn symlink_dir(source: &Path, target: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(windows)]
fn symlink_dir(source: &Path, target: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(source, target)
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_missing_dependency_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = attach_dependencies(dir.path(), dir.path()).unwrap_err();
        assert!(matches!(err, StagehandError::DependencyMissing { .. }));
    }

    #[test]
    fn test_creates_symlink_sharing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let deploy = dir.path().join("deploy");
        fs::create_dir_all(dir.path().join("node_modules").join("pkg")).unwrap();
        fs::create_dir_all(&deploy).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "lib").unwrap();

        let outcome = attach_dependencies(dir.path(), &deploy).unwrap();

        assert_eq!(outcome, LinkOutcome::Created);
        let link = deploy.join("node_modules");
        assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(link.join("pkg/index.js")).unwrap(),
            "lib"
        );
    }

    #[test]
    fn test_second_attach_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let deploy = dir.path().join("deploy");
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        fs::create_dir_all(&deploy).unwrap();

        assert_eq!(
            attach_dependencies(dir.path(), &deploy).unwrap(),
            LinkOutcome::Created
        );
        assert_eq!(
            attach_dependencies(dir.path(), &deploy).unwrap(),
            LinkOutcome::AlreadyPresent
        );
    }

    #[test]
    fn test_existing_directory_at_target_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let deploy = dir.path().join("deploy");
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        fs::create_dir_all(deploy.join("node_modules")).unwrap();
        fs::write(deploy.join("node_modules/marker"), "x").unwrap();

        let outcome = attach_dependencies(dir.path(), &deploy).unwrap();

        assert_eq!(outcome, LinkOutcome::AlreadyPresent);
        assert!(deploy.join("node_modules/marker").exists());
        assert!(!deploy
            .join("node_modules")
            .symlink_metadata()
            .unwrap()
            .file_type()
            .is_symlink());
    }

    #[test]
    fn test_dangling_symlink_counts_as_present() {
        let dir = tempfile::tempdir().unwrap();
        let deploy = dir.path().join("deploy");
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        fs::create_dir_all(&deploy).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), deploy.join("node_modules")).unwrap();

        assert_eq!(
            attach_dependencies(dir.path(), &deploy).unwrap(),
            LinkOutcome::AlreadyPresent
        );
    }
}

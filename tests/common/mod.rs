//! Common test utilities for stagehand integration tests.
//!
//! Provides `TestEnv`: an isolated working directory plus helpers to stub
//! the build command and run the stagehand binary with piped stdio.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Result of running a stagehand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// The stagehand binary always runs with the temp directory as its working
/// directory, so `config.json`, `dist/`, `node_modules/` and `routes.json`
/// live inside it and tests never touch each other.
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
    envs: HashMap<String, String>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stagehand")),
            envs: HashMap::new(),
        }
    }

    /// Get path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Write `config.json` in the project root
    pub fn write_config(&self, json: &str) {
        self.write_file("config.json", json);
    }

    /// Set an environment variable for subsequent runs
    pub fn set_env(&mut self, key: &str, value: &str) {
        self.envs.insert(key.to_string(), value.to_string());
    }

    /// Install a stub build script and point STAGEHAND_BUILD_COMMAND at it.
    ///
    /// The body runs with the project root as working directory, so it can
    /// populate `dist/` directly.
    #[cfg(unix)]
    pub fn stub_build(&mut self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path("build.sh");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        self.set_env("STAGEHAND_BUILD_COMMAND", &script.display().to_string());
    }

    /// Run stagehand with stdin closed immediately (EOF)
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run stagehand, feeding `input` through piped stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = Command::new(&self.bin)
            .args(args)
            .current_dir(self.project_root.path())
            .env_remove("STAGEHAND_BUILD_COMMAND")
            .env_remove("STAGEHAND_DESTINATION")
            .envs(&self.envs)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn stagehand");

        // The child may exit before reading stdin (fatal config errors).
        let _ = child.stdin.take().unwrap().write_all(input.as_bytes());

        let output = child.wait_with_output().expect("failed to wait for stagehand");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Snapshot a directory tree as relative-path → contents
pub fn snapshot_tree(root: &Path) -> std::collections::BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut std::collections::BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                out.insert(
                    path.strip_prefix(root).unwrap().to_path_buf(),
                    fs::read(&path).unwrap(),
                );
            }
        }
    }
    let mut out = std::collections::BTreeMap::new();
    walk(root, root, &mut out);
    out
}

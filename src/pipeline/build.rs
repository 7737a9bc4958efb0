//! Build invocation
//!
//! Runs the external build command synchronously, inheriting the terminal so
//! compiler output streams through. The call blocks until the command
//! returns; there is no timeout and no retry.

use std::process::{Command, Stdio};

use crate::error::{StagehandError, StagehandResult};

/// Environment variable overriding the build command line.
///
/// The value is split on whitespace into program and arguments. Intended for
/// deploy automation and tests; the configuration file deliberately has no
/// key for this.
pub const BUILD_COMMAND_ENV: &str = "STAGEHAND_BUILD_COMMAND";

const DEFAULT_PROGRAM: &str = "npm";
const DEFAULT_ARGS: &[&str] = &["run", "build"];

/// The external build command, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BuildCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Resolve the command from `STAGEHAND_BUILD_COMMAND`, falling back to
    /// `npm run build`.
    pub fn from_env() -> Self {
        match std::env::var(BUILD_COMMAND_ENV) {
            Ok(line) => Self::parse(&line).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?.to_string();
        Some(Self {
            program,
            args: words.map(|s| s.to_string()).collect(),
        })
    }

    /// Command line as shown in diagnostics.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command to completion, blocking the whole process.
    pub fn run(&self) -> StagehandResult<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| StagehandError::BuildSpawn {
                command: self.display(),
                source: e,
            })?;

        if !status.success() {
            return Err(StagehandError::BuildFailed {
                command: self.display(),
                status,
            });
        }
        Ok(())
    }
}

//! Script execution capability
//!
//! The controller never spawns processes itself; it hands each script to a
//! `ScriptRunner`. Production code uses `OsaScriptRunner`, tests plug in
//! their own implementation.

use super::error::{Result, VolumeError};
use super::models::SCRIPT_INTERPRETER;
use std::process::Command;

/// Runs one OS script and returns its trimmed standard output.
pub trait ScriptRunner: Send + Sync {
    /// Blocks until the script has finished.
    fn run(&self, script: &str) -> Result<String>;
}

/// Runs scripts as `<program> -e <script>`, by default through `osascript`
#[derive(Debug, Clone)]
pub struct OsaScriptRunner {
    program: String,
}

impl Default for OsaScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl OsaScriptRunner {
    /// Runner backed by the system `osascript`
    pub fn new() -> Self {
        Self::with_program(SCRIPT_INTERPRETER)
    }

    /// Runner backed by another interpreter accepting `-e <script>`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Interpreter this runner launches
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ScriptRunner for OsaScriptRunner {
    fn run(&self, script: &str) -> Result<String> {
        tracing::debug!(program = %self.program, script, "running script");

        // Passed as a single argument; no shell is involved.
        let output = Command::new(&self.program).arg("-e").arg(script).output()?;

        if !output.status.success() {
            return Err(VolumeError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

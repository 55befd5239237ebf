//! Error types for the volume controller

use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for script runs
pub type Result<T> = std::result::Result<T, VolumeError>;

/// Errors that can occur while running a volume script
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VolumeError {
    /// The interpreter could not be started
    #[error("Failed to launch script interpreter: {0}")]
    Spawn(#[from] std::io::Error),

    /// The interpreter ran but reported failure
    #[error("Script exited with {status}: {stderr}")]
    CommandFailed {
        /// Exit status of the interpreter
        status: ExitStatus,
        /// Trimmed standard error output
        stderr: String,
    },
}

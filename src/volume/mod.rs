//! System Volume Module
//!
//! Reads and changes the system output volume and mute flag by running
//! short AppleScript snippets through `osascript`. Contains:
//! - Script constants and builders
//! - Output parsing and level clamping helpers
//! - The `ScriptRunner` capability and its `osascript` implementation
//! - The `VolumeController` front end

pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod runner;

// Re-export commonly used types for convenience
pub use controller::VolumeController;
pub use error::VolumeError;
pub use runner::{OsaScriptRunner, ScriptRunner};

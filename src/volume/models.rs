//! Volume Scripts and Constants

// =============================================================================
// Constants
// =============================================================================

/// Interpreter used to run the scripts below
pub const SCRIPT_INTERPRETER: &str = "osascript";
/// Lowest accepted output volume
pub const MIN_VOLUME: u8 = 0;
/// Highest accepted output volume
pub const MAX_VOLUME: u8 = 100;

/// Reads the output volume (prints an integer in 0..=100)
pub const GET_VOLUME_SCRIPT: &str = "output volume of (get volume settings)";
/// Reads the mute flag (prints `true` or `false`)
pub const GET_MUTED_SCRIPT: &str = "output muted of (get volume settings)";
/// Sets the mute flag
pub const MUTE_SCRIPT: &str = "set volume output muted true";
/// Clears the mute flag
pub const UNMUTE_SCRIPT: &str = "set volume output muted false";

/// Builds the script that sets the output volume to `level`.
pub fn set_volume_script(level: u8) -> String {
    format!("set volume output volume {}", level)
}

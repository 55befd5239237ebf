//! Volume Helpers
//!
//! Pure functions shared by the controller and the CLI.

use super::models::{MAX_VOLUME, MIN_VOLUME};

/// Clamps an arbitrary requested level into `MIN_VOLUME..=MAX_VOLUME`.
pub fn clamp_level(level: i64) -> u8 {
    // Fits in u8 after the clamp.
    level.clamp(MIN_VOLUME as i64, MAX_VOLUME as i64) as u8
}

/// Interprets the output of the volume query.
///
/// Empty or non-numeric output reads as 0; numbers outside the valid
/// range are clamped.
pub fn parse_volume_output(output: &str) -> u8 {
    output.trim().parse::<i64>().map(clamp_level).unwrap_or(0)
}

/// Interprets the output of the mute query. Only a literal `true` is muted.
pub fn parse_muted_output(output: &str) -> bool {
    output.trim() == "true"
}

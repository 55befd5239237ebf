//! Volume controller
//!
//! Every operation runs one script synchronously. Script failures are
//! logged and otherwise treated like empty output, so callers never see an
//! error: a failed query reads as volume 0 / not muted, a failed setter is
//! a no-op.

use super::helpers::{clamp_level, parse_muted_output, parse_volume_output};
use super::models::{
    set_volume_script, GET_MUTED_SCRIPT, GET_VOLUME_SCRIPT, MUTE_SCRIPT, UNMUTE_SCRIPT,
};
use super::runner::{OsaScriptRunner, ScriptRunner};

/// Front end for reading and changing the system output volume
#[derive(Debug, Clone)]
pub struct VolumeController<R = OsaScriptRunner> {
    runner: R,
}

impl Default for VolumeController {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeController {
    /// Controller that talks to the system through `osascript`
    pub fn new() -> Self {
        Self::with_runner(OsaScriptRunner::new())
    }
}

impl<R: ScriptRunner> VolumeController<R> {
    /// Controller that talks to the system through `runner`
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// The underlying runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Current output volume in `0..=100`; 0 when the query yields nothing.
    pub fn get_volume(&self) -> u8 {
        parse_volume_output(&self.run_or_empty(GET_VOLUME_SCRIPT))
    }

    /// Sets the output volume, clamping `level` into `0..=100`.
    pub fn set_volume(&self, level: i64) {
        let level = clamp_level(level);
        self.run_or_empty(&set_volume_script(level));
        tracing::info!(level, "volume set");
    }

    /// Sets the system mute flag.
    pub fn mute(&self) {
        self.run_or_empty(MUTE_SCRIPT);
        tracing::info!("output muted");
    }

    /// Clears the system mute flag.
    pub fn unmute(&self) {
        self.run_or_empty(UNMUTE_SCRIPT);
        tracing::info!("output unmuted");
    }

    /// Whether output is muted; false when the query yields nothing.
    pub fn is_muted(&self) -> bool {
        parse_muted_output(&self.run_or_empty(GET_MUTED_SCRIPT))
    }

    fn run_or_empty(&self, script: &str) -> String {
        match self.runner.run(script) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(script, error = %e, "volume script failed");
                String::new()
            }
        }
    }
}

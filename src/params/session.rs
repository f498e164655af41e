//! Session configuration for the binary: tick timing, tempo and output.

use std::path::PathBuf;

use clap::ValueEnum;

/// Output device driven by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeviceKind {
    #[default]
    Dome,
    Panel,
}

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Frame tick period (milliseconds)
    /// 10 ms = 100 Hz, the rate the preview consumer polls at
    pub tick_ms: u64,

    /// Number of frame ticks to run before stopping
    pub frames: usize,

    /// Tempo driving measure progress (beats per minute)
    pub bpm: f64,

    /// Beats in one measure
    pub beats_per_measure: u32,

    /// Device the session renders to
    pub device: DeviceKind,

    /// Directory for preview PNG snapshots
    pub output_dir: PathBuf,

    /// Save every Nth published preview frame (0 = never)
    pub snapshot_every: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            frames: 1000,
            bpm: 120.0,
            beats_per_measure: 4,
            device: DeviceKind::Dome,
            output_dir: PathBuf::from("frames"),
            snapshot_every: 0,
        }
    }
}

impl SessionConfig {
    /// Validate configuration (positive tick, tempo, measure length)
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_ms == 0 {
            return Err("Tick period must be > 0 ms".to_string());
        }
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(format!("Tempo must be > 0 BPM, got {}", self.bpm));
        }
        if self.beats_per_measure == 0 {
            return Err("A measure needs at least one beat".to_string());
        }
        Ok(())
    }

    /// Length of one measure in seconds
    pub fn measure_secs(&self) -> f64 {
        60.0 / self.bpm * self.beats_per_measure as f64
    }
}

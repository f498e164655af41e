//! Beat sources: a free-running tempo clock and a manually driven one.

use std::time::{Duration, Instant};

use super::BeatSource;
use crate::atomic::AtomicF64;

/// Derives measure progress from a fixed tempo and wall-clock time
#[derive(Debug, Clone)]
pub struct TempoClock {
    start: Instant,
    measure_secs: f64,
}

impl TempoClock {
    /// Start a clock at `bpm` with `beats_per_measure` beats per measure
    pub fn new(bpm: f64, beats_per_measure: u32) -> Self {
        Self {
            start: Instant::now(),
            measure_secs: 60.0 / bpm * beats_per_measure as f64,
        }
    }

    /// Progress through the measure after `elapsed` since the clock started
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        (elapsed.as_secs_f64() / self.measure_secs).fract()
    }

    pub fn measure_secs(&self) -> f64 {
        self.measure_secs
    }
}

impl BeatSource for TempoClock {
    fn progress_through_measure(&self) -> Option<f64> {
        Some(self.progress_at(self.start.elapsed()))
    }
}

/// Beat source set from outside, e.g. by an external beat tracker or a test
#[derive(Debug)]
pub struct ManualBeat {
    progress: AtomicF64,
}

impl Default for ManualBeat {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualBeat {
    pub fn new() -> Self {
        Self {
            progress: AtomicF64::new(0.0),
        }
    }

    /// Set progress; values outside [0, 1) wrap
    pub fn set_progress(&self, progress: f64) {
        self.progress.store(progress.rem_euclid(1.0));
    }
}

impl BeatSource for ManualBeat {
    fn progress_through_measure(&self) -> Option<f64> {
        Some(self.progress.load())
    }
}

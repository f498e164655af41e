//! Beat-synced level envelope used when no live input is configured.

use std::sync::Arc;

use super::{AudioInput, BeatSource};

/// Percussive envelope that spikes on every beat and decays until the next.
///
/// Lets the dome run (and be previewed) without a microphone.
pub struct BeatEnvelope {
    beat: Arc<dyn BeatSource>,
    beats_per_measure: u32,
}

impl BeatEnvelope {
    pub fn new(beat: Arc<dyn BeatSource>, beats_per_measure: u32) -> Self {
        Self {
            beat,
            beats_per_measure: beats_per_measure.max(1),
        }
    }

    /// Envelope value at a given measure progress
    pub fn level_at(&self, progress: f64) -> f64 {
        let through_beat = (progress * self.beats_per_measure as f64).fract();
        (1.0 - through_beat).powi(2)
    }
}

impl AudioInput for BeatEnvelope {
    fn level_for_channel(&self, _channel: usize) -> Option<f64> {
        self.beat
            .progress_through_measure()
            .map(|progress| self.level_at(progress))
    }

    fn volume(&self) -> Option<f64> {
        self.level_for_channel(0)
    }
}

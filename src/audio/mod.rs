//! Audio and beat feature sources consumed by the visualizers.
//!
//! Sources are sampled once per frame tick. Nothing here blocks: every
//! accessor returns the latest value already available, or `None` while the
//! source is unavailable, in which case visualizers hold the last known value.

mod levels;
mod synthetic;
mod tempo;

#[cfg(feature = "live-audio")]
mod capture;

pub use levels::SharedAudioLevels;
pub use synthetic::BeatEnvelope;
pub use tempo::{ManualBeat, TempoClock};

#[cfg(feature = "live-audio")]
pub use capture::LevelMeter;

/// Live audio feature stream
pub trait AudioInput: Send + Sync {
    /// Instantaneous level of `channel`, range [0, 1]
    fn level_for_channel(&self, channel: usize) -> Option<f64>;

    /// Overall volume, range [0, 1]
    fn volume(&self) -> Option<f64>;
}

/// Beat tracker position
pub trait BeatSource: Send + Sync {
    /// Progress through the current measure, range [0, 1), wrapping at measure boundaries
    fn progress_through_measure(&self) -> Option<f64>;
}

/// Holds the most recent value of a feature so a frame never fails when
/// its source drops out.
#[derive(Debug, Clone)]
pub struct LastKnown {
    name: &'static str,
    value: f64,
    stale: bool,
}

impl LastKnown {
    pub fn new(name: &'static str, initial: f64) -> Self {
        Self {
            name,
            value: initial,
            stale: false,
        }
    }

    /// Accept a fresh sample, or keep the previous value when it is missing
    pub fn update(&mut self, sample: Option<f64>) -> f64 {
        match sample {
            Some(value) if value.is_finite() => {
                if self.stale {
                    log::info!("{} available again", self.name);
                    self.stale = false;
                }
                self.value = value;
            }
            _ => {
                if !self.stale {
                    log::warn!(
                        "{} unavailable, holding last value {:.3}",
                        self.name,
                        self.value
                    );
                    self.stale = true;
                }
            }
        }
        self.value
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_known_holds_through_outage() {
        let mut level = LastKnown::new("level", 0.0);
        assert_eq!(level.update(Some(0.4)), 0.4);
        assert_eq!(level.update(None), 0.4);
        assert!(level.is_stale());
        assert_eq!(level.update(Some(f64::NAN)), 0.4);
        assert_eq!(level.update(Some(0.7)), 0.7);
        assert!(!level.is_stale());
    }
}

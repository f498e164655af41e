//! Channel levels shared between an audio analysis thread and the renderer.

use std::sync::atomic::{AtomicBool, Ordering};

use super::AudioInput;
use crate::atomic::AtomicF64;

/// Latest per-channel levels and volume (thread-safe, lock-free)
#[derive(Debug)]
pub struct SharedAudioLevels {
    channels: Vec<AtomicF64>,
    volume: AtomicF64,
    available: AtomicBool,
}

impl SharedAudioLevels {
    /// Create silent levels for `channel_count` channels
    pub fn new(channel_count: usize) -> Self {
        Self {
            channels: (0..channel_count).map(|_| AtomicF64::new(0.0)).collect(),
            volume: AtomicF64::new(0.0),
            available: AtomicBool::new(true),
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Store a level for `channel`, clamped to [0, 1]; unknown channels are ignored
    pub fn set_level(&self, channel: usize, level: f64) {
        if let Some(slot) = self.channels.get(channel) {
            slot.store(level.clamp(0.0, 1.0));
        }
    }

    pub fn set_volume(&self, volume: f64) {
        self.volume.store(volume.clamp(0.0, 1.0));
    }

    /// Mark the source as (un)available, e.g. while the input device restarts
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }
}

impl AudioInput for SharedAudioLevels {
    fn level_for_channel(&self, channel: usize) -> Option<f64> {
        if !self.available.load(Ordering::Relaxed) {
            return None;
        }
        self.channels.get(channel).map(AtomicF64::load)
    }

    fn volume(&self) -> Option<f64> {
        if !self.available.load(Ordering::Relaxed) {
            return None;
        }
        Some(self.volume.load())
    }
}

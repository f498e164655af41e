//! Process-wide live configuration read by every visualizer each frame.
//!
//! Each scalar is its own atomic, so single-field reads and writes are
//! lock-free and never torn. A frame may still observe a mix of old and new
//! fields while the configuration surface is writing.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use super::dome::{validate_frequency, validate_size, validate_speed};
use super::{DomeParams, DomeVisualizerKind, RadialEffect};
use crate::atomic::AtomicF64;
use crate::color::Palettes;

/// Scalar tunables as read at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigSnapshot {
    pub active_visualizer: DomeVisualizerKind,
    pub rotation_speed: f64,
    pub gradient_speed: f64,
    pub radial_effect: RadialEffect,
    pub radial_frequency: f64,
    pub radial_size: f64,
    pub audio_channel: usize,
    pub palette: usize,
}

/// Live tunables shared between the render thread and the configuration surface
#[derive(Debug)]
pub struct SharedConfig {
    active_visualizer: AtomicU8,
    rotation_speed: AtomicF64,
    gradient_speed: AtomicF64,
    radial_effect: AtomicU8,
    radial_frequency: AtomicF64,
    radial_size: AtomicF64,
    audio_channel: AtomicUsize,
    palette: AtomicUsize,
    palettes: Palettes,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::from_params(&DomeParams::default())
    }
}

impl SharedConfig {
    /// Seed the live configuration from validated startup parameters
    pub fn from_params(params: &DomeParams) -> Self {
        Self {
            active_visualizer: AtomicU8::new(params.active_visualizer.as_u8()),
            rotation_speed: AtomicF64::new(params.rotation_speed),
            gradient_speed: AtomicF64::new(params.gradient_speed),
            radial_effect: AtomicU8::new(params.radial_effect.as_u8()),
            radial_frequency: AtomicF64::new(params.radial_frequency),
            radial_size: AtomicF64::new(params.radial_size),
            audio_channel: AtomicUsize::new(params.audio_channel),
            palette: AtomicUsize::new(params.palette),
            palettes: params.palettes.clone(),
        }
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            active_visualizer: self.active_visualizer(),
            rotation_speed: self.rotation_speed.load(),
            gradient_speed: self.gradient_speed.load(),
            radial_effect: self.radial_effect(),
            radial_frequency: self.radial_frequency.load(),
            radial_size: self.radial_size.load(),
            audio_channel: self.audio_channel.load(Ordering::Relaxed),
            palette: self.palette.load(Ordering::Relaxed),
        }
    }

    pub fn palettes(&self) -> &Palettes {
        &self.palettes
    }

    pub fn active_visualizer(&self) -> DomeVisualizerKind {
        // Only ever stored from a valid variant
        DomeVisualizerKind::from_u8(self.active_visualizer.load(Ordering::Relaxed))
            .unwrap_or_default()
    }

    pub fn set_active_visualizer(&self, kind: DomeVisualizerKind) {
        self.active_visualizer.store(kind.as_u8(), Ordering::Relaxed);
    }

    pub fn radial_effect(&self) -> RadialEffect {
        RadialEffect::from_u8(self.radial_effect.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_radial_effect(&self, effect: RadialEffect) {
        self.radial_effect.store(effect.as_u8(), Ordering::Relaxed);
    }

    pub fn set_rotation_speed(&self, speed: f64) -> Result<(), String> {
        validate_speed("Rotation speed", speed)?;
        self.rotation_speed.store(speed);
        Ok(())
    }

    pub fn set_gradient_speed(&self, speed: f64) -> Result<(), String> {
        validate_speed("Gradient speed", speed)?;
        self.gradient_speed.store(speed);
        Ok(())
    }

    /// Rejects zero so the per-frame wrap never sees an empty range
    pub fn set_radial_frequency(&self, frequency: f64) -> Result<(), String> {
        validate_frequency(frequency)?;
        self.radial_frequency.store(frequency);
        Ok(())
    }

    pub fn set_radial_size(&self, size: f64) -> Result<(), String> {
        validate_size(size)?;
        self.radial_size.store(size);
        Ok(())
    }

    pub fn set_audio_channel(&self, channel: usize) {
        self.audio_channel.store(channel, Ordering::Relaxed);
    }

    pub fn set_palette(&self, palette: usize) -> Result<(), String> {
        if palette >= self.palettes.len() {
            return Err(format!(
                "Palette {} out of range ({} palettes)",
                palette,
                self.palettes.len()
            ));
        }
        self.palette.store(palette, Ordering::Relaxed);
        Ok(())
    }
}

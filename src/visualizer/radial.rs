//! Radial dome visualizer: radar sweep, concentric pulse, spiral.

use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::sync::Arc;

use super::{InputId, Visualizer};
use crate::audio::{AudioInput, BeatSource, LastKnown};
use crate::color::Color;
use crate::geometry::{DomeGeometry, LedLayout};
use crate::math::{fold, map, map_wrap, wrap};
use crate::output::OutputSink;
use crate::params::{DomeVisualizerKind, RadialEffect, SharedConfig};

/// Lit-size fraction kept at silence so the pattern never vanishes
pub const MIN_ACTIVE_SIZE: f64 = 0.02;

/// Phases carried from frame to frame, each kept in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialState {
    pub current_angle: f64,
    pub current_gradient: f64,
    pub last_progress: f64,
}

impl Default for RadialState {
    fn default() -> Self {
        Self {
            current_angle: 0.0,
            current_gradient: 0.0,
            last_progress: 0.0,
        }
    }
}

impl RadialState {
    /// Advance both phases by how far the measure moved since last frame
    pub fn advance(&mut self, progress: f64, rotation_speed: f64, gradient_speed: f64) {
        let delta = wrap(progress - self.last_progress, 0.0, 1.0);
        self.current_angle = wrap(self.current_angle + rotation_speed * delta, 0.0, 1.0);
        self.current_gradient = wrap(self.current_gradient + gradient_speed * delta, 0.0, 1.0);
        self.last_progress = progress;
    }
}

/// Map one LED's polar position to `(folded, gradient_input)`.
///
/// `angle01` is the LED angle remapped to [0, 1]. `folded` is in [0, 1] and
/// the LED lights when it is at most the effective size.
pub fn radial_mapping(
    effect: RadialEffect,
    angle01: f64,
    distance: f64,
    current_angle: f64,
    frequency: f64,
) -> (f64, f64) {
    let (value, gradient_input) = match effect {
        RadialEffect::Radar => (
            map_wrap(angle01, current_angle, 1.0 + current_angle, 0.0, 1.0),
            distance,
        ),
        RadialEffect::Pulse => (
            map_wrap(distance, current_angle, 1.0 + current_angle, 0.0, 1.0),
            map(angle01, 0.0, 1.0, -1.0, 1.0).abs(),
        ),
        RadialEffect::Spiral => (
            map_wrap(
                angle01 + distance / frequency,
                current_angle,
                1.0 + current_angle,
                0.0,
                1.0,
            ),
            distance,
        ),
    };

    let value = wrap(value * frequency, 0.0, 1.0);
    (fold(value), gradient_input)
}

/// Audio-reactive radial patterns across every LED of the dome
pub struct DomeRadialVisualizer {
    config: Arc<SharedConfig>,
    audio: Arc<dyn AudioInput>,
    beat: Arc<dyn BeatSource>,
    geometry: Arc<DomeGeometry>,
    enabled: bool,
    state: RadialState,
    level: LastKnown,
    progress: LastKnown,
}

impl DomeRadialVisualizer {
    pub fn new(
        config: Arc<SharedConfig>,
        audio: Arc<dyn AudioInput>,
        beat: Arc<dyn BeatSource>,
        geometry: Arc<DomeGeometry>,
    ) -> Self {
        Self {
            config,
            audio,
            beat,
            geometry,
            enabled: true,
            state: RadialState::default(),
            level: LastKnown::new("audio level", 0.0),
            progress: LastKnown::new("measure progress", 0.0),
        }
    }

    pub fn state(&self) -> RadialState {
        self.state
    }
}

impl Visualizer for DomeRadialVisualizer {
    fn name(&self) -> &str {
        "dome-radial"
    }

    fn priority(&self) -> i32 {
        if self.config.active_visualizer() == DomeVisualizerKind::Radial {
            2
        } else {
            0
        }
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn required_inputs(&self) -> BTreeSet<InputId> {
        let channel = self.config.snapshot().audio_channel;
        [InputId::AudioLevel { channel }, InputId::MeasureProgress]
            .into_iter()
            .collect()
    }

    fn render(&mut self, sink: &mut OutputSink) {
        let cfg = self.config.snapshot();

        let progress = self.progress.update(self.beat.progress_through_measure());
        self.state
            .advance(progress, cfg.rotation_speed, cfg.gradient_speed);
        log::trace!(
            "Radial phases: angle {:.4}, gradient {:.4}",
            self.state.current_angle,
            self.state.current_gradient
        );

        let level = self
            .level
            .update(self.audio.level_for_channel(cfg.audio_channel));
        let adjusted = map(level, 0.0, 1.0, MIN_ACTIVE_SIZE, 1.0);
        let lit_size = cfg.radial_size * adjusted;

        let palettes = self.config.palettes();
        let geometry = &self.geometry;
        for strut in 0..geometry.strut_count() {
            for led in 0..geometry.led_count(strut) {
                let p = geometry.project(strut, led);
                let angle01 = map_wrap(p.angle, -PI, PI, 0.0, 1.0);
                let (folded, gradient_input) = radial_mapping(
                    cfg.radial_effect,
                    angle01,
                    p.distance,
                    self.state.current_angle,
                    cfg.radial_frequency,
                );

                let color = if folded <= lit_size {
                    palettes.gradient_color(
                        cfg.palette,
                        gradient_input,
                        self.state.current_gradient,
                        true,
                    )
                } else {
                    Color::OFF
                };
                sink.set_pixel(strut, led, color);
            }
        }
    }
}

//! Calibration pattern: lights the leading three quarters of every strut.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{InputId, Visualizer};
use crate::color::Color;
use crate::geometry::{DomeGeometry, LedLayout};
use crate::output::OutputSink;
use crate::params::{DomeVisualizerKind, SharedConfig};

/// Static white key showing strut direction, used when wiring the dome
pub struct StrutKeyVisualizer {
    config: Arc<SharedConfig>,
    geometry: Arc<DomeGeometry>,
    enabled: bool,
}

impl StrutKeyVisualizer {
    pub fn new(config: Arc<SharedConfig>, geometry: Arc<DomeGeometry>) -> Self {
        Self {
            config,
            geometry,
            enabled: true,
        }
    }

    /// Whether LED `led` of a strut with `led_count` LEDs is part of the key
    pub fn is_lit(led: usize, led_count: usize) -> bool {
        led < led_count * 3 / 4
    }
}

impl Visualizer for StrutKeyVisualizer {
    fn name(&self) -> &str {
        "strut-key"
    }

    fn priority(&self) -> i32 {
        if self.config.active_visualizer() == DomeVisualizerKind::StrutKey {
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
        BTreeSet::new()
    }

    fn render(&mut self, sink: &mut OutputSink) {
        for strut in 0..self.geometry.strut_count() {
            let count = self.geometry.led_count(strut);
            for led in 0..count {
                let color = if Self::is_lit(led, count) {
                    Color::WHITE
                } else {
                    Color::OFF
                };
                sink.set_pixel(strut, led, color);
            }
        }
    }
}

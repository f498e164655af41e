//! Volume meter for the rectangular LED panel.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{InputId, Visualizer};
use crate::audio::{AudioInput, LastKnown};
use crate::color::Color;
use crate::geometry::PanelGeometry;
use crate::output::OutputSink;

/// Dim grey used for lit meter columns
pub const METER_COLOR: Color = Color(0x11_11_11);

/// Lights `volume × columns` whole columns from the left edge
pub struct PanelVolumeVisualizer {
    audio: Arc<dyn AudioInput>,
    panel: PanelGeometry,
    enabled: bool,
    volume: LastKnown,
}

impl PanelVolumeVisualizer {
    /// Starts disabled; the operator switches it on when a panel is attached
    pub fn new(audio: Arc<dyn AudioInput>, panel: PanelGeometry) -> Self {
        Self {
            audio,
            panel,
            enabled: false,
            volume: LastKnown::new("volume", 0.0),
        }
    }

    /// Number of columns lit at `volume`
    pub fn lit_columns(&self, volume: f64) -> usize {
        let lit = (volume.max(0.0) * self.panel.columns as f64) as usize;
        lit.min(self.panel.columns)
    }
}

impl Visualizer for PanelVolumeVisualizer {
    fn name(&self) -> &str {
        "panel-volume"
    }

    fn priority(&self) -> i32 {
        1
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn required_inputs(&self) -> BTreeSet<InputId> {
        [InputId::Volume].into_iter().collect()
    }

    fn render(&mut self, sink: &mut OutputSink) {
        let volume = self.volume.update(self.audio.volume());
        let lit = self.lit_columns(volume);

        for column in 0..self.panel.columns {
            let color = if column < lit { METER_COLOR } else { Color::OFF };
            for row in 0..self.panel.rows {
                sink.set_pixel(column, row, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SharedAudioLevels;

    #[test]
    fn test_lit_columns_truncate() {
        let audio = Arc::new(SharedAudioLevels::new(1));
        let vis = PanelVolumeVisualizer::new(audio, PanelGeometry::default());
        assert_eq!(vis.lit_columns(0.0), 0);
        assert_eq!(vis.lit_columns(0.5), 15);
        assert_eq!(vis.lit_columns(0.99), 29);
        assert_eq!(vis.lit_columns(1.0), 30);
        assert_eq!(vis.lit_columns(3.0), 30);
    }

    #[test]
    fn test_starts_disabled_with_priority_one() {
        let audio = Arc::new(SharedAudioLevels::new(1));
        let vis = PanelVolumeVisualizer::new(audio, PanelGeometry::default());
        assert!(!vis.enabled());
        assert_eq!(vis.priority(), 1);
        assert!(vis.required_inputs().contains(&InputId::Volume));
    }
}

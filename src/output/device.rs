//! An LED device: its sink plus the visualizers competing for it.

use crate::geometry::LedLayout;
use crate::queue::CommandSender;
use crate::visualizer::{Arbiter, Visualizer};

/// Output device driven once per frame tick
pub struct OutputDevice {
    name: String,
    sink: super::OutputSink,
    arbiter: Arbiter,
}

impl OutputDevice {
    pub fn new<L: LedLayout + ?Sized>(name: impl Into<String>, layout: &L, queue: CommandSender) -> Self {
        let name = name.into();
        log::info!(
            "Output device '{}': {} struts, {} LEDs",
            name,
            layout.strut_count(),
            layout.total_leds()
        );
        Self {
            name,
            sink: super::OutputSink::new(layout, queue),
            arbiter: Arbiter::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn register_visualizer(&mut self, visualizer: Box<dyn Visualizer>) {
        self.arbiter.register(visualizer);
    }

    pub fn sink(&self) -> &super::OutputSink {
        &self.sink
    }

    /// Render one frame with the winning visualizer.
    ///
    /// Returns the name of the visualizer that rendered, or `None` when
    /// nothing is enabled (the device keeps its last frame).
    pub fn tick(&mut self) -> Option<String> {
        let visualizer = self.arbiter.active_mut()?;
        visualizer.visualize(&mut self.sink);
        Some(visualizer.name().to_string())
    }
}

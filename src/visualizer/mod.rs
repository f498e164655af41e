//! Visualizers: per-frame rendering logic competing for an output device.
//!
//! Each visualizer owns its phase state and reads shared configuration,
//! audio features and geometry through handles injected at construction.

mod arbiter;
mod panel_volume;
mod radial;
mod strut_key;

use std::collections::BTreeSet;

use crate::output::OutputSink;

pub use arbiter::Arbiter;
pub use panel_volume::PanelVolumeVisualizer;
pub use radial::{radial_mapping, DomeRadialVisualizer, RadialState, MIN_ACTIVE_SIZE};
pub use strut_key::StrutKeyVisualizer;

/// Live feature streams a visualizer can depend on
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputId {
    AudioLevel { channel: usize },
    Volume,
    MeasureProgress,
}

/// Capability set shared by every visualizer
pub trait Visualizer: Send {
    fn name(&self) -> &str;

    /// Higher wins arbitration among enabled visualizers
    fn priority(&self) -> i32;

    fn enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Feature streams this visualizer reads every frame
    fn required_inputs(&self) -> BTreeSet<InputId>;

    /// Compute one frame and write every LED into `sink`
    fn render(&mut self, sink: &mut OutputSink);

    /// Emit the end-of-frame sentinel after all pixels are written
    fn flush(&mut self, sink: &mut OutputSink) {
        sink.flush();
    }

    /// One full frame: render then flush
    fn visualize(&mut self, sink: &mut OutputSink) {
        self.render(sink);
        self.flush(sink);
    }
}

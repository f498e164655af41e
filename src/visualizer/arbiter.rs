//! Selection of the single visualizer that renders to a device each frame.

use super::Visualizer;

/// Owns the visualizers competing for one output device.
///
/// The winner is the enabled visualizer with the highest priority; ties go
/// to whichever was registered first.
#[derive(Default)]
pub struct Arbiter {
    visualizers: Vec<Box<dyn Visualizer>>,
    last_active: Option<usize>,
}

impl Arbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, visualizer: Box<dyn Visualizer>) {
        log::info!(
            "Registered visualizer '{}' (slot {})",
            visualizer.name(),
            self.visualizers.len()
        );
        self.visualizers.push(visualizer);
    }

    pub fn len(&self) -> usize {
        self.visualizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visualizers.is_empty()
    }

    /// Index of the visualizer that should render this frame
    pub fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (index, visualizer) in self.visualizers.iter().enumerate() {
            if !visualizer.enabled() {
                continue;
            }
            let priority = visualizer.priority();
            // Strictly greater keeps the earliest registration on ties
            if best.map_or(true, |(_, top)| priority > top) {
                best = Some((index, priority));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Resolve this frame's winner, logging when it changes
    pub fn active_mut(&mut self) -> Option<&mut Box<dyn Visualizer>> {
        let selected = self.select();
        if selected != self.last_active {
            match selected {
                Some(index) => log::debug!(
                    "Arbitration: '{}' is now active",
                    self.visualizers[index].name()
                ),
                None => log::debug!("Arbitration: no visualizer enabled"),
            }
            self.last_active = selected;
        }
        selected.map(move |index| &mut self.visualizers[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Visualizer>> {
        self.visualizers.get_mut(index)
    }
}

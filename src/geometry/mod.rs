//! LED geometry: where every addressable LED sits and its polar coordinates
//! relative to the dome centre.
//!
//! Geometry is computed once at startup and is read-only afterwards.

mod dome;
mod panel;
pub mod tables;

use glam::DVec2;

pub use dome::{to_screen, DomeGeometry, LED_PITCH_PX};
pub use panel::PanelGeometry;

/// A single addressable LED, identified by strut and position on the strut
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LedPoint {
    pub strut: usize,
    pub led: usize,
}

impl LedPoint {
    pub const fn new(strut: usize, led: usize) -> Self {
        Self { strut, led }
    }
}

/// Read-only projection of one LED
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Pixel-space position in the preview frame
    pub position: DVec2,
    /// Angle around the centre in radians, range (-π, π]
    pub angle: f64,
    /// Radial distance from the centre normalized by the dome radius, range [0, 1]
    pub distance: f64,
}

/// A strut between two vertices carrying a fixed number of LEDs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strut {
    pub start: usize,
    pub end: usize,
    pub led_count: usize,
}

/// Addressing scheme shared by every output device.
///
/// Panels reuse the same shape with columns as struts and rows as LEDs.
pub trait LedLayout {
    fn strut_count(&self) -> usize;

    /// Panics when `strut` is out of range
    fn led_count(&self, strut: usize) -> usize;

    fn total_leds(&self) -> usize {
        (0..self.strut_count()).map(|s| self.led_count(s)).sum()
    }

    fn contains(&self, point: LedPoint) -> bool {
        point.strut < self.strut_count() && point.led < self.led_count(point.strut)
    }

    /// Every LED in (strut, led) ascending order
    fn points(&self) -> Vec<LedPoint> {
        (0..self.strut_count())
            .flat_map(|strut| (0..self.led_count(strut)).map(move |led| LedPoint::new(strut, led)))
            .collect()
    }
}

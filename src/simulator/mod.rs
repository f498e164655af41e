//! Headless preview of the LED hardware.
//!
//! The simulator is a [`CommandConsumer`]: drained pixels land in a
//! working bitmap, and each publish copies it to the visible frame.

mod frame;
mod runner;

use glam::DVec2;

use crate::color::Color;
use crate::geometry::{DomeGeometry, LedLayout, PanelGeometry};
use crate::queue::CommandConsumer;

pub use frame::{Pixel, PreviewFrame};
pub use runner::{spawn, SimulatorHandle, SnapshotPolicy};

/// Side length of the preview bitmap in pixels
pub const PREVIEW_SIZE: u32 = 750;

/// Screen pixel of LED `led` on a strut running from `p1` to `p2`.
///
/// Steps back from `p1` in `(p1 - p2) / (n + 2)` increments, truncating
/// each component toward zero, so neither end LED sits on a vertex.
pub fn led_pixel(p1: DVec2, p2: DVec2, led: usize, led_count: usize) -> (i32, i32) {
    let delta = (p1 - p2) / (led_count + 2) as f64;
    let step = (led + 1) as f64;
    (
        p1.x as i32 - (delta.x * step) as i32,
        p1.y as i32 - (delta.y * step) as i32,
    )
}

/// Preview of a dome or panel, one bitmap pixel per LED
pub struct DomeSimulator {
    /// Bitmap coordinate of every LED, per strut
    led_pixels: Vec<Vec<(i32, i32)>>,
    working: PreviewFrame,
    visible: PreviewFrame,
    published: u64,
}

impl DomeSimulator {
    pub fn dome(geometry: &DomeGeometry) -> Self {
        let led_pixels = geometry
            .struts()
            .iter()
            .map(|strut| {
                let p1 = geometry.vertex(strut.start);
                let p2 = geometry.vertex(strut.end);
                (0..strut.led_count)
                    .map(|led| led_pixel(p1, p2, led, strut.led_count))
                    .collect()
            })
            .collect();
        Self::with_pixels(led_pixels)
    }

    /// Panel laid out as an evenly spaced grid, column = x
    pub fn panel(panel: &PanelGeometry) -> Self {
        let spacing = ((PREVIEW_SIZE - 20) / panel.columns.max(panel.rows).max(1) as u32).max(1) as i32;
        let led_pixels = (0..panel.strut_count())
            .map(|column| {
                (0..panel.led_count(column))
                    .map(|row| (10 + column as i32 * spacing, 10 + row as i32 * spacing))
                    .collect()
            })
            .collect();
        Self::with_pixels(led_pixels)
    }

    fn with_pixels(led_pixels: Vec<Vec<(i32, i32)>>) -> Self {
        Self {
            led_pixels,
            working: PreviewFrame::new(PREVIEW_SIZE, PREVIEW_SIZE),
            visible: PreviewFrame::new(PREVIEW_SIZE, PREVIEW_SIZE),
            published: 0,
        }
    }

    /// Bitmap coordinate of an LED
    pub fn led_position(&self, strut: usize, led: usize) -> (i32, i32) {
        assert!(
            strut < self.led_pixels.len() && led < self.led_pixels[strut].len(),
            "simulator has no LED at strut {} index {}",
            strut,
            led
        );
        self.led_pixels[strut][led]
    }

    /// Last published frame
    pub fn frame(&self) -> &PreviewFrame {
        &self.visible
    }

    /// Color shown for an LED in the last published frame
    pub fn led_color(&self, strut: usize, led: usize) -> Option<Pixel> {
        let (x, y) = self.led_position(strut, led);
        if x < 0 || y < 0 {
            return None;
        }
        self.visible.get(x as u32, y as u32)
    }

    pub fn published(&self) -> u64 {
        self.published
    }
}

impl CommandConsumer for DomeSimulator {
    fn set_pixel(&mut self, strut: usize, led: usize, color: Color) {
        let (x, y) = self.led_position(strut, led);
        if x >= 0 && y >= 0 {
            self.working.put(x as u32, y as u32, Pixel::from(color));
        }
    }

    fn publish(&mut self) {
        self.visible.clone_from(&self.working);
        self.published += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_pixel_truncates_toward_p1() {
        let p1 = DVec2::new(100.0, 100.0);
        let p2 = DVec2::new(0.0, 50.0);
        // delta = (100, 50) / 5 = (20, 10)
        assert_eq!(led_pixel(p1, p2, 0, 3), (80, 90));
        assert_eq!(led_pixel(p1, p2, 2, 3), (40, 70));

        // Truncation, not rounding: delta = 100 / 3
        let p2 = DVec2::new(0.0, 100.0);
        assert_eq!(led_pixel(p1, p2, 0, 1), (67, 100));
    }

    #[test]
    fn test_publish_makes_pixels_visible() {
        let geometry = DomeGeometry::geodesic();
        let mut sim = DomeSimulator::dome(&geometry);
        sim.set_pixel(0, 0, Color::from_rgb(10, 20, 30));
        assert_eq!(sim.led_color(0, 0), Some(Pixel::BLACK));

        sim.publish();
        assert_eq!(sim.published(), 1);
        assert_eq!(
            sim.led_color(0, 0),
            Some(Pixel {
                r: 10,
                g: 20,
                b: 30,
                a: 0xFF
            })
        );
    }

    #[test]
    fn test_dome_leds_land_inside_bitmap() {
        let geometry = DomeGeometry::geodesic();
        let sim = DomeSimulator::dome(&geometry);
        for point in geometry.points() {
            let (x, y) = sim.led_position(point.strut, point.led);
            assert!(x >= 0 && x < PREVIEW_SIZE as i32, "x {} out of bitmap", x);
            assert!(y >= 0 && y < PREVIEW_SIZE as i32, "y {} out of bitmap", y);
        }
    }

    #[test]
    fn test_panel_grid_spacing() {
        let sim = DomeSimulator::panel(&PanelGeometry::default());
        // 730 / 40 = 18 px pitch
        assert_eq!(sim.led_position(0, 0), (10, 10));
        assert_eq!(sim.led_position(1, 2), (28, 46));
    }

    #[test]
    #[should_panic(expected = "simulator has no LED")]
    fn test_unknown_led_panics() {
        let mut sim = DomeSimulator::panel(&PanelGeometry { columns: 1, rows: 1 });
        sim.set_pixel(0, 1, Color::WHITE);
    }

    #[test]
    #[should_panic(expected = "simulator has no LED at strut 3 index 0")]
    fn test_unknown_led_position_panics() {
        let sim = DomeSimulator::panel(&PanelGeometry { columns: 2, rows: 2 });
        sim.led_position(3, 0);
    }
}

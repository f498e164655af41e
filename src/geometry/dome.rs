//! Geodesic dome geometry with precomputed per-LED projections.

use glam::DVec2;

use super::tables::{CENTER_VERTEX, STRUTS, VERTICES};
use super::{LedLayout, LedPoint, Projection, Strut};

/// Pixel spacing between neighbouring LEDs on the preview frame
pub const LED_PITCH_PX: f64 = 3.0;

/// Map a design-unit vertex into the 750x750 preview frame (integer pixels)
pub fn to_screen(vertex: [i32; 2]) -> DVec2 {
    let x = ((vertex[0] - 70) as f64 / 557.0 * 700.0) as i32 + 10;
    let y = ((vertex[1] - 86) as f64 / 551.0 * 700.0) as i32 + 10;
    DVec2::new(x as f64, y as f64)
}

/// Immutable dome geometry: vertices, struts and one projection per LED
#[derive(Debug, Clone)]
pub struct DomeGeometry {
    vertices: Vec<DVec2>,
    struts: Vec<Strut>,
    center: DVec2,
    max_radius: f64,
    /// Index of each strut's first LED in `projections`
    offsets: Vec<usize>,
    projections: Vec<Projection>,
}

impl DomeGeometry {
    /// The built-in geodesic dome, mapped into preview pixel space.
    ///
    /// Each strut's LED count is derived from its on-screen length.
    pub fn geodesic() -> Self {
        let vertices: Vec<DVec2> = VERTICES.iter().copied().map(to_screen).collect();
        let struts = STRUTS
            .iter()
            .map(|&[start, end]| {
                let length = vertices[start].distance(vertices[end]);
                Strut {
                    start,
                    end,
                    led_count: ((length / LED_PITCH_PX).round() as usize).max(1),
                }
            })
            .collect();
        let center = vertices[CENTER_VERTEX];

        let geometry = Self::build(vertices, struts, center);
        log::info!(
            "Geodesic dome: {} struts, {} LEDs, radius {:.1}px",
            geometry.strut_count(),
            geometry.total_leds(),
            geometry.max_radius
        );
        geometry
    }

    /// Build geometry from caller-supplied tables.
    ///
    /// Every strut must reference existing vertices and carry at least one
    /// LED, and the vertices must not all sit on the centre.
    pub fn new(vertices: Vec<DVec2>, struts: Vec<Strut>, center: DVec2) -> Result<Self, String> {
        for (index, strut) in struts.iter().enumerate() {
            if strut.start >= vertices.len() || strut.end >= vertices.len() {
                return Err(format!(
                    "Strut {} references vertex outside 0..{}",
                    index,
                    vertices.len()
                ));
            }
            if strut.led_count == 0 {
                return Err(format!("Strut {} carries no LEDs", index));
            }
        }
        if !vertices.iter().any(|v| v.distance(center) > 0.0) {
            return Err("Dome radius must be > 0".to_string());
        }
        Ok(Self::build(vertices, struts, center))
    }

    fn build(vertices: Vec<DVec2>, struts: Vec<Strut>, center: DVec2) -> Self {
        let max_radius = vertices
            .iter()
            .map(|v| v.distance(center))
            .fold(0.0, f64::max);

        let mut offsets = Vec::with_capacity(struts.len());
        let mut projections = Vec::new();
        for strut in &struts {
            offsets.push(projections.len());
            let p1 = vertices[strut.start];
            let p2 = vertices[strut.end];
            // n + 2 divisions keep the first and last LED off the vertices
            let divisions = (strut.led_count + 2) as f64;
            for led in 0..strut.led_count {
                let position = p1 + (p2 - p1) * ((led + 1) as f64 / divisions);
                projections.push(project_point(position, center, max_radius));
            }
        }

        Self {
            vertices,
            struts,
            center,
            max_radius,
            offsets,
            projections,
        }
    }

    /// Projection of the LED at (`strut`, `led`).
    ///
    /// Out-of-range indices are a programming error and panic.
    pub fn project(&self, strut: usize, led: usize) -> Projection {
        self.assert_in_range(strut, led);
        self.projections[self.offsets[strut] + led]
    }

    /// Non-panicking lookup for callers holding untrusted indices
    pub fn projection(&self, point: LedPoint) -> Option<Projection> {
        if self.contains(point) {
            Some(self.projections[self.offsets[point.strut] + point.led])
        } else {
            None
        }
    }

    pub fn strut(&self, index: usize) -> Strut {
        assert!(
            index < self.struts.len(),
            "strut index {} out of range ({} struts)",
            index,
            self.struts.len()
        );
        self.struts[index]
    }

    pub fn struts(&self) -> &[Strut] {
        &self.struts
    }

    pub fn vertex(&self, index: usize) -> DVec2 {
        assert!(
            index < self.vertices.len(),
            "vertex index {} out of range ({} vertices)",
            index,
            self.vertices.len()
        );
        self.vertices[index]
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    fn assert_in_range(&self, strut: usize, led: usize) {
        assert!(
            strut < self.struts.len(),
            "strut index {} out of range ({} struts)",
            strut,
            self.struts.len()
        );
        let count = self.struts[strut].led_count;
        assert!(
            led < count,
            "LED index {} out of range on strut {} ({} LEDs)",
            led,
            strut,
            count
        );
    }
}

impl LedLayout for DomeGeometry {
    fn strut_count(&self) -> usize {
        self.struts.len()
    }

    fn led_count(&self, strut: usize) -> usize {
        self.strut(strut).led_count
    }
}

fn project_point(position: DVec2, center: DVec2, max_radius: f64) -> Projection {
    let offset = position - center;
    let mut angle = offset.y.atan2(offset.x);
    // atan2 can return -π exactly; fold it onto π
    if angle <= -std::f64::consts::PI {
        angle = std::f64::consts::PI;
    }
    let distance = (offset.length() / max_radius).clamp(0.0, 1.0);

    Projection {
        position,
        angle,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn single_strut(led_count: usize) -> DomeGeometry {
        // Horizontal strut from the centre out to the rim
        let vertices = vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)];
        let struts = vec![Strut {
            start: 0,
            end: 1,
            led_count,
        }];
        DomeGeometry::new(vertices, struts, DVec2::ZERO).unwrap()
    }

    #[test]
    fn test_geodesic_table_shape() {
        let dome = DomeGeometry::geodesic();
        assert_eq!(dome.strut_count(), 190);
        assert_eq!(dome.center(), to_screen(VERTICES[CENTER_VERTEX]));
        assert!(dome.max_radius() > 300.0);
        assert!(dome.struts().iter().all(|s| s.led_count >= 1));
    }

    #[test]
    fn test_screen_mapping_matches_preview_frame() {
        assert_eq!(to_screen([70, 86]), DVec2::new(10.0, 10.0));
        assert_eq!(to_screen([627, 637]), DVec2::new(710.0, 710.0));
    }

    #[test]
    fn test_leds_sit_strictly_inside_strut() {
        let dome = single_strut(3);
        // Five divisions: 2, 4, 6 px along a 10 px strut
        let xs: Vec<f64> = (0..3).map(|led| dome.project(0, led).position.x).collect();
        assert_eq!(xs, vec![2.0, 4.0, 6.0]);
        assert!((dome.project(0, 0).distance - 0.2).abs() < 1e-12);
        assert_eq!(dome.project(0, 2).angle, 0.0);
    }

    #[test]
    fn test_angle_and_distance_ranges() {
        let dome = DomeGeometry::geodesic();
        for point in dome.points() {
            let p = dome.project(point.strut, point.led);
            assert!(p.angle > -PI && p.angle <= PI, "angle {} at {:?}", p.angle, point);
            assert!((0.0..=1.0).contains(&p.distance), "distance {} at {:?}", p.distance, point);
        }
    }

    #[test]
    fn test_negative_x_axis_maps_to_pi() {
        let vertices = vec![DVec2::new(0.0, 0.0), DVec2::new(-10.0, 0.0)];
        let struts = vec![Strut {
            start: 0,
            end: 1,
            led_count: 1,
        }];
        let dome = DomeGeometry::new(vertices, struts, DVec2::ZERO).unwrap();
        assert_eq!(dome.project(0, 0).angle, PI);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let a = DomeGeometry::geodesic();
        let b = DomeGeometry::geodesic();
        assert_eq!(a.project(17, 0), a.project(17, 0));
        assert_eq!(a.project(17, 0), b.project(17, 0));
    }

    #[test]
    fn test_invalid_tables_rejected() {
        let vertices = vec![DVec2::ZERO, DVec2::new(1.0, 0.0)];
        let bad_vertex = vec![Strut {
            start: 0,
            end: 5,
            led_count: 1,
        }];
        assert!(DomeGeometry::new(vertices.clone(), bad_vertex, DVec2::ZERO).is_err());

        let no_leds = vec![Strut {
            start: 0,
            end: 1,
            led_count: 0,
        }];
        assert!(DomeGeometry::new(vertices, no_leds, DVec2::ZERO).is_err());
    }

    #[test]
    fn test_projection_lookup_is_checked() {
        let dome = single_strut(3);
        assert!(dome.projection(LedPoint::new(0, 2)).is_some());
        assert!(dome.projection(LedPoint::new(0, 3)).is_none());
        assert!(dome.projection(LedPoint::new(1, 0)).is_none());
    }

    #[test]
    #[should_panic(expected = "LED index 3 out of range")]
    fn test_out_of_range_led_panics() {
        single_strut(3).project(0, 3);
    }

    #[test]
    #[should_panic(expected = "vertex index 71 out of range (71 vertices)")]
    fn test_out_of_range_vertex_panics() {
        DomeGeometry::geodesic().vertex(71);
    }

    #[test]
    #[should_panic(expected = "strut index 190 out of range")]
    fn test_out_of_range_strut_panics() {
        DomeGeometry::geodesic().project(190, 0);
    }
}

//! Gradient ramps and the palette lookup used by visualizers.

use glam::Vec3;

use super::Color;
use crate::math;

/// Color ramp over `[0, 1]` defined by evenly spaced stops
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Build a gradient from at least one stop
    pub fn new(stops: Vec<Color>) -> Result<Self, String> {
        if stops.is_empty() {
            return Err("Gradient needs at least one color stop".to_string());
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Sample the ramp at `position`.
    ///
    /// Cyclic ramps treat the last stop as blending back into the first so
    /// that `0` and `1` meet seamlessly; open ramps clamp the position.
    pub fn sample(&self, position: f64, cyclic: bool) -> Color {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }

        let (from, to, t) = if cyclic {
            let scaled = math::wrap(position, 0.0, 1.0) * n as f64;
            let index = (scaled.floor() as usize).min(n - 1);
            let t = scaled - index as f64;
            // position == 1.0 lands on index n-1 with t == 1, blending into stop 0
            (self.stops[index], self.stops[(index + 1) % n], t)
        } else {
            let scaled = math::clamp(position, 0.0, 1.0) * (n - 1) as f64;
            let index = (scaled.floor() as usize).min(n - 2);
            let t = scaled - index as f64;
            (self.stops[index], self.stops[index + 1], t)
        };

        lerp(from, to, t as f32)
    }
}

fn to_vec3(color: Color) -> Vec3 {
    Vec3::new(color.r() as f32, color.g() as f32, color.b() as f32)
}

fn lerp(from: Color, to: Color, t: f32) -> Color {
    let mixed = to_vec3(from).lerp(to_vec3(to), t).round();
    let mixed = mixed.clamp(Vec3::ZERO, Vec3::splat(255.0));
    Color::from_rgb(mixed.x as u8, mixed.y as u8, mixed.z as u8)
}

/// Preconfigured gradients selected by palette id
#[derive(Debug, Clone, PartialEq)]
pub struct Palettes {
    gradients: Vec<Gradient>,
}

impl Default for Palettes {
    fn default() -> Self {
        let sunset = Gradient {
            stops: vec![Color(0xFF2000), Color(0xFF8000), Color(0xFF0060)],
        };
        let ocean = Gradient {
            stops: vec![Color(0x0020FF), Color(0x00C0FF), Color(0x00FF80)],
        };
        Self {
            gradients: vec![sunset, ocean],
        }
    }
}

impl Palettes {
    pub fn new(gradients: Vec<Gradient>) -> Result<Self, String> {
        if gradients.is_empty() {
            return Err("At least one gradient palette is required".to_string());
        }
        Ok(Self { gradients })
    }

    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Look up a raw (unnormalized) color along palette `palette_id`.
    ///
    /// The ramp is indexed by `position + offset`; with `wrap` the sum is
    /// wrapped into `[0, 1]` and the ramp is cyclic, otherwise it is clamped.
    /// Unknown palette ids fall back to palette 0.
    pub fn gradient_color(&self, palette_id: usize, position: f64, offset: f64, wrap: bool) -> Color {
        let gradient = match self.gradients.get(palette_id) {
            Some(gradient) => gradient,
            None => {
                log::debug!("Unknown palette {}, using palette 0", palette_id);
                &self.gradients[0]
            }
        };

        let position = position + offset;
        if wrap {
            gradient.sample(math::wrap(position, 0.0, 1.0), true)
        } else {
            gradient.sample(position, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop() -> Gradient {
        Gradient::new(vec![Color(0x000000), Color(0xFF0000)]).unwrap()
    }

    #[test]
    fn test_empty_gradient_rejected() {
        assert!(Gradient::new(vec![]).is_err());
        assert!(Palettes::new(vec![]).is_err());
    }

    #[test]
    fn test_open_ramp_endpoints_and_clamp() {
        let g = two_stop();
        assert_eq!(g.sample(0.0, false), Color(0x000000));
        assert_eq!(g.sample(1.0, false), Color(0xFF0000));
        assert_eq!(g.sample(3.0, false), Color(0xFF0000));
        assert_eq!(g.sample(-1.0, false), Color(0x000000));
        assert_eq!(g.sample(0.5, false).r(), 128);
    }

    #[test]
    fn test_cyclic_ramp_meets_itself() {
        let g = two_stop();
        // Halfway round a two-stop cycle is the second stop
        assert_eq!(g.sample(0.5, true), Color(0xFF0000));
        assert_eq!(g.sample(0.0, true), g.sample(1.0, true));
    }

    #[test]
    fn test_offset_is_wrapped() {
        let palettes = Palettes::new(vec![two_stop()]).unwrap();
        let a = palettes.gradient_color(0, 0.75, 0.5, true);
        let b = palettes.gradient_color(0, 0.25, 0.0, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_palette_falls_back_to_first() {
        let palettes = Palettes::default();
        assert_eq!(
            palettes.gradient_color(99, 0.3, 0.1, true),
            palettes.gradient_color(0, 0.3, 0.1, true)
        );
    }

    #[test]
    fn test_single_stop_is_constant() {
        let g = Gradient::new(vec![Color(0x123456)]).unwrap();
        assert_eq!(g.sample(0.7, true), Color(0x123456));
        assert_eq!(g.sample(0.7, false), Color(0x123456));
    }
}

//! Dome visualizer tunables.

use clap::ValueEnum;

use crate::color::Palettes;

/// Mapping policy of the radial visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RadialEffect {
    /// Sweep rotating around the centre; color by distance
    #[default]
    Radar,
    /// Rings travelling outwards; color by angle
    Pulse,
    /// Arms twisting with distance; color by distance
    Spiral,
}

impl RadialEffect {
    pub const fn as_u8(self) -> u8 {
        match self {
            RadialEffect::Radar => 0,
            RadialEffect::Pulse => 1,
            RadialEffect::Spiral => 2,
        }
    }

    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(RadialEffect::Radar),
            1 => Some(RadialEffect::Pulse),
            2 => Some(RadialEffect::Spiral),
            _ => None,
        }
    }
}

/// Which dome visualizer the configuration surface has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DomeVisualizerKind {
    /// Light the first three quarters of each strut to show its direction
    StrutKey,
    #[default]
    Radial,
}

impl DomeVisualizerKind {
    pub const fn as_u8(self) -> u8 {
        match self {
            DomeVisualizerKind::StrutKey => 0,
            DomeVisualizerKind::Radial => 1,
        }
    }

    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(DomeVisualizerKind::StrutKey),
            1 => Some(DomeVisualizerKind::Radial),
            _ => None,
        }
    }
}

/// Dome tunables as set at startup
#[derive(Debug, Clone)]
pub struct DomeParams {
    /// Visualizer that wins arbitration on the dome
    pub active_visualizer: DomeVisualizerKind,

    /// Rotation of the radial reference per measure (turns per measure)
    pub rotation_speed: f64,

    /// Drift of the gradient offset per measure (ramps per measure)
    pub gradient_speed: f64,

    /// Radial mapping policy
    pub radial_effect: RadialEffect,

    /// Number of rings/arms per turn; must be non-zero
    pub radial_frequency: f64,

    /// Lit fraction of each ring at full audio level, range [0, 1]
    pub radial_size: f64,

    /// Audio channel driving the active size
    pub audio_channel: usize,

    /// Palette used for lit LEDs
    pub palette: usize,

    /// Preconfigured gradients, fixed after startup
    pub palettes: Palettes,
}

impl Default for DomeParams {
    fn default() -> Self {
        Self {
            active_visualizer: DomeVisualizerKind::Radial,
            rotation_speed: 0.25,
            gradient_speed: 0.125,
            radial_effect: RadialEffect::Radar,
            radial_frequency: 1.0,
            radial_size: 0.5,
            audio_channel: 0,
            palette: 0,
            palettes: Palettes::default(),
        }
    }
}

impl DomeParams {
    /// Validate configuration (non-zero frequency, sizes in range, etc.)
    pub fn validate(&self) -> Result<(), String> {
        validate_speed("Rotation speed", self.rotation_speed)?;
        validate_speed("Gradient speed", self.gradient_speed)?;
        validate_frequency(self.radial_frequency)?;
        validate_size(self.radial_size)?;
        if self.palettes.is_empty() {
            return Err("At least one gradient palette is required".to_string());
        }
        if self.palette >= self.palettes.len() {
            return Err(format!(
                "Palette {} out of range ({} palettes)",
                self.palette,
                self.palettes.len()
            ));
        }
        Ok(())
    }
}

pub(super) fn validate_speed(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be finite, got {}", name, value));
    }
    Ok(())
}

pub(super) fn validate_frequency(value: f64) -> Result<(), String> {
    if !value.is_finite() || value == 0.0 {
        return Err(format!(
            "Radial frequency must be finite and non-zero, got {}",
            value
        ));
    }
    Ok(())
}

pub(super) fn validate_size(value: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("Radial size must be in [0, 1], got {}", value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DomeParams::default().validate().is_ok());
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let params = DomeParams {
            radial_frequency: 0.0,
            ..DomeParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_size_and_palette_ranges() {
        let oversized = DomeParams {
            radial_size: 1.5,
            ..DomeParams::default()
        };
        assert!(oversized.validate().is_err());

        let bad_palette = DomeParams {
            palette: 7,
            ..DomeParams::default()
        };
        assert!(bad_palette.validate().is_err());

        let nan_speed = DomeParams {
            rotation_speed: f64::NAN,
            ..DomeParams::default()
        };
        assert!(nan_speed.validate().is_err());
    }

    #[test]
    fn test_enum_round_trip() {
        for effect in [RadialEffect::Radar, RadialEffect::Pulse, RadialEffect::Spiral] {
            assert_eq!(RadialEffect::from_u8(effect.as_u8()), Some(effect));
        }
        assert_eq!(RadialEffect::from_u8(3), None);
        assert_eq!(
            DomeVisualizerKind::from_u8(DomeVisualizerKind::StrutKey.as_u8()),
            Some(DomeVisualizerKind::StrutKey)
        );
    }
}

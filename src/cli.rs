//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{DeviceKind, DomeParams, DomeVisualizerKind, RadialEffect, SessionConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "domelight")]
#[command(about = "Audio-reactive LED dome renderer with headless preview", long_about = None)]
pub struct Args {
    /// Device to render to
    #[arg(long, value_enum, default_value_t = DeviceKind::Dome)]
    pub device: DeviceKind,

    /// Dome visualizer that wins arbitration
    #[arg(long, value_enum, default_value_t = DomeVisualizerKind::Radial)]
    pub visualizer: DomeVisualizerKind,

    /// Radial effect shape
    #[arg(long, value_enum, default_value_t = RadialEffect::Radar)]
    pub effect: RadialEffect,

    /// Pattern repetitions around the dome (non-zero)
    #[arg(long, value_name = "N", default_value_t = 1.0, allow_negative_numbers = true)]
    pub frequency: f64,

    /// Lit fraction of each pattern period at full level, 0-1
    #[arg(long, value_name = "FRACTION", default_value_t = 0.5)]
    pub size: f64,

    /// Rotation per measure (turns)
    #[arg(long, value_name = "TURNS", default_value_t = 0.25, allow_negative_numbers = true)]
    pub rotation_speed: f64,

    /// Gradient drift per measure (palette lengths)
    #[arg(long, value_name = "CYCLES", default_value_t = 0.125, allow_negative_numbers = true)]
    pub gradient_speed: f64,

    /// Palette index (0 = sunset, 1 = ocean)
    #[arg(long, default_value_t = 0)]
    pub palette: usize,

    /// Audio channel feeding the radial level
    #[arg(long, default_value_t = 0)]
    pub audio_channel: usize,

    /// Tempo of the beat clock
    #[arg(long, default_value_t = 120.0)]
    pub bpm: f64,

    #[arg(long, default_value_t = 4)]
    pub beats_per_measure: u32,

    /// Frame ticks to run before exiting
    #[arg(long, default_value_t = 1000)]
    pub frames: usize,

    /// Frame tick period
    #[arg(long, value_name = "MS", default_value_t = 10)]
    pub tick_ms: u64,

    /// Directory for preview PNGs
    #[arg(long, value_name = "DIR", default_value = "frames")]
    pub output_dir: PathBuf,

    /// Save every Nth published preview frame (0 = never)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub snapshot_every: usize,

    /// Meter the default input device instead of the synthetic beat envelope
    #[arg(long)]
    pub live_audio: bool,
}

impl Args {
    /// Dome parameters selected on the command line
    pub fn to_params(&self) -> DomeParams {
        DomeParams {
            active_visualizer: self.visualizer,
            rotation_speed: self.rotation_speed,
            gradient_speed: self.gradient_speed,
            radial_effect: self.effect,
            radial_frequency: self.frequency,
            radial_size: self.size,
            audio_channel: self.audio_channel,
            palette: self.palette,
            ..DomeParams::default()
        }
    }

    pub fn to_session(&self) -> SessionConfig {
        SessionConfig {
            tick_ms: self.tick_ms,
            frames: self.frames,
            bpm: self.bpm,
            beats_per_measure: self.beats_per_measure,
            device: self.device,
            output_dir: self.output_dir.clone(),
            snapshot_every: self.snapshot_every,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["domelight"]);
        let params = args.to_params();
        let defaults = DomeParams::default();
        assert_eq!(params.rotation_speed, defaults.rotation_speed);
        assert_eq!(params.radial_size, defaults.radial_size);
        assert_eq!(params.radial_effect, RadialEffect::Radar);
        assert!(params.validate().is_ok());
        assert!(args.to_session().validate().is_ok());
    }

    #[test]
    fn test_parse_effect_and_device() {
        let args = Args::parse_from([
            "domelight",
            "--effect",
            "spiral",
            "--device",
            "panel",
            "--frequency",
            "-2",
            "--visualizer",
            "strut-key",
        ]);
        assert_eq!(args.effect, RadialEffect::Spiral);
        assert_eq!(args.device, DeviceKind::Panel);
        assert_eq!(args.frequency, -2.0);
        assert_eq!(args.visualizer, DomeVisualizerKind::StrutKey);
    }
}

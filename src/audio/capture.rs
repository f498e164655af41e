//! Live channel levels from the default audio input device.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::Arc;

use super::SharedAudioLevels;

/// Input stream that keeps [`SharedAudioLevels`] up to date
pub struct LevelMeter {
    levels: Arc<SharedAudioLevels>,

    /// Audio input stream (kept alive)
    _stream: cpal::Stream,
}

impl LevelMeter {
    /// Open the default input device and start metering into a fresh level set
    pub fn start() -> Result<Self, String> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or("No audio input device found")?;

        let supported = device
            .default_input_config()
            .map_err(|e| format!("Failed to get audio config: {}", e))?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(format!(
                "Unsupported sample format {:?}, need f32",
                supported.sample_format()
            ));
        }

        let channels = supported.channels() as usize;
        if channels == 0 {
            return Err("Audio device reported 0 channels".to_string());
        }

        log::info!(
            "Audio input: {} @ {}Hz, {} channels",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            supported.sample_rate().0,
            channels
        );

        let levels = Arc::new(SharedAudioLevels::new(channels));
        let levels_callback = Arc::clone(&levels);
        let levels_error = Arc::clone(&levels);

        let stream = device
            .build_input_stream(
                &supported.into(),
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    meter_block(data, channels, &levels_callback);
                },
                move |err| {
                    log::error!("Audio stream error: {}", err);
                    levels_error.set_available(false);
                },
                None,
            )
            .map_err(|e| format!("Failed to build audio stream: {}", e))?;

        stream
            .play()
            .map_err(|e| format!("Failed to start audio stream: {}", e))?;

        Ok(Self {
            levels,
            _stream: stream,
        })
    }

    pub fn levels(&self) -> Arc<SharedAudioLevels> {
        Arc::clone(&self.levels)
    }
}

/// RMS per channel over one interleaved callback block, scaled so a
/// full-scale sine reads 1.0
fn meter_block(data: &[f32], channels: usize, levels: &SharedAudioLevels) {
    let frames = data.len() / channels;
    if frames == 0 {
        return;
    }

    let mut loudest = 0.0f64;
    for channel in 0..channels {
        let sum_sq: f64 = data
            .iter()
            .skip(channel)
            .step_by(channels)
            .map(|&s| (s as f64) * (s as f64))
            .sum();
        let rms = (sum_sq / frames as f64).sqrt() * std::f64::consts::SQRT_2;
        levels.set_level(channel, rms);
        loudest = loudest.max(rms);
    }
    levels.set_volume(loudest);
    levels.set_available(true);
}

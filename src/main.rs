//! Domelight - renders audio-reactive patterns onto a geodesic LED dome
//!
//! Runs the frame tick against a headless preview of the hardware, which
//! drains the pixel command queue on its own thread and can snapshot
//! frames to PNG.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use domelight::audio::{AudioInput, BeatEnvelope, BeatSource, TempoClock};
use domelight::cli::Args;
use domelight::geometry::{DomeGeometry, PanelGeometry};
use domelight::output::OutputDevice;
use domelight::params::{DeviceKind, SessionConfig, SharedConfig};
use domelight::queue::CommandQueue;
use domelight::simulator::{self, DomeSimulator, SnapshotPolicy};
use domelight::visualizer::{DomeRadialVisualizer, PanelVolumeVisualizer, StrutKeyVisualizer, Visualizer};

#[cfg(feature = "live-audio")]
type AudioGuard = Option<domelight::audio::LevelMeter>;
#[cfg(not(feature = "live-audio"))]
type AudioGuard = ();

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let params = args.to_params();
    params
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid dome parameters")?;
    let session = args.to_session();
    session
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid session configuration")?;

    info!(
        "Starting domelight: {:?} device, {} frames at {} ms",
        session.device, session.frames, session.tick_ms
    );

    let config = Arc::new(SharedConfig::from_params(&params));
    let beat: Arc<dyn BeatSource> = Arc::new(TempoClock::new(session.bpm, session.beats_per_measure));
    let (audio, _audio_guard) = open_audio(&args, &session, &beat)?;

    let queue = CommandQueue::new();
    let (mut device, preview) = build_device(&session, &config, &audio, &beat, &queue);

    let snapshots = if session.snapshot_every > 0 {
        std::fs::create_dir_all(&session.output_dir).with_context(|| {
            format!("Failed to create output directory {}", session.output_dir.display())
        })?;
        Some(SnapshotPolicy {
            dir: session.output_dir.clone(),
            every: session.snapshot_every as u64,
        })
    } else {
        None
    };

    let tick = Duration::from_millis(session.tick_ms);
    let preview = simulator::spawn(&queue, preview, tick, snapshots);

    let started = Instant::now();
    let mut rendered = 0usize;
    for _ in 0..session.frames {
        let frame_start = Instant::now();
        if device.tick().is_some() {
            rendered += 1;
        }
        let spent = frame_start.elapsed();
        if spent > tick {
            warn!("Frame took {:?}, longer than the {:?} tick", spent, tick);
        }
        thread::sleep(tick.saturating_sub(spent));
    }

    let preview = preview.stop().map_err(anyhow::Error::msg)?;
    info!(
        "Device '{}' rendered {} of {} ticks in {:.2}s; preview published {} frames",
        device.name(),
        rendered,
        session.frames,
        started.elapsed().as_secs_f64(),
        preview.published()
    );

    Ok(())
}

#[cfg(feature = "live-audio")]
fn open_audio(
    args: &Args,
    session: &SessionConfig,
    beat: &Arc<dyn BeatSource>,
) -> anyhow::Result<(Arc<dyn AudioInput>, AudioGuard)> {
    if args.live_audio {
        let meter = domelight::audio::LevelMeter::start()
            .map_err(anyhow::Error::msg)
            .context("Failed to open live audio input")?;
        let levels: Arc<dyn AudioInput> = meter.levels();
        return Ok((levels, Some(meter)));
    }
    Ok((synthetic_audio(session, beat), None))
}

#[cfg(not(feature = "live-audio"))]
fn open_audio(
    args: &Args,
    session: &SessionConfig,
    beat: &Arc<dyn BeatSource>,
) -> anyhow::Result<(Arc<dyn AudioInput>, AudioGuard)> {
    if args.live_audio {
        anyhow::bail!("--live-audio needs a build with the `live-audio` feature");
    }
    Ok((synthetic_audio(session, beat), ()))
}

fn synthetic_audio(session: &SessionConfig, beat: &Arc<dyn BeatSource>) -> Arc<dyn AudioInput> {
    info!("Audio: synthetic beat envelope at {} BPM", session.bpm);
    Arc::new(BeatEnvelope::new(Arc::clone(beat), session.beats_per_measure))
}

fn build_device(
    session: &SessionConfig,
    config: &Arc<SharedConfig>,
    audio: &Arc<dyn AudioInput>,
    beat: &Arc<dyn BeatSource>,
    queue: &CommandQueue,
) -> (OutputDevice, DomeSimulator) {
    match session.device {
        DeviceKind::Dome => {
            let geometry = Arc::new(DomeGeometry::geodesic());
            let mut device = OutputDevice::new("dome", geometry.as_ref(), queue.sender());
            device.register_visualizer(Box::new(DomeRadialVisualizer::new(
                Arc::clone(config),
                Arc::clone(audio),
                Arc::clone(beat),
                Arc::clone(&geometry),
            )));
            device.register_visualizer(Box::new(StrutKeyVisualizer::new(
                Arc::clone(config),
                Arc::clone(&geometry),
            )));
            (device, DomeSimulator::dome(&geometry))
        }
        DeviceKind::Panel => {
            let panel = PanelGeometry::default();
            let mut device = OutputDevice::new("panel", &panel, queue.sender());
            let mut meter = PanelVolumeVisualizer::new(Arc::clone(audio), panel);
            meter.set_enabled(true);
            device.register_visualizer(Box::new(meter));
            (device, DomeSimulator::panel(&panel))
        }
    }
}

//! Background thread that drains the command queue into a simulator.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::DomeSimulator;
use crate::queue::{drain_into, CommandQueue};

/// Where and how often published frames are written as PNGs
#[derive(Debug, Clone)]
pub struct SnapshotPolicy {
    pub dir: PathBuf,
    /// Save every Nth published frame
    pub every: u64,
}

impl SnapshotPolicy {
    pub fn path_for(&self, frame: u64) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", frame))
    }
}

/// Running simulator thread
pub struct SimulatorHandle {
    stop: Arc<AtomicBool>,
    thread: JoinHandle<DomeSimulator>,
}

impl SimulatorHandle {
    /// Signal the thread, wait for its final drain, and take the simulator back
    pub fn stop(self) -> Result<DomeSimulator, String> {
        self.stop.store(true, Ordering::Release);
        self.thread
            .join()
            .map_err(|_| "Simulator thread panicked".to_string())
    }
}

/// Claim the queue's drainer and drain it into `simulator` every `tick`.
///
/// The claim happens on the calling thread, so a second consumer on the
/// same queue panics here rather than inside the worker.
pub fn spawn(
    queue: &CommandQueue,
    mut simulator: DomeSimulator,
    tick: Duration,
    snapshots: Option<SnapshotPolicy>,
) -> SimulatorHandle {
    let mut drainer = queue.drainer();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_thread = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let mut saved_up_to = 0;
        loop {
            // Read the flag first so the last drain sees everything queued
            // before stop was requested
            let stopping = stop_thread.load(Ordering::Acquire);

            let started = Instant::now();
            let stats = drain_into(&mut drainer, &mut simulator);
            if stats.commands > 0 {
                log::debug!("Simulator drain took {:?}", started.elapsed());
            }

            if let Some(policy) = &snapshots {
                let published = simulator.published();
                if policy.every > 0 && published / policy.every > saved_up_to / policy.every {
                    let path = policy.path_for(published);
                    match simulator.frame().save_png(&path) {
                        Ok(()) => log::debug!("Saved {}", path.display()),
                        Err(e) => log::warn!("{}", e),
                    }
                }
                saved_up_to = published;
            }

            if stopping {
                break;
            }
            thread::sleep(tick);
        }
        log::info!("Simulator stopped after {} frames", simulator.published());
        simulator
    });

    SimulatorHandle { stop, thread }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::PanelGeometry;
    use crate::queue::PixelCommand;

    #[test]
    fn test_stop_drains_remaining_commands() {
        let queue = CommandQueue::new();
        let sim = DomeSimulator::panel(&PanelGeometry { columns: 2, rows: 2 });
        let handle = spawn(&queue, sim, Duration::from_millis(1), None);

        queue.enqueue(PixelCommand::SetPixel {
            strut: 1,
            led: 1,
            color: Color::WHITE,
        });
        queue.enqueue(PixelCommand::Flush);

        let sim = handle.stop().unwrap();
        assert_eq!(sim.published(), 1);
        assert_eq!(sim.led_color(1, 1).map(|p| p.r), Some(0xFF));
        assert!(queue.is_empty());
        assert!(!queue.is_draining());
    }

    #[test]
    #[should_panic(expected = "someone else is draining")]
    fn test_second_consumer_panics() {
        let queue = CommandQueue::new();
        let _first = queue.drainer();
        spawn(
            &queue,
            DomeSimulator::panel(&PanelGeometry::default()),
            Duration::from_millis(1),
            None,
        );
    }

    #[test]
    fn test_snapshot_path_format() {
        let policy = SnapshotPolicy {
            dir: PathBuf::from("out"),
            every: 10,
        };
        assert_eq!(policy.path_for(7), PathBuf::from("out/frame_00007.png"));
    }
}

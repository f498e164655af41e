//! Applying drained batches to a consumer's own representation.

use super::{Drainer, PixelCommand};
use crate::color::Color;

/// Anything that turns pixel commands into visible output: a hardware
/// transport, the preview simulator, or a test recorder.
pub trait CommandConsumer {
    /// Store one pixel in the consumer's local buffer
    fn set_pixel(&mut self, strut: usize, led: usize, color: Color);

    /// Make the local buffer visible
    fn publish(&mut self);
}

/// What a single drain did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainStats {
    pub commands: usize,
    pub publishes: usize,
}

/// Drain the current snapshot into `consumer`, in enqueue order.
///
/// The buffer is published at every `Flush`, and once more at the end of
/// the batch if pixels were written after the last publish.
pub fn drain_into<C>(drainer: &mut Drainer, consumer: &mut C) -> DrainStats
where
    C: CommandConsumer + ?Sized,
{
    let batch = drainer.drain_all();
    let mut stats = DrainStats {
        commands: batch.len(),
        publishes: 0,
    };

    let mut dirty = false;
    for command in batch {
        match command {
            PixelCommand::SetPixel { strut, led, color } => {
                consumer.set_pixel(strut, led, color);
                dirty = true;
            }
            PixelCommand::Flush => {
                consumer.publish();
                stats.publishes += 1;
                dirty = false;
            }
        }
    }
    if dirty {
        consumer.publish();
        stats.publishes += 1;
    }

    if stats.commands > 0 {
        log::debug!(
            "Drained {} commands, {} publishes",
            stats.commands,
            stats.publishes
        );
    }
    stats
}

//! Ordered pixel command queue between the render thread and its consumer.
//!
//! Any number of producers may enqueue through [`CommandSender`] handles.
//! Exactly one [`Drainer`] may exist at a time; claiming a second one is a
//! wiring bug and panics.

mod consumer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::color::Color;

pub use consumer::{drain_into, CommandConsumer, DrainStats};

/// A single update travelling from a sink to its consumer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelCommand {
    SetPixel { strut: usize, led: usize, color: Color },
    /// Publish every pixel written since the previous flush as one update
    Flush,
}

impl PixelCommand {
    pub fn is_flush(&self) -> bool {
        matches!(self, PixelCommand::Flush)
    }
}

struct Shared {
    sender: Sender<PixelCommand>,
    receiver: Receiver<PixelCommand>,
    draining: AtomicBool,
}

/// Unbounded FIFO of [`PixelCommand`]s, cheap to clone and share
#[derive(Clone)]
pub struct CommandQueue {
    shared: Arc<Shared>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            shared: Arc::new(Shared {
                sender,
                receiver,
                draining: AtomicBool::new(false),
            }),
        }
    }

    /// Producer handle; enqueueing never blocks
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            sender: self.shared.sender.clone(),
        }
    }

    pub fn enqueue(&self, command: PixelCommand) {
        // The queue owns a receiver, so this cannot disconnect
        let _ = self.shared.sender.send(command);
    }

    pub fn len(&self) -> usize {
        self.shared.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.receiver.is_empty()
    }

    pub fn is_draining(&self) -> bool {
        self.shared.draining.load(Ordering::Acquire)
    }

    /// Claim the exclusive consumer handle.
    ///
    /// # Panics
    /// If another [`Drainer`] is still alive: two consumers on one queue is
    /// always a configuration defect.
    pub fn drainer(&self) -> Drainer {
        if self.shared.draining.swap(true, Ordering::AcqRel) {
            panic!("someone else is draining the command queue");
        }
        Drainer {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Claim, drain the current snapshot, and release in one step
    pub fn drain_all(&self) -> Vec<PixelCommand> {
        self.drainer().drain_all()
    }
}

/// Cloneable producer end of a [`CommandQueue`]
#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<PixelCommand>,
}

impl CommandSender {
    pub fn enqueue(&self, command: PixelCommand) {
        if self.sender.send(command).is_err() {
            log::debug!("Command queue dropped, discarding {:?}", command);
        }
    }
}

/// Exclusive consumer end of a [`CommandQueue`]; releases its claim on drop
pub struct Drainer {
    shared: Arc<Shared>,
}

impl Drainer {
    /// Dequeue exactly the commands present when the drain starts, in
    /// enqueue order. Commands enqueued meanwhile wait for the next drain.
    ///
    /// # Panics
    /// If a command observed at the start vanishes before it is dequeued,
    /// which means some other receiver is stealing from the queue.
    pub fn drain_all(&mut self) -> Vec<PixelCommand> {
        let pending = self.shared.receiver.len();
        let mut batch = Vec::with_capacity(pending);
        for _ in 0..pending {
            match self.shared.receiver.try_recv() {
                Ok(command) => batch.push(command),
                Err(_) => panic!("someone else is dequeueing from the command queue"),
            }
        }
        batch
    }

    pub fn pending(&self) -> usize {
        self.shared.receiver.len()
    }
}

impl Drop for Drainer {
    fn drop(&mut self) {
        self.shared.draining.store(false, Ordering::Release);
    }
}

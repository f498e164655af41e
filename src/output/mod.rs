//! Output side of the render pipeline.

mod device;
mod sink;

pub use device::OutputDevice;
pub use sink::OutputSink;

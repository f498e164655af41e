//! Parameter definitions with units and documented semantics.
//!
//! Every tunable lives here with:
//! - Its unit (measures, milliseconds, beats per minute)
//! - Its valid range, checked by `validate()`
//! - A `Default` matching the values the dome runs with

mod dome;
mod session;
mod shared;

// Re-export all types
pub use dome::{DomeParams, DomeVisualizerKind, RadialEffect};
pub use session::{DeviceKind, SessionConfig};
pub use shared::{ConfigSnapshot, SharedConfig};

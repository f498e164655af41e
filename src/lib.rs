//! Domelight library - audio-reactive LED dome render pipeline

pub(crate) mod atomic;
pub mod audio;
pub mod cli;
pub mod color;
pub mod geometry;
pub mod math;
pub mod output;
pub mod params;
pub mod queue;
pub mod simulator;
pub mod visualizer;

//! Pane engine crate.
//!
//! Platform-agnostic core of the sketch presentation layer: the contracts
//! between sketches and host surfaces, input events, frame pacing, and the
//! frame scheduler that drives a sketch on its own thread.

pub mod core;
pub mod input;
pub mod scheduler;
pub mod time;

pub mod logging;

pub use crate::core::{HostSurface, Sketch};
pub use scheduler::{FrameScheduler, SchedulerConfig, SchedulerError, SchedulerStatus};

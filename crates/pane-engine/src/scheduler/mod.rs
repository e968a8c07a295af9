//! Frame scheduler.
//!
//! Runs a sketch's draw step on a dedicated thread at a target rate, with
//! cooperative pause/resume and stop/restart. Each start creates a fresh
//! execution context; a stopped context is detached and exits on its own the
//! next time it checks whether it is still current.

mod config;
mod context;
mod error;
mod frame_scheduler;
mod state;

pub use config::SchedulerConfig;
pub use error::SchedulerError;
pub use frame_scheduler::FrameScheduler;
pub use state::SchedulerStatus;

//! Time subsystem.
//!
//! Frame pacing for fixed-rate loops, kept free of threads so it can be
//! driven and tested with synthetic timestamps.
//! Intended usage:
//! - one `FramePacer` per execution context
//! - call `after_frame()` once the frame's work is done, act on the delay,
//!   then `record_sleep()` and `begin_frame()`

mod frame_pacer;

pub use frame_pacer::{period_from_rate, FrameDelay, FramePacer, DEFAULT_YIELD_AFTER};

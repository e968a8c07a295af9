//! Core engine-facing contracts.
//!
//! This module defines the interface between the frame scheduler and the two
//! collaborators it drives: the sketch (per-frame work) and the host surface
//! (owner of the drawable viewport). Neither side sees the other's internals.

mod host;
mod sketch;

pub use host::HostSurface;
pub use sketch::Sketch;

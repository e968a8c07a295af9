use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

/// Lifecycle of a frame scheduler.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SchedulerStatus {
    /// An execution context owns the loop (it may be paused).
    Running,
    /// Never started, stopped explicitly, or the sketch finished.
    Stopped,
    /// The last execution context died from a panic in a callback.
    Faulted,
}

/// Mutable scheduler fields, all guarded by one mutex.
///
/// `handle` is `Some` iff `status == Running`.
pub(crate) struct SchedulerState {
    pub status: SchedulerStatus,
    pub paused: bool,
    pub period_nanos: i64,
    /// Identity of the most recently started execution context.
    pub generation: u64,
    pub handle: Option<JoinHandle<()>>,
}

impl SchedulerState {
    pub fn new(period_nanos: i64) -> Self {
        Self {
            status: SchedulerStatus::Stopped,
            paused: false,
            period_nanos,
            generation: 0,
            handle: None,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.status == SchedulerStatus::Running && self.generation == generation
    }

    /// Leaves the running state; returns the released context handle.
    pub fn release(&mut self, status: SchedulerStatus) -> Option<JoinHandle<()>> {
        debug_assert!(status != SchedulerStatus::Running);
        self.status = status;
        self.paused = false;
        self.handle.take()
    }
}

/// State shared between a scheduler and its execution contexts.
pub(crate) struct Shared {
    state: Mutex<SchedulerState>,
    /// Signalled on resume and stop; wakes both the pause wait and the frame sleep.
    pub wake: Condvar,
    /// Held for the duration of every draw so contexts never draw concurrently.
    draw_gate: Mutex<()>,
}

impl Shared {
    pub fn new(period_nanos: i64) -> Self {
        Self {
            state: Mutex::new(SchedulerState::new(period_nanos)),
            wake: Condvar::new(),
            draw_gate: Mutex::new(()),
        }
    }

    // A panicking draw must not wedge the scheduler, so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock_draw_gate(&self) -> MutexGuard<'_, ()> {
        self.draw_gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

use std::sync::{Arc, PoisonError, Weak};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::{HostSurface, Sketch};
use crate::time::{FrameDelay, FramePacer};

use super::state::{SchedulerStatus, Shared};

/// One execution context of a frame scheduler.
///
/// Moved onto its thread by `FrameScheduler::start`. The context keeps
/// running while its generation is the scheduler's current one.
pub(crate) struct FrameContext {
    pub shared: Arc<Shared>,
    pub generation: u64,
    pub sketch: Weak<dyn Sketch>,
    pub host: Weak<dyn HostSurface>,
    pub yield_after: u32,
}

impl FrameContext {
    pub fn run(self) {
        let _fault = FaultGuard {
            shared: self.shared.as_ref(),
            generation: self.generation,
        };

        let mut pacer = FramePacer::with_yield_after(Instant::now(), self.yield_after);

        if let Some(sketch) = self.sketch.upgrade() {
            sketch.on_started();
        }

        log::debug!("frame loop #{} started", self.generation);

        while self.should_continue() {
            if !self.wait_while_paused(&mut pacer) {
                break;
            }

            self.draw();

            let period_nanos = self.shared.lock().period_nanos;
            match pacer.after_frame(Instant::now(), period_nanos) {
                FrameDelay::Sleep(requested) => {
                    let actual = self.sleep(requested);
                    pacer.record_sleep(requested, actual);
                }
                FrameDelay::Overrun { yield_now: true } => {
                    log::trace!("frame loop #{} overrunning, yielding", self.generation);
                    thread::yield_now();
                }
                FrameDelay::Overrun { yield_now: false } => {}
            }

            pacer.begin_frame(Instant::now());
        }

        self.release_if_current();

        if let Some(host) = self.host.upgrade() {
            host.finish();
        }

        log::debug!("frame loop #{} exited", self.generation);
    }

    fn should_continue(&self) -> bool {
        if !self.shared.lock().is_current(self.generation) {
            return false;
        }

        match self.sketch.upgrade() {
            Some(sketch) => !sketch.is_finished(),
            None => false,
        }
    }

    /// Blocks while paused. Returns false once this context is superseded.
    ///
    /// Time spent paused is not charged to the frame that follows.
    fn wait_while_paused(&self, pacer: &mut FramePacer) -> bool {
        let mut state = self.shared.lock();
        let mut waited = false;
        while state.paused && state.is_current(self.generation) {
            waited = true;
            state = self
                .shared
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        if waited {
            pacer.reset(Instant::now());
        }
        state.is_current(self.generation)
    }

    /// True while this context owns the loop and is not paused.
    fn may_draw(&self) -> bool {
        let state = self.shared.lock();
        state.is_current(self.generation) && !state.paused
    }

    fn draw(&self) {
        let _gate = self.shared.lock_draw_gate();

        // A stale context may have waited on the gate behind a fresh one, and
        // a pause may have landed after the pause wait.
        if !self.may_draw() {
            return;
        }

        let Some(host) = self.host.upgrade() else {
            return;
        };

        host.request_draw();
        if !host.can_draw() || !self.may_draw() {
            return;
        }

        if let Some(sketch) = self.sketch.upgrade() {
            sketch.draw_frame();
        }
    }

    /// Waits up to `requested`; returns how long the wait actually took.
    ///
    /// Any notification on the wake condvar ends the wait early.
    fn sleep(&self, requested: Duration) -> Duration {
        let started = Instant::now();

        let state = self.shared.lock();
        if state.is_current(self.generation) {
            let _ = self
                .shared
                .wake
                .wait_timeout(state, requested)
                .unwrap_or_else(PoisonError::into_inner);
        }

        started.elapsed()
    }

    fn release_if_current(&self) {
        let handle = {
            let mut state = self.shared.lock();
            if !state.is_current(self.generation) {
                return;
            }
            state.release(SchedulerStatus::Stopped)
        };

        log::debug!("frame loop #{} finished on its own", self.generation);
        drop(handle);
    }
}

/// Marks the scheduler faulted when a callback panics on the loop thread.
struct FaultGuard<'a> {
    shared: &'a Shared,
    generation: u64,
}

impl Drop for FaultGuard<'_> {
    fn drop(&mut self) {
        if !thread::panicking() {
            return;
        }

        let handle = {
            let mut state = self.shared.lock();
            if !state.is_current(self.generation) {
                return;
            }
            state.release(SchedulerStatus::Faulted)
        };

        log::error!("frame loop #{} terminated by a panic", self.generation);
        drop(handle);
    }
}

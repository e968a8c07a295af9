use std::sync::{Arc, Weak};
use std::thread;

use crate::core::{HostSurface, Sketch};
use crate::time::period_from_rate;

use super::config::SchedulerConfig;
use super::context::FrameContext;
use super::error::SchedulerError;
use super::state::{SchedulerState, SchedulerStatus, Shared};

/// Fixed-rate frame scheduler with pause/resume and stop/restart.
///
/// The scheduler owns its execution context but only holds weak references to
/// the sketch and the host surface. If either is dropped the loop skips the
/// affected step or winds down.
///
/// All control methods may be called from any thread.
pub struct FrameScheduler {
    shared: Arc<Shared>,
    sketch: Weak<dyn Sketch>,
    host: Weak<dyn HostSurface>,
    thread_name: String,
    yield_after: u32,
}

impl FrameScheduler {
    pub fn new(
        sketch: Weak<dyn Sketch>,
        host: Weak<dyn HostSurface>,
        config: SchedulerConfig,
    ) -> Result<Self, SchedulerError> {
        let period_nanos = period_from_rate(config.frame_rate)
            .ok_or(SchedulerError::InvalidFrameRate(config.frame_rate))?;

        Ok(Self {
            shared: Arc::new(Shared::new(period_nanos)),
            sketch,
            host,
            thread_name: config.thread_name,
            yield_after: config.yield_after,
        })
    }

    /// Starts a fresh execution context.
    ///
    /// Fails with `AlreadyRunning` if a context already owns the loop.
    pub fn start(&self) -> Result<(), SchedulerError> {
        let mut state = self.shared.lock();
        self.start_locked(&mut state)
    }

    fn start_locked(&self, state: &mut SchedulerState) -> Result<(), SchedulerError> {
        if state.status == SchedulerStatus::Running {
            return Err(SchedulerError::AlreadyRunning);
        }

        let generation = state.generation.wrapping_add(1);
        let context = FrameContext {
            shared: Arc::clone(&self.shared),
            generation,
            sketch: self.sketch.clone(),
            host: self.host.clone(),
            yield_after: self.yield_after,
        };

        // The new thread cannot observe the state until this lock is released.
        let handle = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || context.run())?;

        state.generation = generation;
        state.status = SchedulerStatus::Running;
        state.paused = false;
        state.handle = Some(handle);

        log::debug!("frame scheduler started context #{generation}");
        Ok(())
    }

    /// Suspends drawing without tearing down the execution context.
    ///
    /// Returns false (and does nothing) when the scheduler is not running.
    pub fn pause(&self) -> bool {
        let mut state = self.shared.lock();
        if state.status != SchedulerStatus::Running {
            return false;
        }

        if !state.paused {
            state.paused = true;
            log::debug!("frame scheduler paused context #{}", state.generation);
        }
        true
    }

    /// Resumes a paused loop, or starts a fresh one if none is running.
    pub fn resume(&self) -> Result<(), SchedulerError> {
        let mut state = self.shared.lock();
        if state.status != SchedulerStatus::Running {
            return self.start_locked(&mut state);
        }

        if state.paused {
            state.paused = false;
            self.shared.wake.notify_all();
            log::debug!("frame scheduler resumed context #{}", state.generation);
        }
        Ok(())
    }

    /// Abandons the current execution context.
    ///
    /// Returns false when there was nothing to stop. An in-flight draw is not
    /// interrupted; the context exits before starting another.
    pub fn stop(&self) -> bool {
        let (generation, handle) = {
            let mut state = self.shared.lock();
            if state.status != SchedulerStatus::Running {
                return false;
            }
            (state.generation, state.release(SchedulerStatus::Stopped))
        };

        self.shared.wake.notify_all();

        // Dropping the handle detaches the thread.
        drop(handle);

        log::debug!("frame scheduler stopped context #{generation}");
        true
    }

    /// True iff no execution context currently owns the loop.
    pub fn is_stopped(&self) -> bool {
        self.status() != SchedulerStatus::Running
    }

    pub fn status(&self) -> SchedulerStatus {
        self.shared.lock().status
    }

    pub fn is_paused(&self) -> bool {
        let state = self.shared.lock();
        state.status == SchedulerStatus::Running && state.paused
    }

    /// Changes the target rate; picked up by the next sleep computation.
    pub fn set_frame_rate(&self, fps: f32) -> Result<(), SchedulerError> {
        let period_nanos = period_from_rate(fps).ok_or(SchedulerError::InvalidFrameRate(fps))?;
        self.shared.lock().period_nanos = period_nanos;
        Ok(())
    }

    /// Rate implied by the current target period.
    pub fn frame_rate(&self) -> f32 {
        let period_nanos = self.shared.lock().period_nanos;
        (1e9_f64 / period_nanos as f64) as f32
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

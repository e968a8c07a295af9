use std::time::{Duration, Instant};

/// Consecutive zero-wait frames tolerated before the loop yields once.
pub const DEFAULT_YIELD_AFTER: u32 = 15;

/// What the loop should do once the current frame's work is done.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameDelay {
    /// Time is left in this period; wait for the given duration.
    Sleep(Duration),

    /// The frame used up its whole period (or more).
    ///
    /// `yield_now` is set once every `yield_after + 1` consecutive overruns.
    Overrun { yield_now: bool },
}

/// Converts a frame rate into a whole-nanosecond period.
///
/// Returns `None` for rates that cannot produce a positive period.
pub fn period_from_rate(fps: f32) -> Option<i64> {
    if !fps.is_finite() || fps <= 0.0 {
        return None;
    }

    let nanos = (1e9_f64 / f64::from(fps)).round();
    if nanos < 1.0 || nanos > i64::MAX as f64 {
        return None;
    }

    Some(nanos as i64)
}

/// Timing accumulator for a fixed-rate loop.
///
/// The pacer measures each iteration from its start, subtracts the previous
/// sleep's overshoot from the next budget, and counts overruns so a busy loop
/// periodically gives up its time slice.
///
/// One pacer lives inside one execution context and is rebuilt whenever the
/// loop restarts, or reset when it wakes from a pause. It never sleeps
/// itself; the caller acts on the returned [`FrameDelay`] and reports back
/// how long it actually slept.
#[derive(Debug, Clone)]
pub struct FramePacer {
    last_frame_start: Instant,
    overshoot_nanos: i64,
    zero_wait_frames: u32,
    yield_after: u32,
}

impl FramePacer {
    pub fn new(now: Instant) -> Self {
        Self::with_yield_after(now, DEFAULT_YIELD_AFTER)
    }

    pub fn with_yield_after(now: Instant, yield_after: u32) -> Self {
        Self {
            last_frame_start: now,
            overshoot_nanos: 0,
            zero_wait_frames: 0,
            yield_after,
        }
    }

    /// Resets the accumulator as if the loop had just been entered.
    pub fn reset(&mut self, now: Instant) {
        self.last_frame_start = now;
        self.overshoot_nanos = 0;
        self.zero_wait_frames = 0;
    }

    /// Marks the start of the next iteration.
    pub fn begin_frame(&mut self, now: Instant) {
        self.last_frame_start = now;
    }

    /// Computes the delay owed after a frame finishing at `now`.
    pub fn after_frame(&mut self, now: Instant, period_nanos: i64) -> FrameDelay {
        let elapsed = nanos_i64(now.saturating_duration_since(self.last_frame_start));
        let sleep_nanos = period_nanos
            .saturating_sub(elapsed)
            .saturating_sub(self.overshoot_nanos);

        if sleep_nanos > 0 {
            self.zero_wait_frames = 0;
            return FrameDelay::Sleep(Duration::from_nanos(sleep_nanos as u64));
        }

        self.overshoot_nanos = 0;
        self.zero_wait_frames += 1;

        let yield_now = self.zero_wait_frames > self.yield_after;
        if yield_now {
            self.zero_wait_frames = 0;
        }

        FrameDelay::Overrun { yield_now }
    }

    /// Records how long a requested sleep actually took.
    ///
    /// The difference becomes the overshoot charged against the next frame.
    /// An early wake gives a negative overshoot, which lengthens the next
    /// budget instead.
    pub fn record_sleep(&mut self, requested: Duration, actual: Duration) {
        self.overshoot_nanos = nanos_i64(actual).saturating_sub(nanos_i64(requested));
    }

    pub fn overshoot_nanos(&self) -> i64 {
        self.overshoot_nanos
    }

    pub fn zero_wait_frames(&self) -> u32 {
        self.zero_wait_frames
    }
}

fn nanos_i64(d: Duration) -> i64 {
    i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: i64 = 10_000_000; // 10 ms

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── period_from_rate ──────────────────────────────────────────────────

    #[test]
    fn period_rounds_to_nearest_nanosecond() {
        assert_eq!(period_from_rate(60.0), Some(16_666_667));
        assert_eq!(period_from_rate(30.0), Some(33_333_333));
        assert_eq!(period_from_rate(1.0), Some(1_000_000_000));
    }

    #[test]
    fn period_rejects_non_positive_and_non_finite() {
        assert_eq!(period_from_rate(0.0), None);
        assert_eq!(period_from_rate(-24.0), None);
        assert_eq!(period_from_rate(f32::NAN), None);
        assert_eq!(period_from_rate(f32::INFINITY), None);
    }

    // ── sleep budget ──────────────────────────────────────────────────────

    #[test]
    fn fast_frame_sleeps_for_remaining_budget() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(t0);
        assert_eq!(pacer.after_frame(t0 + ms(2), PERIOD), FrameDelay::Sleep(ms(8)));
    }

    #[test]
    fn overshoot_is_subtracted_from_next_budget() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(t0);

        assert_eq!(pacer.after_frame(t0 + ms(2), PERIOD), FrameDelay::Sleep(ms(8)));
        pacer.record_sleep(ms(8), ms(9));
        assert_eq!(pacer.overshoot_nanos(), 1_000_000);

        let t1 = t0 + ms(11);
        pacer.begin_frame(t1);
        // 10 ms period - 2 ms work - 1 ms carried overshoot.
        assert_eq!(pacer.after_frame(t1 + ms(2), PERIOD), FrameDelay::Sleep(ms(7)));
    }

    #[test]
    fn early_wake_lengthens_next_budget() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(t0);

        pacer.after_frame(t0 + ms(2), PERIOD);
        pacer.record_sleep(ms(8), ms(5));
        assert_eq!(pacer.overshoot_nanos(), -3_000_000);

        let t1 = t0 + ms(7);
        pacer.begin_frame(t1);
        assert_eq!(pacer.after_frame(t1 + ms(2), PERIOD), FrameDelay::Sleep(ms(11)));
    }

    #[test]
    fn overrun_clears_overshoot() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(t0);

        pacer.after_frame(t0 + ms(1), PERIOD);
        pacer.record_sleep(ms(9), ms(12));
        assert_eq!(pacer.overshoot_nanos(), 3_000_000);

        let t1 = t0 + ms(13);
        pacer.begin_frame(t1);
        assert_eq!(
            pacer.after_frame(t1 + ms(20), PERIOD),
            FrameDelay::Overrun { yield_now: false }
        );
        assert_eq!(pacer.overshoot_nanos(), 0);
    }

    #[test]
    fn exact_period_counts_as_overrun() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(t0);
        assert_eq!(
            pacer.after_frame(t0 + ms(10), PERIOD),
            FrameDelay::Overrun { yield_now: false }
        );
        assert_eq!(pacer.zero_wait_frames(), 1);
    }

    // ── sustained overrun ─────────────────────────────────────────────────

    #[test]
    fn slow_frames_keep_overshoot_bounded_and_yield_after_sixteen() {
        let mut now = Instant::now();
        let mut pacer = FramePacer::new(now);
        let mut yields = Vec::new();

        // Every frame takes twice the period.
        for frame in 1..=20 {
            now += ms(20);
            match pacer.after_frame(now, PERIOD) {
                FrameDelay::Overrun { yield_now } => {
                    if yield_now {
                        yields.push(frame);
                    }
                }
                FrameDelay::Sleep(d) => panic!("frame {frame} should not sleep, got {d:?}"),
            }
            assert!(pacer.overshoot_nanos() <= PERIOD);
            pacer.begin_frame(now);
        }

        assert_eq!(yields, vec![16]);
        assert_eq!(pacer.zero_wait_frames(), 4);
    }

    #[test]
    fn a_sleep_resets_the_zero_wait_counter() {
        let mut now = Instant::now();
        let mut pacer = FramePacer::new(now);

        for _ in 0..10 {
            now += ms(15);
            pacer.after_frame(now, PERIOD);
            pacer.begin_frame(now);
        }
        assert_eq!(pacer.zero_wait_frames(), 10);

        now += ms(1);
        assert!(matches!(pacer.after_frame(now, PERIOD), FrameDelay::Sleep(_)));
        assert_eq!(pacer.zero_wait_frames(), 0);
    }

    #[test]
    fn custom_yield_threshold() {
        let mut now = Instant::now();
        let mut pacer = FramePacer::with_yield_after(now, 2);

        let mut seen = Vec::new();
        for _ in 0..6 {
            now += ms(30);
            if let FrameDelay::Overrun { yield_now } = pacer.after_frame(now, PERIOD) {
                seen.push(yield_now);
            }
            pacer.begin_frame(now);
        }
        assert_eq!(seen, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn reset_clears_accumulated_state() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(t0);
        pacer.after_frame(t0 + ms(1), PERIOD);
        pacer.record_sleep(ms(9), ms(10));

        let t1 = t0 + ms(500);
        pacer.reset(t1);
        assert_eq!(pacer.overshoot_nanos(), 0);
        assert_eq!(pacer.zero_wait_frames(), 0);
        assert_eq!(pacer.after_frame(t1 + ms(4), PERIOD), FrameDelay::Sleep(ms(6)));
    }
}

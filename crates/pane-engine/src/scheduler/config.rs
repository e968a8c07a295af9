use crate::time::DEFAULT_YIELD_AFTER;

/// Frame scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Target frames per second.
    pub frame_rate: f32,

    /// Name given to every execution context's thread.
    pub thread_name: String,

    /// Consecutive overrun frames tolerated before the loop yields once.
    pub yield_after: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            thread_name: "Animation Thread".to_string(),
            yield_after: DEFAULT_YIELD_AFTER,
        }
    }
}

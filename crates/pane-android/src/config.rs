use pane_engine::SchedulerConfig;

/// Surface configuration.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub scheduler: SchedulerConfig,

    /// ARGB colour painted around a sketch smaller than the display.
    pub window_color: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            window_color: 0xFF_CC_CC_CC,
        }
    }
}

impl SurfaceConfig {
    pub fn with_frame_rate(mut self, fps: f32) -> Self {
        self.scheduler.frame_rate = fps;
        self
    }

    pub fn with_window_color(mut self, argb: u32) -> Self {
        self.window_color = argb;
        self
    }
}

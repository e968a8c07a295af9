#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("frame scheduler is already running")]
    AlreadyRunning,

    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(f32),

    #[error("failed to spawn frame loop thread")]
    Spawn(#[from] std::io::Error),
}

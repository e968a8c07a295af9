use std::io;
use std::path::PathBuf;

use pane_engine::SchedulerError;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("file name {0:?} contains a path separator")]
    PathSeparator(String),

    #[error("asset name {0:?} escapes the asset root")]
    AssetOutsideRoot(String),

    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

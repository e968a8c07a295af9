//! Pane host bindings.
//!
//! Connects a sketch to whichever component hosts it (activity/fragment,
//! live wallpaper, or watchface): view setup, lifecycle and input forwarding,
//! file access, and the frame scheduler that drives drawing.

pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod paths;
pub mod surface;
pub mod view;

pub use config::SurfaceConfig;
pub use error::SurfaceError;
pub use host::{
    DisplayMetrics, FragmentHost, HostComponent, HostKind, HostPaths, Orientation,
    SystemUiVisibility, WallpaperHost, WatchFaceHost,
};
pub use surface::SketchSurface;
pub use view::RootView;

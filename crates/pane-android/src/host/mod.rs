//! Host components.
//!
//! One type per kind of component that can own a sketch's viewport. The
//! frame scheduler sees them only as `HostSurface`; the binding layer uses the
//! wider `HostComponent` interface.

mod base;
mod fragment;
mod wallpaper;
mod watchface;

use std::path::{Path, PathBuf};

use pane_engine::HostSurface;

use crate::view::RootView;

pub use base::HostBase;
pub use fragment::FragmentHost;
pub use wallpaper::WallpaperHost;
pub use watchface::WatchFaceHost;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HostKind {
    /// Foreground activity or fragment.
    Fragment,
    /// Live wallpaper service.
    Wallpaper,
    /// Watchface service.
    WatchFace,
}

/// Requested screen orientation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Orientation {
    #[default]
    Unspecified,
    Portrait,
    Landscape,
    ReversePortrait,
    ReverseLandscape,
    Sensor,
}

impl Orientation {
    /// `ActivityInfo.SCREEN_ORIENTATION_*` value.
    pub fn android_value(self) -> i32 {
        match self {
            Orientation::Unspecified => -1,
            Orientation::Landscape => 0,
            Orientation::Portrait => 1,
            Orientation::Sensor => 4,
            Orientation::ReverseLandscape => 8,
            Orientation::ReversePortrait => 9,
        }
    }
}

/// System UI visibility request.
///
/// Stored as booleans; `to_flags` produces the `View.SYSTEM_UI_FLAG_*` mask.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SystemUiVisibility {
    pub low_profile: bool,
    pub hide_navigation: bool,
    pub fullscreen: bool,
    pub layout_stable: bool,
    pub layout_hide_navigation: bool,
    pub layout_fullscreen: bool,
    pub immersive: bool,
    pub immersive_sticky: bool,
}

impl SystemUiVisibility {
    const LOW_PROFILE: i32 = 0x0000_0001;
    const HIDE_NAVIGATION: i32 = 0x0000_0002;
    const FULLSCREEN: i32 = 0x0000_0004;
    const LAYOUT_STABLE: i32 = 0x0000_0100;
    const LAYOUT_HIDE_NAVIGATION: i32 = 0x0000_0200;
    const LAYOUT_FULLSCREEN: i32 = 0x0000_0400;
    const IMMERSIVE: i32 = 0x0000_0800;
    const IMMERSIVE_STICKY: i32 = 0x0000_1000;

    /// Everything hidden, bars reappear transiently on swipe.
    pub fn immersive_fullscreen() -> Self {
        Self {
            low_profile: false,
            hide_navigation: true,
            fullscreen: true,
            layout_stable: true,
            layout_hide_navigation: true,
            layout_fullscreen: true,
            immersive: false,
            immersive_sticky: true,
        }
    }

    pub fn to_flags(&self) -> i32 {
        let bits = [
            (self.low_profile, Self::LOW_PROFILE),
            (self.hide_navigation, Self::HIDE_NAVIGATION),
            (self.fullscreen, Self::FULLSCREEN),
            (self.layout_stable, Self::LAYOUT_STABLE),
            (self.layout_hide_navigation, Self::LAYOUT_HIDE_NAVIGATION),
            (self.layout_fullscreen, Self::LAYOUT_FULLSCREEN),
            (self.immersive, Self::IMMERSIVE),
            (self.immersive_sticky, Self::IMMERSIVE_STICKY),
        ];
        bits.iter().filter(|(on, _)| *on).fold(0, |acc, (_, bit)| acc | bit)
    }

    pub fn from_flags(flags: i32) -> Self {
        Self {
            low_profile: flags & Self::LOW_PROFILE != 0,
            hide_navigation: flags & Self::HIDE_NAVIGATION != 0,
            fullscreen: flags & Self::FULLSCREEN != 0,
            layout_stable: flags & Self::LAYOUT_STABLE != 0,
            layout_hide_navigation: flags & Self::LAYOUT_HIDE_NAVIGATION != 0,
            layout_fullscreen: flags & Self::LAYOUT_FULLSCREEN != 0,
            immersive: flags & Self::IMMERSIVE != 0,
            immersive_sticky: flags & Self::IMMERSIVE_STICKY != 0,
        }
    }
}

/// Display size in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayMetrics {
    pub width: u32,
    pub height: u32,
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            density: 2.625,
        }
    }
}

/// Directories a host component exposes to its sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    /// Private, writable storage (`Context.getFilesDir()`).
    pub files_dir: PathBuf,
    /// Root of read-only bundled assets.
    pub assets_dir: PathBuf,
}

/// Binding-side interface of a host component.
///
/// Default methods delegate to the component's `HostBase`; kinds override
/// what they handle differently.
pub trait HostComponent: HostSurface {
    fn kind(&self) -> HostKind;

    fn base(&self) -> &HostBase;

    /// Requests a screen orientation. Returns false if the kind cannot honour it.
    fn request_orientation(&self, orientation: Orientation) -> bool;

    /// Requests system UI visibility. Returns false if the kind cannot honour it.
    fn set_system_ui_visibility(&self, visibility: SystemUiVisibility) -> bool;

    fn set_visible(&self, visible: bool) {
        self.base().set_visible(visible);
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    fn display(&self) -> DisplayMetrics {
        self.base().display()
    }

    fn files_dir(&self) -> &Path {
        &self.base().paths().files_dir
    }

    fn assets_dir(&self) -> &Path {
        &self.base().paths().assets_dir
    }

    fn attach_root_view(&self, view: RootView) {
        self.base().attach_root_view(view);
    }

    fn detach_root_view(&self) -> Option<RootView> {
        self.base().detach_root_view()
    }

    fn root_view(&self) -> Option<RootView> {
        self.base().root_view()
    }

    /// Whether the finish hook has torn this component down.
    fn is_finished(&self) -> bool {
        self.base().is_finished()
    }
}

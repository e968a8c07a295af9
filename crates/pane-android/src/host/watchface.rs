use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use pane_engine::HostSurface;

use super::{DisplayMetrics, HostBase, HostComponent, HostKind, HostPaths, Orientation, SystemUiVisibility};

/// Sketch running as a watchface.
///
/// Every draw request invalidates the face so the watch redraws it.
#[derive(Debug)]
pub struct WatchFaceHost {
    base: HostBase,
    round: bool,
    ambient: AtomicBool,
    invalidations: AtomicU64,
}

impl WatchFaceHost {
    pub fn new(paths: HostPaths, display: DisplayMetrics, round: bool) -> Self {
        Self {
            base: HostBase::new(paths, display),
            round,
            ambient: AtomicBool::new(false),
            invalidations: AtomicU64::new(0),
        }
    }

    pub fn is_round(&self) -> bool {
        self.round
    }

    pub fn set_ambient(&self, ambient: bool) {
        let was = self.ambient.swap(ambient, Ordering::SeqCst);
        if was != ambient {
            log::debug!("watchface ambient mode {}", if ambient { "on" } else { "off" });
        }
    }

    pub fn is_ambient(&self) -> bool {
        self.ambient.load(Ordering::SeqCst)
    }

    /// Number of invalidations issued so far.
    pub fn invalidations(&self) -> u64 {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl HostSurface for WatchFaceHost {
    fn request_draw(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }

    fn can_draw(&self) -> bool {
        self.base.is_visible()
    }

    fn finish(&self) {
        if self.base.finish_once() {
            log::info!("stopping watchface service");
        }
    }
}

impl HostComponent for WatchFaceHost {
    fn kind(&self) -> HostKind {
        HostKind::WatchFace
    }

    fn base(&self) -> &HostBase {
        &self.base
    }

    fn request_orientation(&self, orientation: Orientation) -> bool {
        log::warn!("watchfaces cannot request orientation {orientation:?}");
        false
    }

    fn set_system_ui_visibility(&self, _visibility: SystemUiVisibility) -> bool {
        log::warn!("watchfaces cannot change system ui visibility");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> WatchFaceHost {
        let paths = HostPaths { files_dir: "/data/files".into(), assets_dir: "/data/assets".into() };
        let display = DisplayMetrics { width: 454, height: 454, density: 2.0 };
        WatchFaceHost::new(paths, display, true)
    }

    #[test]
    fn draw_requests_invalidate() {
        let h = host();
        h.request_draw();
        h.request_draw();
        assert_eq!(h.invalidations(), 2);
    }

    #[test]
    fn ambient_mode_does_not_block_drawing() {
        let h = host();
        h.set_visible(true);
        h.set_ambient(true);
        assert!(h.is_ambient());
        assert!(h.can_draw());
        assert!(h.is_round());
    }
}

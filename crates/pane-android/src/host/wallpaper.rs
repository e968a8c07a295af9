use pane_engine::HostSurface;

use super::{DisplayMetrics, HostBase, HostComponent, HostKind, HostPaths, Orientation, SystemUiVisibility};

/// Sketch running as a live wallpaper engine.
#[derive(Debug)]
pub struct WallpaperHost {
    base: HostBase,
    preview: bool,
}

impl WallpaperHost {
    /// `preview` is set when the engine backs the wallpaper picker's preview.
    pub fn new(paths: HostPaths, display: DisplayMetrics, preview: bool) -> Self {
        Self {
            base: HostBase::new(paths, display),
            preview,
        }
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }
}

impl HostSurface for WallpaperHost {
    fn request_draw(&self) {}

    fn can_draw(&self) -> bool {
        self.base.is_visible()
    }

    fn finish(&self) {
        if self.base.finish_once() {
            log::info!("stopping wallpaper service");
        }
    }
}

impl HostComponent for WallpaperHost {
    fn kind(&self) -> HostKind {
        HostKind::Wallpaper
    }

    fn base(&self) -> &HostBase {
        &self.base
    }

    fn request_orientation(&self, orientation: Orientation) -> bool {
        log::warn!("wallpapers cannot request orientation {orientation:?}");
        false
    }

    fn set_system_ui_visibility(&self, _visibility: SystemUiVisibility) -> bool {
        log::warn!("wallpapers cannot change system ui visibility");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(preview: bool) -> WallpaperHost {
        let paths = HostPaths { files_dir: "/data/files".into(), assets_dir: "/data/assets".into() };
        WallpaperHost::new(paths, DisplayMetrics::default(), preview)
    }

    #[test]
    fn draws_while_visible_without_root_view() {
        let h = host(false);
        assert!(!h.can_draw());
        h.set_visible(true);
        assert!(h.can_draw());
    }

    #[test]
    fn rejects_activity_only_requests() {
        let h = host(true);
        assert!(h.is_preview());
        assert!(!h.request_orientation(Orientation::Portrait));
        assert!(!h.set_system_ui_visibility(SystemUiVisibility::immersive_fullscreen()));
    }
}

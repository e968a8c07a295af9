use std::sync::{Mutex, PoisonError};

use pane_engine::HostSurface;

use super::{DisplayMetrics, HostBase, HostComponent, HostKind, HostPaths, Orientation, SystemUiVisibility};

/// Sketch hosted in a foreground activity (through a fragment).
///
/// Draws only while the activity is shown with a root view attached.
#[derive(Debug)]
pub struct FragmentHost {
    base: HostBase,
    orientation: Mutex<Orientation>,
    system_ui: Mutex<SystemUiVisibility>,
}

impl FragmentHost {
    pub fn new(paths: HostPaths, display: DisplayMetrics) -> Self {
        Self {
            base: HostBase::new(paths, display),
            orientation: Mutex::new(Orientation::Unspecified),
            system_ui: Mutex::new(SystemUiVisibility::default()),
        }
    }

    pub fn requested_orientation(&self) -> Orientation {
        *self.orientation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn system_ui_visibility(&self) -> SystemUiVisibility {
        *self.system_ui.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostSurface for FragmentHost {
    fn request_draw(&self) {}

    fn can_draw(&self) -> bool {
        self.base.is_visible() && self.base.has_root_view()
    }

    fn finish(&self) {
        if self.base.finish_once() {
            log::info!("finishing host activity");
        }
    }
}

impl HostComponent for FragmentHost {
    fn kind(&self) -> HostKind {
        HostKind::Fragment
    }

    fn base(&self) -> &HostBase {
        &self.base
    }

    fn request_orientation(&self, orientation: Orientation) -> bool {
        *self.orientation.lock().unwrap_or_else(PoisonError::into_inner) = orientation;
        log::debug!("requested orientation {orientation:?} ({})", orientation.android_value());
        true
    }

    fn set_system_ui_visibility(&self, visibility: SystemUiVisibility) -> bool {
        *self.system_ui.lock().unwrap_or_else(PoisonError::into_inner) = visibility;
        log::debug!("system ui visibility {:#x}", visibility.to_flags());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RootView;

    fn host() -> FragmentHost {
        let paths = HostPaths { files_dir: "/data/files".into(), assets_dir: "/data/assets".into() };
        FragmentHost::new(paths, DisplayMetrics::default())
    }

    #[test]
    fn draws_only_when_shown_with_root_view() {
        let h = host();
        assert!(!h.can_draw());

        h.set_visible(true);
        assert!(!h.can_draw());

        h.attach_root_view(RootView::Surface { width: 1080, height: 1920 });
        assert!(h.can_draw());

        h.set_visible(false);
        assert!(!h.can_draw());
    }

    #[test]
    fn honours_orientation_and_system_ui() {
        let h = host();
        assert!(h.request_orientation(Orientation::Landscape));
        assert_eq!(h.requested_orientation(), Orientation::Landscape);

        assert!(h.set_system_ui_visibility(SystemUiVisibility::immersive_fullscreen()));
        assert!(h.system_ui_visibility().immersive_sticky);
    }

    #[test]
    fn finish_is_idempotent() {
        let h = host();
        h.finish();
        h.finish();
        assert!(h.is_finished());
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::view::RootView;

use super::{DisplayMetrics, HostPaths};

/// State every host kind carries.
///
/// Interior mutability throughout: lifecycle callbacks arrive on the host's
/// thread while the frame loop queries `is_visible` from its own.
#[derive(Debug)]
pub struct HostBase {
    paths: HostPaths,
    display: DisplayMetrics,
    visible: AtomicBool,
    finished: AtomicBool,
    root_view: Mutex<Option<RootView>>,
}

impl HostBase {
    pub fn new(paths: HostPaths, display: DisplayMetrics) -> Self {
        Self {
            paths,
            display,
            visible: AtomicBool::new(false),
            finished: AtomicBool::new(false),
            root_view: Mutex::new(None),
        }
    }

    pub fn paths(&self) -> &HostPaths {
        &self.paths
    }

    pub fn display(&self) -> DisplayMetrics {
        self.display
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Marks the component finished. Returns true only for the first call.
    pub fn finish_once(&self) -> bool {
        !self.finished.swap(true, Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// Installs `view` as the root, replacing any previous one.
    pub fn attach_root_view(&self, view: RootView) {
        let previous = self.lock_root().replace(view);
        if previous.is_some() {
            log::debug!("replaced existing root view");
        }
    }

    pub fn detach_root_view(&self) -> Option<RootView> {
        self.lock_root().take()
    }

    pub fn root_view(&self) -> Option<RootView> {
        *self.lock_root()
    }

    pub fn has_root_view(&self) -> bool {
        self.lock_root().is_some()
    }

    fn lock_root(&self) -> std::sync::MutexGuard<'_, Option<RootView>> {
        self.root_view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use pane_engine::input::{InputState, KeyEvent, TouchEvent};
use pane_engine::{FrameScheduler, HostSurface, SchedulerStatus, Sketch};

use crate::config::SurfaceConfig;
use crate::error::SurfaceError;
use crate::host::{HostComponent, HostKind, Orientation, SystemUiVisibility};
use crate::input::{KeyEventData, MotionEventData};
use crate::paths;
use crate::view::RootView;

/// Binds one sketch to one host component.
///
/// Owns the sketch's frame scheduler and forwards the host's lifecycle and
/// input callbacks. Host kinds are handled entirely through `HostComponent`.
pub struct SketchSurface {
    host: Arc<dyn HostComponent>,
    sketch: Weak<dyn Sketch>,
    scheduler: FrameScheduler,
    input: Mutex<InputState>,
    window_color: u32,
    disposed: AtomicBool,
}

impl SketchSurface {
    pub fn new<S, H>(sketch: &Arc<S>, host: Arc<H>, config: SurfaceConfig) -> Result<Self, SurfaceError>
    where
        S: Sketch + 'static,
        H: HostComponent + 'static,
    {
        let sketch: Weak<dyn Sketch> = Arc::downgrade(sketch) as Weak<S>;
        let host_surface: Weak<dyn HostSurface> = Arc::downgrade(&host) as Weak<H>;
        let scheduler = FrameScheduler::new(sketch.clone(), host_surface, config.scheduler)?;

        log::debug!("sketch surface created for {:?} host", host.kind());

        Ok(Self {
            host,
            sketch,
            scheduler,
            input: Mutex::new(InputState::default()),
            window_color: config.window_color,
            disposed: AtomicBool::new(false),
        })
    }

    pub fn kind(&self) -> HostKind {
        self.host.kind()
    }

    pub fn host(&self) -> &dyn HostComponent {
        self.host.as_ref()
    }

    // ── view ──────────────────────────────────────────────────────────────

    /// Builds the root view for a sketch of the given size and attaches it.
    pub fn init_view(&self, width: u32, height: u32) -> RootView {
        let view = RootView::layout(
            self.host.kind(),
            width,
            height,
            self.host.display(),
            self.window_color,
        );
        self.host.attach_root_view(view);
        log::debug!("root view {view:?}");
        view
    }

    pub fn root_view(&self) -> Option<RootView> {
        self.host.root_view()
    }

    pub fn set_orientation(&self, orientation: Orientation) -> bool {
        self.host.request_orientation(orientation)
    }

    pub fn set_system_ui_visibility(&self, visibility: SystemUiVisibility) -> bool {
        self.host.set_system_ui_visibility(visibility)
    }

    // ── frame loop ────────────────────────────────────────────────────────

    pub fn start_thread(&self) -> Result<(), SurfaceError> {
        Ok(self.scheduler.start()?)
    }

    pub fn pause_thread(&self) -> bool {
        self.scheduler.pause()
    }

    pub fn resume_thread(&self) -> Result<(), SurfaceError> {
        Ok(self.scheduler.resume()?)
    }

    pub fn stop_thread(&self) -> bool {
        self.scheduler.stop()
    }

    pub fn is_stopped(&self) -> bool {
        self.scheduler.is_stopped()
    }

    pub fn status(&self) -> SchedulerStatus {
        self.scheduler.status()
    }

    pub fn set_frame_rate(&self, fps: f32) -> Result<(), SurfaceError> {
        Ok(self.scheduler.set_frame_rate(fps)?)
    }

    pub fn frame_rate(&self) -> f32 {
        self.scheduler.frame_rate()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Host came to the foreground.
    ///
    /// Ignored once the surface has been disposed.
    pub fn on_resume(&self) -> Result<(), SurfaceError> {
        if self.is_disposed() {
            log::debug!("resume after dispose ignored");
            return Ok(());
        }
        self.host.set_visible(true);
        self.resume_thread()
    }

    /// Host left the foreground.
    pub fn on_pause(&self) {
        self.pause_thread();
        self.host.set_visible(false);
    }

    /// Wallpaper/watchface engine visibility change.
    pub fn on_visibility_changed(&self, visible: bool) -> Result<(), SurfaceError> {
        if self.is_disposed() {
            log::debug!("visibility change after dispose ignored");
            return Ok(());
        }
        self.host.set_visible(visible);
        if visible {
            self.resume_thread()
        } else {
            self.pause_thread();
            Ok(())
        }
    }

    pub fn on_destroy(&self) {
        self.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Stops the frame loop and detaches the root view. Idempotent.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }

        self.scheduler.stop();
        self.host.detach_root_view();
        log::debug!("sketch surface disposed");
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub fn on_window_focus_changed(&self, has_focus: bool) {
        self.lock_input().apply_focus(has_focus);
        if let Some(sketch) = self.sketch.upgrade() {
            sketch.on_window_focus_changed(has_focus);
        }
    }

    /// Returns true when the sketch consumed the event.
    pub fn on_touch_event(&self, raw: &MotionEventData) -> bool {
        let event = TouchEvent::from(raw);
        self.lock_input().apply_touch(&event);
        self.sketch
            .upgrade()
            .is_some_and(|sketch| sketch.on_touch_event(&event))
    }

    pub fn on_key_down(&self, raw: &KeyEventData) -> bool {
        let event = KeyEvent::from(raw);
        self.lock_input().apply_key(&event);
        self.sketch
            .upgrade()
            .is_some_and(|sketch| sketch.on_key_down(event.code, &event))
    }

    pub fn on_key_up(&self, raw: &KeyEventData) -> bool {
        let event = KeyEvent::from(raw);
        self.lock_input().apply_key(&event);
        self.sketch
            .upgrade()
            .is_some_and(|sketch| sketch.on_key_up(event.code, &event))
    }

    /// Snapshot of keys held, pointers down and focus.
    pub fn input_state(&self) -> InputState {
        self.lock_input().clone()
    }

    fn lock_input(&self) -> MutexGuard<'_, InputState> {
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── files ─────────────────────────────────────────────────────────────

    pub fn files_dir(&self) -> &Path {
        self.host.files_dir()
    }

    pub fn file_stream_path(&self, name: &str) -> PathBuf {
        paths::file_stream_path(self.host.files_dir(), name)
    }

    pub fn open_file_input(&self, name: &str) -> Result<File, SurfaceError> {
        paths::open_file_input(self.host.files_dir(), name)
    }

    pub fn resolve_data_path(&self, path: &str) -> PathBuf {
        paths::resolve_data_path(self.host.files_dir(), path)
    }

    pub fn open_asset(&self, name: &str) -> Result<File, SurfaceError> {
        paths::open_asset(self.host.assets_dir(), name)
    }
}

impl Drop for SketchSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}

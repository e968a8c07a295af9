use crate::input::{KeyCode, KeyEvent, TouchEvent};

/// Sketch contract implemented by user code.
///
/// Every method takes `&self`: the scheduler calls in from its own thread while
/// input arrives on the host's thread, so implementors provide their own
/// interior synchronization.
pub trait Sketch: Send + Sync {
    /// Called once each time a fresh execution context begins running.
    fn on_started(&self) {}

    /// Once this returns true the frame loop winds down.
    fn is_finished(&self) -> bool {
        false
    }

    /// Called once per frame while the host permits drawing.
    fn draw_frame(&self);

    fn on_window_focus_changed(&self, has_focus: bool) {
        let _ = has_focus;
    }

    /// Returns true when the event was consumed.
    fn on_touch_event(&self, event: &TouchEvent) -> bool {
        let _ = event;
        false
    }

    fn on_key_down(&self, code: KeyCode, event: &KeyEvent) -> bool {
        let _ = (code, event);
        false
    }

    fn on_key_up(&self, code: KeyCode, event: &KeyEvent) -> bool {
        let _ = (code, event);
        false
    }
}

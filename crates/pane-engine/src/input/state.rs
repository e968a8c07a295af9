use std::collections::{HashMap, HashSet};

use super::types::{KeyAction, KeyCode, KeyEvent, Modifiers, TouchAction, TouchEvent, TouchPointer};

/// Current input state for a single surface.
///
/// Holds "is down" information and the pointers currently in contact.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the surface's window has focus.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<KeyCode>,

    /// Pointers in contact, by pointer id.
    pub touches: HashMap<i32, TouchPointer>,
}

impl InputState {
    pub fn apply_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // On focus loss, clear "down" sets so nothing stays stuck.
            self.keys_down.clear();
            self.touches.clear();
        }
    }

    pub fn apply_key(&mut self, ev: &KeyEvent) {
        self.modifiers = ev.modifiers;
        match ev.action {
            KeyAction::Down => {
                self.keys_down.insert(ev.code);
            }
            KeyAction::Up => {
                self.keys_down.remove(&ev.code);
            }
        }
    }

    pub fn apply_touch(&mut self, ev: &TouchEvent) {
        match ev.action {
            TouchAction::Down | TouchAction::Move | TouchAction::PointerDown(_) => {
                for p in &ev.pointers {
                    self.touches.insert(p.id, *p);
                }
            }
            TouchAction::PointerUp(_) => {
                for p in &ev.pointers {
                    self.touches.insert(p.id, *p);
                }
                if let Some(p) = ev.action_pointer() {
                    self.touches.remove(&p.id);
                }
            }
            TouchAction::Up | TouchAction::Cancel => {
                self.touches.clear();
            }
            TouchAction::Other(_) => {}
        }
    }

    /// Helper queries
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn touching(&self) -> bool {
        !self.touches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(id: i32, x: f32, y: f32) -> TouchPointer {
        TouchPointer { id, x, y, pressure: 1.0 }
    }

    fn touch(action: TouchAction, pointers: Vec<TouchPointer>) -> TouchEvent {
        TouchEvent { action, pointers, time_ms: 0 }
    }

    fn key(code: KeyCode, action: KeyAction) -> KeyEvent {
        KeyEvent { code, action, modifiers: Modifiers::default(), repeat_count: 0, unicode: None }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_down_then_up() {
        let mut s = InputState::default();
        s.apply_key(&key(KeyCode::A, KeyAction::Down));
        assert!(s.key_down(KeyCode::A));
        s.apply_key(&key(KeyCode::A, KeyAction::Up));
        assert!(!s.key_down(KeyCode::A));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut s = InputState::default();
        s.apply_focus(true);
        s.apply_key(&key(KeyCode::Space, KeyAction::Down));
        s.apply_touch(&touch(TouchAction::Down, vec![pointer(0, 1.0, 1.0)]));

        s.apply_focus(false);
        assert!(!s.focused);
        assert!(s.keys_down.is_empty());
        assert!(!s.touching());
    }

    // ── touches ───────────────────────────────────────────────────────────

    #[test]
    fn secondary_pointer_up_keeps_primary() {
        let mut s = InputState::default();
        s.apply_touch(&touch(TouchAction::Down, vec![pointer(0, 1.0, 1.0)]));
        s.apply_touch(&touch(
            TouchAction::PointerDown(1),
            vec![pointer(0, 1.0, 1.0), pointer(7, 5.0, 5.0)],
        ));
        assert_eq!(s.touches.len(), 2);

        s.apply_touch(&touch(
            TouchAction::PointerUp(1),
            vec![pointer(0, 2.0, 2.0), pointer(7, 5.0, 5.0)],
        ));
        assert_eq!(s.touches.len(), 1);
        assert_eq!(s.touches[&0].x, 2.0);
    }

    #[test]
    fn cancel_clears_touches() {
        let mut s = InputState::default();
        s.apply_touch(&touch(TouchAction::Down, vec![pointer(3, 0.0, 0.0)]));
        s.apply_touch(&touch(TouchAction::Cancel, vec![]));
        assert!(!s.touching());
    }
}

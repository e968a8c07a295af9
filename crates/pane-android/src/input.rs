//! Translation of host input events into engine events.
//!
//! The raw types mirror the fields the binding reads off `MotionEvent` and
//! `KeyEvent`; integer codes are the platform's.

use pane_engine::input::{
    KeyAction, KeyCode, KeyEvent, Modifiers, TouchAction, TouchEvent, TouchPointer,
};

const ACTION_MASK: i32 = 0xff;
const ACTION_POINTER_INDEX_MASK: i32 = 0xff00;
const ACTION_POINTER_INDEX_SHIFT: i32 = 8;

const ACTION_DOWN: i32 = 0;
const ACTION_UP: i32 = 1;
const ACTION_MOVE: i32 = 2;
const ACTION_CANCEL: i32 = 3;
const ACTION_POINTER_DOWN: i32 = 5;
const ACTION_POINTER_UP: i32 = 6;

const META_SHIFT_ON: i32 = 0x1;
const META_ALT_ON: i32 = 0x2;
const META_CTRL_ON: i32 = 0x1000;
const META_META_ON: i32 = 0x10000;

/// Touch event as delivered by the host view.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEventData {
    /// Raw action, pointer index included.
    pub action: i32,
    pub pointers: Vec<TouchPointer>,
    pub event_time_ms: i64,
}

/// Key event as delivered by the host view.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEventData {
    pub key_code: i32,
    /// 0 = down, 1 = up.
    pub action: i32,
    pub meta_state: i32,
    pub repeat_count: u32,
    /// Unicode scalar produced by the key, 0 when none.
    pub unicode_char: u32,
}

pub fn touch_action(action: i32) -> TouchAction {
    let index = ((action & ACTION_POINTER_INDEX_MASK) >> ACTION_POINTER_INDEX_SHIFT) as usize;
    match action & ACTION_MASK {
        ACTION_DOWN => TouchAction::Down,
        ACTION_UP => TouchAction::Up,
        ACTION_MOVE => TouchAction::Move,
        ACTION_CANCEL => TouchAction::Cancel,
        ACTION_POINTER_DOWN => TouchAction::PointerDown(index),
        ACTION_POINTER_UP => TouchAction::PointerUp(index),
        other => TouchAction::Other(other),
    }
}

pub fn modifiers(meta_state: i32) -> Modifiers {
    Modifiers {
        shift: meta_state & META_SHIFT_ON != 0,
        ctrl: meta_state & META_CTRL_ON != 0,
        alt: meta_state & META_ALT_ON != 0,
        meta: meta_state & META_META_ON != 0,
    }
}

pub fn key_code(code: i32) -> KeyCode {
    const LETTERS: [KeyCode; 26] = [
        KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F,
        KeyCode::G, KeyCode::H, KeyCode::I, KeyCode::J, KeyCode::K, KeyCode::L,
        KeyCode::M, KeyCode::N, KeyCode::O, KeyCode::P, KeyCode::Q, KeyCode::R,
        KeyCode::S, KeyCode::T, KeyCode::U, KeyCode::V, KeyCode::W, KeyCode::X,
        KeyCode::Y, KeyCode::Z,
    ];
    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3,
        KeyCode::Digit4, KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7,
        KeyCode::Digit8, KeyCode::Digit9,
    ];

    match code {
        4 => KeyCode::Back,
        82 => KeyCode::Menu,
        84 => KeyCode::Search,
        111 => KeyCode::Escape,
        66 => KeyCode::Enter,
        61 => KeyCode::Tab,
        67 => KeyCode::Backspace,
        112 => KeyCode::Delete,
        62 => KeyCode::Space,

        19 => KeyCode::DpadUp,
        20 => KeyCode::DpadDown,
        21 => KeyCode::DpadLeft,
        22 => KeyCode::DpadRight,
        23 => KeyCode::DpadCenter,

        59 | 60 => KeyCode::Shift,
        113 | 114 => KeyCode::Control,
        57 | 58 => KeyCode::Alt,
        117 | 118 => KeyCode::Meta,

        7..=16 => DIGITS[(code - 7) as usize],
        29..=54 => LETTERS[(code - 29) as usize],

        other => KeyCode::Unknown(other),
    }
}

impl From<&MotionEventData> for TouchEvent {
    fn from(ev: &MotionEventData) -> Self {
        TouchEvent {
            action: touch_action(ev.action),
            pointers: ev.pointers.clone(),
            time_ms: ev.event_time_ms,
        }
    }
}

impl From<&KeyEventData> for KeyEvent {
    fn from(ev: &KeyEventData) -> Self {
        KeyEvent {
            code: key_code(ev.key_code),
            action: if ev.action == 1 { KeyAction::Up } else { KeyAction::Down },
            modifiers: modifiers(ev.meta_state),
            repeat_count: ev.repeat_count,
            unicode: match ev.unicode_char {
                0 => None,
                c => char::from_u32(c),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn primary_actions() {
        assert_eq!(touch_action(0), TouchAction::Down);
        assert_eq!(touch_action(1), TouchAction::Up);
        assert_eq!(touch_action(2), TouchAction::Move);
        assert_eq!(touch_action(3), TouchAction::Cancel);
    }

    #[test]
    fn pointer_actions_carry_index() {
        assert_eq!(touch_action(0x0105), TouchAction::PointerDown(1));
        assert_eq!(touch_action(0x0206), TouchAction::PointerUp(2));
    }

    #[test]
    fn unmodelled_action_is_kept() {
        // ACTION_HOVER_MOVE
        assert_eq!(touch_action(7), TouchAction::Other(7));
    }

    #[test]
    fn motion_event_converts() {
        let raw = MotionEventData {
            action: 0x0105,
            pointers: vec![
                TouchPointer { id: 0, x: 1.0, y: 2.0, pressure: 0.5 },
                TouchPointer { id: 4, x: 9.0, y: 8.0, pressure: 1.0 },
            ],
            event_time_ms: 1234,
        };
        let ev = TouchEvent::from(&raw);
        assert_eq!(ev.action, TouchAction::PointerDown(1));
        assert_eq!(ev.action_pointer().map(|p| p.id), Some(4));
        assert_eq!(ev.time_ms, 1234);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn letters_digits_and_navigation() {
        assert_eq!(key_code(29), KeyCode::A);
        assert_eq!(key_code(54), KeyCode::Z);
        assert_eq!(key_code(7), KeyCode::Digit0);
        assert_eq!(key_code(16), KeyCode::Digit9);
        assert_eq!(key_code(4), KeyCode::Back);
        assert_eq!(key_code(23), KeyCode::DpadCenter);
        assert_eq!(key_code(67), KeyCode::Backspace);
    }

    #[test]
    fn unknown_key_keeps_platform_code() {
        assert_eq!(key_code(0x1234), KeyCode::Unknown(0x1234));
    }

    #[test]
    fn meta_state_maps_to_modifiers() {
        let m = modifiers(META_SHIFT_ON | META_CTRL_ON);
        assert!(m.shift && m.ctrl);
        assert!(!m.alt && !m.meta);
        assert!(!modifiers(0).any());
    }

    #[test]
    fn key_event_converts() {
        let raw = KeyEventData {
            key_code: 31,
            action: 1,
            meta_state: META_ALT_ON,
            repeat_count: 0,
            unicode_char: 'c' as u32,
        };
        let ev = KeyEvent::from(&raw);
        assert_eq!(ev.code, KeyCode::C);
        assert_eq!(ev.action, KeyAction::Up);
        assert!(ev.modifiers.alt);
        assert_eq!(ev.unicode, Some('c'));
    }
}

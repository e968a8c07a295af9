use std::fmt;

/// Key identifier forwarded to sketches.
///
/// Host code maps platform key codes into these variants where possible.
/// For unsupported keys, use `KeyCode::Unknown(i32)` with the raw platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyCode {
    // Navigation keys specific to handheld hosts
    Back,
    Menu,
    Search,

    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Space,

    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    DpadCenter,

    // Modifiers as keys
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not yet represented here.
    Unknown(i32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Down,
    Up,
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Key event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub action: KeyAction,
    pub modifiers: Modifiers,
    /// Number of auto-repeats; zero for the initial press.
    pub repeat_count: u32,
    /// Character produced by the key, if any.
    pub unicode: Option<char>,
}

/// Phase of a touch gesture.
///
/// `PointerDown`/`PointerUp` carry the index (into `TouchEvent::pointers`) of
/// the secondary pointer that changed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchAction {
    Down,
    Up,
    Move,
    Cancel,
    PointerDown(usize),
    PointerUp(usize),
    /// Action code the runtime does not model.
    Other(i32),
}

/// A single contact point in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchPointer {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

/// Touch event with every pointer currently in contact.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub pointers: Vec<TouchPointer>,
    /// Event time in milliseconds, host clock.
    pub time_ms: i64,
}

impl TouchEvent {
    /// The pointer the action refers to.
    ///
    /// For `PointerDown`/`PointerUp` that is the indexed pointer; otherwise the
    /// primary (first) pointer.
    pub fn action_pointer(&self) -> Option<&TouchPointer> {
        match self.action {
            TouchAction::PointerDown(i) | TouchAction::PointerUp(i) => self.pointers.get(i),
            _ => self.pointers.first(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

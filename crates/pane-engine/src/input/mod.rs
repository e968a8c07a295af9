//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose host toolkit types.
//! Host bindings translate platform events into `TouchEvent`s and `KeyEvent`s.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    KeyAction,
    KeyCode,
    KeyEvent,
    Modifiers,
    TouchAction,
    TouchEvent,
    TouchPointer,
};

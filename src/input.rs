//! Keyboard input mapping
//!
//! Translates DOM `KeyboardEvent.key` names into game keys. Unknown keys map
//! to `None` and are ignored by the game.

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Space bar: start when not running
    Start,
    /// `P`: pause toggle
    Pause,
}

impl Key {
    /// Map a `KeyboardEvent.key` value (including legacy IE/Edge names)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Space" | "Spacebar" => Some(Key::Start),
            "p" | "P" => Some(Key::Pause),
            _ => None,
        }
    }
}

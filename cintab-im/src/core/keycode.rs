//! Key definitions and key event handling

use std::fmt;

/// A normalized key, either a printable character or a named function key.
///
/// Hosts deliver keys already un-shifted to a canonical character or a name
/// like "Backspace"; [`Key::from_name`] performs that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character (Space is `Char(' ')`)
    Char(char),
    Backspace,
    Escape,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

impl Key {
    /// Map a host key name to a `Key`. Single characters map to
    /// [`Key::Char`]; both the DOM legacy "Esc" and the modern "Escape"
    /// spellings are accepted. Unknown names return `None` and are ignored
    /// by the engine.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }
        match name {
            "Backspace" => Some(Key::Backspace),
            "Esc" | "Escape" => Some(Key::Escape),
            "Left" | "ArrowLeft" => Some(Key::Left),
            "Right" | "ArrowRight" => Some(Key::Right),
            "Up" | "ArrowUp" => Some(Key::Up),
            "Down" | "ArrowDown" => Some(Key::Down),
            "PageUp" => Some(Key::PageUp),
            "PageDown" => Some(Key::PageDown),
            _ => None,
        }
    }

    /// The character for this key, if it is a printable character key.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Key modifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift_key: bool,
    pub control_key: bool,
    pub alt_key: bool,
}

impl KeyModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift_key = shift;
        self
    }

    pub fn with_control(mut self, control: bool) -> Self {
        self.control_key = control;
        self
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt_key = alt;
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.shift_key && !self.control_key && !self.alt_key
    }
}

/// A key event
#[derive(Debug, Clone)]
pub struct KeyEvent {
    /// The normalized key
    pub key: Key,
    /// Modifier key state
    pub modifiers: KeyModifiers,
    /// Whether this is a key press (true) or release (false)
    pub is_press: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: KeyModifiers, is_press: bool) -> Self {
        Self {
            key,
            modifiers,
            is_press,
        }
    }

    /// Create a simple key press event without modifiers
    pub fn press(key: Key) -> Self {
        Self::new(key, KeyModifiers::default(), true)
    }

    /// Create a key press event for a printable character
    pub fn press_char(ch: char) -> Self {
        Self::press(Key::Char(ch))
    }

    /// Get the character for this key event if it's a printable press
    pub fn to_char(&self) -> Option<char> {
        if self.is_press && !self.modifiers.control_key && !self.modifiers.alt_key {
            self.key.to_char()
        } else {
            None
        }
    }
}

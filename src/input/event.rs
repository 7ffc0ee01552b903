//! Event types produced by the input decoder.
//!
//! These structs are created once per decoded sequence and never mutated.
//! Both mouse protocols (SGR and X10) normalize into the same [`MouseEvent`]
//! shape so consumers never need to know which protocol the terminal spoke.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0001;
        /// Alt/Option key held.
        const ALT = 0b0010;
        /// Control key held.
        const CTRL = 0b0100;
        /// Super/Command/Windows key held.
        const META = 0b1000;
    }
}

/// Broad classification of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Printable text (one character, or a pasted run).
    Runes,
    /// A named non-printable key (arrows, function keys, enter, ...).
    Special,
}

/// A single decoded keyboard event.
///
/// `key` is the canonical label applications match against (`"a"`, `"up"`,
/// `"ctrl+c"`, `"alt+x"`). `runes` carries printable text and is empty for
/// special keys. `sequence` preserves the raw bytes that produced the event,
/// useful for debugging terminals with unusual keymaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Classification of this key.
    pub kind: KeyKind,
    /// Canonical key label.
    pub key: String,
    /// Printable text content (empty for special keys).
    pub runes: String,
    /// Modifiers held during the keypress.
    pub modifiers: Modifiers,
    /// Raw input bytes that decoded to this event (lossy UTF-8).
    pub sequence: String,
}

impl KeyEvent {
    /// Build a key event for a single printable character.
    pub fn from_char(ch: char) -> Self {
        Self {
            kind: KeyKind::Runes,
            key: ch.to_string(),
            runes: ch.to_string(),
            modifiers: Modifiers::empty(),
            sequence: ch.to_string(),
        }
    }

    /// Build a named special key (no printable content).
    pub fn special(name: &str, sequence: &str) -> Self {
        Self {
            kind: KeyKind::Special,
            key: name.to_string(),
            runes: String::new(),
            modifiers: Modifiers::empty(),
            sequence: sequence.to_string(),
        }
    }

    /// Re-label this event as Alt+key, preserving the underlying character.
    pub fn with_alt(mut self) -> Self {
        self.modifiers |= Modifiers::ALT;
        self.key = format!("alt+{}", self.key);
        self
    }

    /// Whether this event is the plain Escape key (no modifiers).
    pub fn is_escape(&self) -> bool {
        self.key == "escape" && self.modifiers.is_empty()
    }

    /// Whether this event is Ctrl+C.
    pub fn is_ctrl_c(&self) -> bool {
        self.key == "ctrl+c"
    }
}

/// Mouse button involved in a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Right,
    /// No button (pure motion).
    None,
    /// Wheel scrolled up.
    WheelUp,
    /// Wheel scrolled down.
    WheelDown,
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Pointer moved (possibly with a button held).
    Motion,
    /// Wheel scrolled.
    Wheel,
}

/// A single decoded mouse event.
///
/// Coordinates are 1-based terminal cell positions regardless of which wire
/// protocol (SGR or X10) delivered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseEventKind,
    /// Button involved.
    pub button: MouseButton,
    /// Column, 1-based.
    pub x: u16,
    /// Row, 1-based.
    pub y: u16,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
}

/// Output vocabulary of the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Text delivered via bracketed paste.
    Paste(String),
    /// Terminal focus changed (`true` = gained).
    Focus(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_relabels_key() {
        let key = KeyEvent::from_char('x').with_alt();
        assert_eq!(key.key, "alt+x");
        assert_eq!(key.runes, "x");
        assert!(key.modifiers.contains(Modifiers::ALT));
    }

    #[test]
    fn quit_binding_predicates() {
        assert!(KeyEvent::special("escape", "\x1b").is_escape());
        assert!(KeyEvent::special("ctrl+c", "\x03").is_ctrl_c());
        assert!(!KeyEvent::from_char('c').is_ctrl_c());
    }
}

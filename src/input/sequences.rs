//! Named ANSI/VT escape sequence table.
//!
//! Lookup is longest-match-first: entries share long stems (`ESC[1~` vs
//! `ESC[1;5A`), and preferring the longest candidate keeps the table correct
//! even if a future entry becomes a proper prefix of another.

use super::event::{KeyEvent, KeyKind, Modifiers};

/// One named escape sequence.
struct SeqEntry {
    /// The raw byte sequence as sent by the terminal.
    seq: &'static str,
    /// Canonical key label.
    key: &'static str,
    /// Modifiers implied by the sequence itself.
    mods: Modifiers,
}

const fn plain(seq: &'static str, key: &'static str) -> SeqEntry {
    SeqEntry {
        seq,
        key,
        mods: Modifiers::empty(),
    }
}

const fn modified(seq: &'static str, key: &'static str, mods: Modifiers) -> SeqEntry {
    SeqEntry { seq, key, mods }
}

/// Every sequence the decoder recognizes by name.
///
/// Order within the table does not matter; [`lookup`] always prefers the
/// longest matching entry.
const SEQUENCES: &[SeqEntry] = &[
    // Arrows (CSI and SS3 forms).
    plain("\x1b[A", "up"),
    plain("\x1b[B", "down"),
    plain("\x1b[C", "right"),
    plain("\x1b[D", "left"),
    plain("\x1bOA", "up"),
    plain("\x1bOB", "down"),
    plain("\x1bOC", "right"),
    plain("\x1bOD", "left"),
    // Modifier-annotated arrows (xterm `CSI 1 ; m X`).
    modified("\x1b[1;2A", "shift+up", Modifiers::SHIFT),
    modified("\x1b[1;2B", "shift+down", Modifiers::SHIFT),
    modified("\x1b[1;2C", "shift+right", Modifiers::SHIFT),
    modified("\x1b[1;2D", "shift+left", Modifiers::SHIFT),
    modified("\x1b[1;3A", "alt+up", Modifiers::ALT),
    modified("\x1b[1;3B", "alt+down", Modifiers::ALT),
    modified("\x1b[1;3C", "alt+right", Modifiers::ALT),
    modified("\x1b[1;3D", "alt+left", Modifiers::ALT),
    modified("\x1b[1;5A", "ctrl+up", Modifiers::CTRL),
    modified("\x1b[1;5B", "ctrl+down", Modifiers::CTRL),
    modified("\x1b[1;5C", "ctrl+right", Modifiers::CTRL),
    modified("\x1b[1;5D", "ctrl+left", Modifiers::CTRL),
    // Home / End.
    plain("\x1b[H", "home"),
    plain("\x1b[F", "end"),
    plain("\x1bOH", "home"),
    plain("\x1bOF", "end"),
    plain("\x1b[1~", "home"),
    plain("\x1b[4~", "end"),
    // Editing block.
    plain("\x1b[2~", "insert"),
    plain("\x1b[3~", "delete"),
    plain("\x1b[5~", "pageup"),
    plain("\x1b[6~", "pagedown"),
    // Shift+Tab.
    modified("\x1b[Z", "backtab", Modifiers::SHIFT),
    // Function keys (SS3 for F1-F4, CSI for the rest; both forms for F1-F4).
    plain("\x1bOP", "f1"),
    plain("\x1bOQ", "f2"),
    plain("\x1bOR", "f3"),
    plain("\x1bOS", "f4"),
    plain("\x1b[11~", "f1"),
    plain("\x1b[12~", "f2"),
    plain("\x1b[13~", "f3"),
    plain("\x1b[14~", "f4"),
    plain("\x1b[15~", "f5"),
    plain("\x1b[17~", "f6"),
    plain("\x1b[18~", "f7"),
    plain("\x1b[19~", "f8"),
    plain("\x1b[20~", "f9"),
    plain("\x1b[21~", "f10"),
    plain("\x1b[23~", "f11"),
    plain("\x1b[24~", "f12"),
];

/// Length in bytes of the longest named sequence.
///
/// A buffer at least this long can never be a proper prefix of a table
/// entry, so prefix detection bails out without scanning.
pub const MAX_SEQUENCE_LEN: usize = 6;

/// Find the longest named sequence that is a prefix of `buf`.
///
/// Returns the matched byte length and the decoded key event.
pub fn lookup(buf: &[u8]) -> Option<(usize, KeyEvent)> {
    let mut best: Option<&SeqEntry> = None;
    for entry in SEQUENCES {
        if buf.starts_with(entry.seq.as_bytes())
            && best.map_or(true, |b| entry.seq.len() > b.seq.len())
        {
            best = Some(entry);
        }
    }
    best.map(|entry| {
        let event = KeyEvent {
            kind: KeyKind::Special,
            key: entry.key.to_string(),
            runes: String::new(),
            modifiers: entry.mods,
            sequence: entry.seq.to_string(),
        };
        (entry.seq.len(), event)
    })
}

/// Whether `buf` is a proper prefix of at least one named sequence.
///
/// Used by the decoder to distinguish "incomplete escape, wait for more
/// bytes" from "garbage, drop a byte and move on".
pub fn is_sequence_prefix(buf: &[u8]) -> bool {
    if buf.len() >= MAX_SEQUENCE_LEN {
        return false;
    }
    SEQUENCES
        .iter()
        .any(|entry| entry.seq.len() > buf.len() && entry.seq.as_bytes().starts_with(buf))
}

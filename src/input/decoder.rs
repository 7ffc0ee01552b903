//! Incremental decoder: raw terminal bytes to typed input events.
//!
//! The OS delivers stdin in arbitrarily-sized, arbitrarily-split chunks. The
//! decoder accumulates leftover bytes across [`Decoder::feed`] calls so that
//! an escape sequence split at any byte boundary decodes identically to the
//! same sequence delivered whole. Malformed input never raises an error:
//! unrecognized bytes are dropped one at a time, because a stalled input
//! pipeline is categorically worse than a dropped byte in an interactive
//! session.
//!
//! Decode priority per pass, always consuming a prefix of the buffer:
//!
//! 1. Bracketed paste (`ESC[200~ ... ESC[201~`)
//! 2. Focus in/out (`ESC[I` / `ESC[O`)
//! 3. SGR mouse (`ESC[<b;x;y[Mm]`)
//! 4. X10 mouse (`ESC[M` + 3 offset bytes)
//! 5. Named sequence table, longest match first
//! 6. Alt+key (`ESC` + non-bracket byte)
//! 7. Plain character / control byte
//! 8. Incomplete escape: retain the buffer and wait
//! 9. Garbage: drop one byte and continue

use super::event::{InputEvent, KeyEvent, KeyKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
use super::sequences;

const PASTE_START: &[u8] = b"\x1b[200~";
const PASTE_END: &[u8] = b"\x1b[201~";

/// Cap on buffered input. An unterminated paste (or hostile stream) must not
/// grow the buffer without bound; past the cap the buffer is discarded.
const MAX_BUFFER: usize = 64 * 1024;

/// Stateful input decoder.
///
/// The internal buffer is the only state carried across chunk boundaries.
/// Invariant: it holds either a complete-but-unconsumed tail or a genuinely
/// incomplete sequence, never bytes the decoder has already acted on.
#[derive(Debug, Default)]
pub struct Decoder {
    buffer: Vec<u8>,
}

/// Result of one decode attempt against the front of the buffer.
enum Step {
    /// The buffer holds an incomplete sequence; wait for more bytes.
    NeedMore,
    /// `0` bytes were classified; `1` is the event, if any was produced.
    Consumed(usize, Option<InputEvent>),
}

impl Decoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and drain every event that is complete so far.
    ///
    /// Incomplete escape sequences are retained for the next call. This is
    /// the chunk-boundary-invariant path: splitting a valid sequence across
    /// any number of `feed` calls yields the same events as one call.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<InputEvent> {
        if !chunk.is_empty() {
            if self.buffer.len() + chunk.len() > MAX_BUFFER {
                tracing::warn!(
                    target: "tiller::input",
                    len = self.buffer.len() + chunk.len(),
                    "input buffer exceeded cap, discarding"
                );
                self.buffer.clear();
            }
            self.buffer.extend_from_slice(chunk);
        }
        self.drain()
    }

    /// Resolve the lone-ESC ambiguity when no further bytes are imminent.
    ///
    /// A buffer holding exactly one ESC byte is a bare Escape keypress, not
    /// the start of a sequence. Everything else the decoder retains (an
    /// unterminated paste, a split sequence, a partial UTF-8 character) is
    /// genuinely incomplete and stays retained until more bytes arrive. The
    /// reader calls this when a read returned less than a full buffer, which
    /// is how Escape is distinguished from a sequence start without a timer.
    pub fn flush(&mut self) -> Vec<InputEvent> {
        if self.buffer == [0x1b] {
            self.buffer.clear();
            return vec![InputEvent::Key(KeyEvent::special("escape", "\x1b"))];
        }
        Vec::new()
    }

    /// Bytes currently retained across chunk boundaries.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while !self.buffer.is_empty() {
            match decode_one(&self.buffer) {
                Step::NeedMore => break,
                Step::Consumed(n, event) => {
                    debug_assert!(n > 0, "decode must make forward progress");
                    self.buffer.drain(..n);
                    if let Some(event) = event {
                        events.push(event);
                    }
                }
            }
        }
        events
    }
}

/// Classify exactly one prefix of `buf`.
fn decode_one(buf: &[u8]) -> Step {
    debug_assert!(!buf.is_empty());

    if let Some(step) = decode_paste(buf) {
        return step;
    }
    if let Some(step) = decode_focus(buf) {
        return step;
    }
    if let Some(step) = decode_sgr_mouse(buf) {
        return step;
    }
    if let Some(step) = decode_x10_mouse(buf) {
        return step;
    }
    if let Some((len, key)) = sequences::lookup(buf) {
        return Step::Consumed(len, Some(InputEvent::Key(key)));
    }

    // The buffer may still grow into one of the forms above. Waiting here
    // (rather than after the alt+key rule) is what keeps `ESC` + `OA` split
    // across two chunks decoding as the up arrow instead of alt+O.
    if possibly_incomplete(buf) {
        return Step::NeedMore;
    }

    if buf[0] == 0x1b {
        return decode_escape_prefixed(buf);
    }

    decode_plain(buf)
}

/// Rule 1: bracketed paste.
fn decode_paste(buf: &[u8]) -> Option<Step> {
    if !buf.starts_with(PASTE_START) {
        return None;
    }
    if let Some(idx) = find_subslice(&buf[PASTE_START.len()..], PASTE_END) {
        let content = &buf[PASTE_START.len()..PASTE_START.len() + idx];
        let text = String::from_utf8_lossy(content).into_owned();
        let total = PASTE_START.len() + idx + PASTE_END.len();
        return Some(Step::Consumed(total, Some(InputEvent::Paste(text))));
    }
    // No terminator yet: emit nothing, drop nothing, however many reads the
    // paste spans. The buffer cap bounds a terminator that never comes.
    Some(Step::NeedMore)
}

/// Rule 2: focus reporting.
fn decode_focus(buf: &[u8]) -> Option<Step> {
    if buf.starts_with(b"\x1b[I") {
        return Some(Step::Consumed(3, Some(InputEvent::Focus(true))));
    }
    if buf.starts_with(b"\x1b[O") {
        return Some(Step::Consumed(3, Some(InputEvent::Focus(false))));
    }
    None
}

/// Rule 3: SGR extended mouse protocol (`ESC[<b;x;y` then `M` or `m`).
fn decode_sgr_mouse(buf: &[u8]) -> Option<Step> {
    if !buf.starts_with(b"\x1b[<") {
        return None;
    }
    for (i, &b) in buf.iter().enumerate().skip(3) {
        match b {
            b'0'..=b'9' | b';' => {}
            b'M' | b'm' => {
                let body = &buf[3..i];
                let Some(event) = parse_sgr_body(body, b == b'M') else {
                    // Terminated but malformed; fall to the garbage rule.
                    return Some(Step::Consumed(1, None));
                };
                return Some(Step::Consumed(i + 1, Some(InputEvent::Mouse(event))));
            }
            _ => return Some(Step::Consumed(1, None)),
        }
    }
    Some(Step::NeedMore)
}

fn parse_sgr_body(body: &[u8], is_press: bool) -> Option<MouseEvent> {
    let text = std::str::from_utf8(body).ok()?;
    let mut parts = text.split(';');
    let cb: u16 = parts.next()?.parse().ok()?;
    let x: u16 = parts.next()?.parse().ok()?;
    let y: u16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(mouse_from_flags(cb, x, y, is_press))
}

/// Rule 4: legacy X10 mouse protocol (`ESC[M` + 3 bytes offset by 32).
fn decode_x10_mouse(buf: &[u8]) -> Option<Step> {
    if !buf.starts_with(b"\x1b[M") {
        return None;
    }
    if buf.len() < 6 {
        return Some(Step::NeedMore);
    }
    let cb = u16::from(buf[3].saturating_sub(32));
    let x = u16::from(buf[4].saturating_sub(32));
    let y = u16::from(buf[5].saturating_sub(32));
    // X10 has no explicit release marker; button bits 0b11 mean release.
    let is_press = cb & 0b0100_0011 != 0b0000_0011;
    Some(Step::Consumed(
        6,
        Some(InputEvent::Mouse(mouse_from_flags(cb, x, y, is_press))),
    ))
}

/// Decode the shared bit-packed button/modifier field.
///
/// Bits 0-1: button id. Bit 2: shift. Bit 3: alt. Bit 4: ctrl.
/// Bit 5: motion. Bit 6: wheel. Both protocols agree on this layout, which
/// is why they normalize into one event shape.
fn mouse_from_flags(cb: u16, x: u16, y: u16, is_press: bool) -> MouseEvent {
    let mut modifiers = Modifiers::empty();
    if cb & 0b0000_0100 != 0 {
        modifiers |= Modifiers::SHIFT;
    }
    if cb & 0b0000_1000 != 0 {
        modifiers |= Modifiers::ALT;
    }
    if cb & 0b0001_0000 != 0 {
        modifiers |= Modifiers::CTRL;
    }

    let button_bits = cb & 0b0011;
    let (kind, button) = if cb & 0b0100_0000 != 0 {
        let button = if button_bits == 0 {
            MouseButton::WheelUp
        } else {
            MouseButton::WheelDown
        };
        (MouseEventKind::Wheel, button)
    } else if cb & 0b0010_0000 != 0 {
        (MouseEventKind::Motion, button_from_bits(button_bits))
    } else if is_press {
        (MouseEventKind::Press, button_from_bits(button_bits))
    } else {
        (MouseEventKind::Release, button_from_bits(button_bits))
    };

    MouseEvent {
        kind,
        button,
        x,
        y,
        modifiers,
    }
}

const fn button_from_bits(bits: u16) -> MouseButton {
    match bits {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::None,
    }
}

/// Rules 6 and part of 8: buffer starts with ESC and matched nothing above.
fn decode_escape_prefixed(buf: &[u8]) -> Step {
    if buf.len() == 1 {
        // Possibly a bare Escape keypress; `flush` resolves that case.
        return Step::NeedMore;
    }
    if buf[1] == b'[' {
        // Unrecognized CSI tail. Drop the ESC; the remainder re-decodes as
        // plain bytes, guaranteeing forward progress on garbage.
        tracing::debug!(target: "tiller::input", "dropping byte of unrecognized CSI sequence");
        return Step::Consumed(1, None);
    }
    // Alt+key: ESC prefixing an ordinary byte.
    match decode_char_at(&buf[1..]) {
        CharStep::NeedMore => Step::NeedMore,
        CharStep::Invalid => Step::Consumed(1, None),
        CharStep::Decoded(ch, width) => {
            let key = control_key(buf[1]).map_or_else(|| KeyEvent::from_char(ch), |k| k);
            let mut event = key.with_alt();
            event.sequence = String::from_utf8_lossy(&buf[..=width]).into_owned();
            Step::Consumed(1 + width, Some(InputEvent::Key(event)))
        }
    }
}

/// Rule 7: plain character or control byte.
fn decode_plain(buf: &[u8]) -> Step {
    if let Some(key) = control_key(buf[0]) {
        return Step::Consumed(1, Some(InputEvent::Key(key)));
    }
    match decode_char_at(buf) {
        CharStep::NeedMore => Step::NeedMore,
        CharStep::Invalid => {
            tracing::debug!(target: "tiller::input", byte = buf[0], "dropping undecodable byte");
            Step::Consumed(1, None)
        }
        CharStep::Decoded(ch, width) => {
            Step::Consumed(width, Some(InputEvent::Key(KeyEvent::from_char(ch))))
        }
    }
}

/// Whether `buf` could still grow into a recognized escape sequence.
fn possibly_incomplete(buf: &[u8]) -> bool {
    if buf[0] != 0x1b {
        return false;
    }
    let is_prefix_of = |seq: &[u8]| seq.len() > buf.len() && seq.starts_with(buf);
    buf.len() == 1
        || is_prefix_of(PASTE_START)
        || is_prefix_of(b"\x1b[I")
        || is_prefix_of(b"\x1b[<")
        || is_prefix_of(b"\x1b[M")
        || sequences::is_sequence_prefix(buf)
}

/// Map a control byte to a named key event.
fn control_key(byte: u8) -> Option<KeyEvent> {
    let name: String = match byte {
        0x00 => "null".to_string(),
        0x09 => "tab".to_string(),
        0x0d => "enter".to_string(),
        0x7f => "backspace".to_string(),
        0x01..=0x1a => format!("ctrl+{}", (b'a' + byte - 1) as char),
        0x1c => "ctrl+\\".to_string(),
        0x1d => "ctrl+]".to_string(),
        0x1e => "ctrl+^".to_string(),
        0x1f => "ctrl+_".to_string(),
        _ => return None,
    };
    let modifiers = if name.starts_with("ctrl+") {
        Modifiers::CTRL
    } else {
        Modifiers::empty()
    };
    Some(KeyEvent {
        kind: KeyKind::Special,
        key: name,
        runes: String::new(),
        modifiers,
        sequence: String::from_utf8_lossy(&[byte]).into_owned(),
    })
}

enum CharStep {
    NeedMore,
    Invalid,
    Decoded(char, usize),
}

/// Decode one UTF-8 scalar from the front of `input`.
///
/// A multi-byte character split across chunks is retained like a split
/// escape sequence rather than mangled into replacement characters.
fn decode_char_at(input: &[u8]) -> CharStep {
    let first = input[0];
    let width = if first < 0x80 {
        1
    } else if (first & 0xE0) == 0xC0 {
        2
    } else if (first & 0xF0) == 0xE0 {
        3
    } else if (first & 0xF8) == 0xF0 {
        4
    } else {
        return CharStep::Invalid;
    };
    if input.len() < width {
        return CharStep::NeedMore;
    }
    match std::str::from_utf8(&input[..width]) {
        Ok(s) => s
            .chars()
            .next()
            .map_or(CharStep::Invalid, |ch| CharStep::Decoded(ch, width)),
        Err(_) => CharStep::Invalid,
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(decoder: &mut Decoder, chunks: &[&[u8]]) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for chunk in chunks {
            events.extend(decoder.feed(chunk));
        }
        events
    }

    #[test]
    fn plain_characters() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"hi");
        assert_eq!(
            events,
            vec![
                InputEvent::Key(KeyEvent::from_char('h')),
                InputEvent::Key(KeyEvent::from_char('i')),
            ]
        );
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn ctrl_keys() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x03");
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert_eq!(key.key, "ctrl+c");
        assert!(key.modifiers.contains(Modifiers::CTRL));
        assert!(key.is_ctrl_c());
    }

    #[test]
    fn named_sequence() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[A");
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert_eq!(key.key, "up");
        assert_eq!(key.kind, KeyKind::Special);
    }

    #[test]
    fn longest_match_over_decoder() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[1;5A");
        assert_eq!(events.len(), 1);
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert_eq!(key.key, "ctrl+up");
    }

    #[test]
    fn alt_key() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1bx");
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert_eq!(key.key, "alt+x");
        assert_eq!(key.runes, "x");
        assert!(key.modifiers.contains(Modifiers::ALT));
    }

    #[test]
    fn sgr_mouse_press() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[<0;5;10M");
        assert_eq!(
            events,
            vec![InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Press,
                button: MouseButton::Left,
                x: 5,
                y: 10,
                modifiers: Modifiers::empty(),
            })]
        );
    }

    #[test]
    fn sgr_mouse_release_and_modifiers() {
        let mut decoder = Decoder::new();
        // ctrl (16) + right button (2) = 18, lowercase m = release
        let events = decoder.feed(b"\x1b[<18;3;4m");
        let InputEvent::Mouse(mouse) = &events[0] else {
            panic!("expected mouse");
        };
        assert_eq!(mouse.kind, MouseEventKind::Release);
        assert_eq!(mouse.button, MouseButton::Right);
        assert!(mouse.modifiers.contains(Modifiers::CTRL));
    }

    #[test]
    fn sgr_wheel() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[<64;1;1M\x1b[<65;1;1M");
        let buttons: Vec<_> = events
            .iter()
            .map(|e| match e {
                InputEvent::Mouse(m) => m.button,
                InputEvent::Key(_) | InputEvent::Paste(_) | InputEvent::Focus(_) => {
                    panic!("expected mouse")
                }
            })
            .collect();
        assert_eq!(buttons, vec![MouseButton::WheelUp, MouseButton::WheelDown]);
    }

    #[test]
    fn x10_mouse_matches_sgr() {
        // ESC[M then button 0, x=1, y=1 offset by 32: a left press at (1,1),
        // equivalent to the SGR form ESC[<0;1;1M.
        let mut sgr = Decoder::new();
        let mut x10 = Decoder::new();
        let from_sgr = sgr.feed(b"\x1b[<0;1;1M");
        let from_x10 = x10.feed(b"\x1b[M !!");
        assert_eq!(from_sgr, from_x10);
    }

    #[test]
    fn x10_release() {
        let mut decoder = Decoder::new();
        // button bits 0b11 = release, at (2,3)
        let events = decoder.feed(b"\x1b[M#\"#");
        let InputEvent::Mouse(mouse) = &events[0] else {
            panic!("expected mouse");
        };
        assert_eq!(mouse.kind, MouseEventKind::Release);
        assert_eq!((mouse.x, mouse.y), (2, 3));
    }

    #[test]
    fn x10_motion() {
        let mut decoder = Decoder::new();
        // 32 (motion) + 0 (left) = 32, +32 offset = 64 = '@'
        let events = decoder.feed(b"\x1b[M@!!");
        let InputEvent::Mouse(mouse) = &events[0] else {
            panic!("expected mouse");
        };
        assert_eq!(mouse.kind, MouseEventKind::Motion);
        assert_eq!(mouse.button, MouseButton::Left);
    }

    #[test]
    fn chunk_boundary_invariance() {
        // ESC, then [, then <0;5;10M across three calls must equal one feed
        // of the whole sequence.
        let mut whole = Decoder::new();
        let expected = whole.feed(b"\x1b[<0;5;10M");

        let mut split = Decoder::new();
        let events = feed_all(&mut split, &[b"\x1b", b"[", b"<0;5;10M"]);
        assert_eq!(events, expected);
        assert!(split.pending().is_empty());
    }

    #[test]
    fn chunk_boundary_invariance_named_sequence() {
        let mut whole = Decoder::new();
        let expected = whole.feed(b"\x1b[1;5A");

        let mut split = Decoder::new();
        let events = feed_all(&mut split, &[b"\x1b", b"[1", b";5", b"A"]);
        assert_eq!(events, expected);
    }

    #[test]
    fn ss3_split_is_not_alt() {
        // ESC then OA must decode as the up arrow, never alt+O followed by A.
        let mut decoder = Decoder::new();
        let events = feed_all(&mut decoder, &[b"\x1b", b"OA"]);
        assert_eq!(events.len(), 1);
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert_eq!(key.key, "up");
    }

    #[test]
    fn bracketed_paste_one_chunk() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[200~hello world\x1b[201~");
        assert_eq!(events, vec![InputEvent::Paste("hello world".to_string())]);
    }

    #[test]
    fn bracketed_paste_waits_for_terminator() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[200~hello world");
        assert!(events.is_empty(), "nothing until the terminator arrives");

        let events = decoder.feed(b"\x1b[201~");
        assert_eq!(events, vec![InputEvent::Paste("hello world".to_string())]);
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn paste_split_across_reads_survives_flush() {
        // A short read mid-paste makes the reader flush; the unterminated
        // paste must stay retained rather than emit partial text whose
        // terminator would later decode as garbage keystrokes.
        let mut decoder = Decoder::new();
        assert!(decoder.feed(b"\x1b[200~hello").is_empty());
        assert!(decoder.flush().is_empty());
        let events = decoder.feed(b" world\x1b[201~");
        assert_eq!(events, vec![InputEvent::Paste("hello world".to_string())]);
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn split_sequence_survives_flush() {
        let mut decoder = Decoder::new();
        assert!(decoder.feed(b"\x1b[").is_empty());
        assert!(decoder.flush().is_empty());
        let events = decoder.feed(b"A");
        assert_eq!(events.len(), 1);
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert_eq!(key.key, "up");
    }

    #[test]
    fn paste_containing_escape_sequences() {
        // Pasted arrow-key bytes are text, not keys.
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[200~\x1b[Aup\x1b[201~");
        assert_eq!(events, vec![InputEvent::Paste("\u{1b}[Aup".to_string())]);
    }

    #[test]
    fn focus_events() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[I\x1b[O");
        assert_eq!(
            events,
            vec![InputEvent::Focus(true), InputEvent::Focus(false)]
        );
    }

    #[test]
    fn garbage_makes_forward_progress() {
        let mut decoder = Decoder::new();
        // An unrecognized CSI tail: the ESC is dropped, then the remainder
        // re-decodes as plain characters. The buffer must shrink every pass.
        let events = decoder.feed(b"\x1b[?99q");
        assert!(decoder.pending().is_empty());
        // The ESC is dropped; the five remaining bytes decode as characters.
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn garbage_never_stalls() {
        // An OSC sequence the decoder does not recognize: it must classify
        // or discard every byte rather than stalling on it.
        let mut decoder = Decoder::new();
        let _ = decoder.feed(b"\x1b]0;title\x07");
        let _ = decoder.flush();
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn incomplete_escape_retained() {
        let mut decoder = Decoder::new();
        let events = decoder.feed(b"\x1b[");
        assert!(events.is_empty());
        assert_eq!(decoder.pending(), b"\x1b[");
    }

    #[test]
    fn lone_escape_resolves_on_flush() {
        let mut decoder = Decoder::new();
        assert!(decoder.feed(b"\x1b").is_empty());
        let events = decoder.flush();
        let InputEvent::Key(key) = &events[0] else {
            panic!("expected key");
        };
        assert!(key.is_escape());
    }

    #[test]
    fn split_utf8_character() {
        let mut decoder = Decoder::new();
        let bytes = "é".as_bytes();
        assert!(decoder.feed(&bytes[..1]).is_empty());
        let events = decoder.feed(&bytes[1..]);
        assert_eq!(events, vec![InputEvent::Key(KeyEvent::from_char('é'))]);
    }

    #[test]
    fn buffer_cap_discards() {
        let mut decoder = Decoder::new();
        // Unterminated paste larger than the cap: buffer resets, no stall.
        let _ = decoder.feed(b"\x1b[200~");
        let big = vec![b'a'; MAX_BUFFER];
        let _ = decoder.feed(&big);
        assert!(decoder.pending().len() <= MAX_BUFFER);
    }

    #[test]
    fn x10_waits_for_full_payload() {
        let mut decoder = Decoder::new();
        assert!(decoder.feed(b"\x1b[M ").is_empty());
        let events = decoder.feed(b"!!");
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], InputEvent::Mouse(_)));
    }
}

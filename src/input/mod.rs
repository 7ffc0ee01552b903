//! Input protocol decoding: raw stdin bytes to typed events.
//!
//! The decoder is a pure state machine over an accumulating byte buffer; it
//! has no knowledge of threads or channels. The runtime's input reader owns
//! one [`Decoder`] and forwards its events onto the message bus.

mod decoder;
mod event;
mod sequences;

pub use decoder::Decoder;
pub use event::{InputEvent, KeyEvent, KeyKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};

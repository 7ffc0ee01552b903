//! Terminal control: backend trait, crossterm implementation, and the
//! crash-safe acquisition/release session.
//!
//! The underlying terminal handle is single-writer by construction: only the
//! session (and explicit backend calls it owns) ever touch raw mode or the
//! screen buffer, and those calls are sequenced, never concurrent.

mod backend;
pub(crate) mod output;
mod session;

pub use backend::{CrosstermBackend, TerminalBackend};
pub use session::TerminalSession;

//! The system message vocabulary carried by the runtime bus.
//!
//! This closed union is the only thing that crosses actor boundaries. All
//! producers offer onto one unbounded MPSC channel; the update loop is the
//! single consumer, so messages arrive in FIFO offer order across producers.

use std::time::{Duration, Instant};

use crate::input::{KeyEvent, MouseEvent};

/// A tagged message on the runtime bus.
#[derive(Debug)]
pub enum SystemMsg<M> {
    /// The terminal was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// A key was decoded from stdin.
    KeyPressed(KeyEvent),
    /// A mouse event was decoded from stdin.
    Mouse(MouseEvent),
    /// A render frame completed.
    Tick {
        /// When the frame started.
        time: Instant,
        /// How long the frame took.
        render_time: Duration,
    },
    /// A message produced by the application (commands, subscriptions, or an
    /// external [`RuntimeHandle`](crate::runtime::RuntimeHandle)).
    User(M),
    /// Stop the runtime.
    Quit,
}

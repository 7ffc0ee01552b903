//! Concurrent runtime: message bus, actors, and the update loop.
//!
//! ```text
//!   stdin ──▶ InputReader ────┐
//!   SIGWINCH ▶ ResizeWatcher ─┤
//!   SubscriptionManager ──────┼──▶ unbounded bus ──▶ update loop ──▶ SharedState
//!   RenderScheduler ──────────┘         ▲                               │
//!        ▲                              │ Tick                          │ snapshot
//!        └──────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! Producers only ever offer messages; the update loop is the single
//! consumer and the single writer of [`RuntimeState`]. Everything else
//! reads lock-free snapshots.

use std::any::Any;
use std::sync::{Arc, Mutex, PoisonError};

mod message;
mod program;
mod reader;
mod scheduler;
mod state;
mod subscription;

pub use message::SystemMsg;
pub use program::{Program, RuntimeHandle};
pub use state::RuntimeState;
pub use subscription::REBUILD_INTERVAL;

/// A panic payload carried from a worker thread back to `run`.
pub(crate) type Defect = Box<dyn Any + Send + 'static>;

/// Shared slot parking the first defect until teardown completes.
pub(crate) type DefectSlot = Arc<Mutex<Option<Defect>>>;

/// Park a defect. First writer wins; later defects on other threads are
/// side effects of the same failure and are dropped.
pub(crate) fn store_defect(slot: &DefectSlot, payload: Defect) {
    let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if guard.is_none() {
        *guard = Some(payload);
    }
}

/// Take the parked defect, if any.
pub(crate) fn take_defect(slot: &DefectSlot) -> Option<Defect> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).take()
}

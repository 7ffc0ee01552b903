//! Shared runtime state.
//!
//! The state cell is the only mutable data shared across actors. The update
//! loop is its sole writer; the render scheduler and subscription manager
//! only ever load snapshots. An atomic pointer swap (no lock) guarantees
//! readers see a fully-formed prior or current value, never a torn one.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;

/// One immutable snapshot of the runtime's shared state.
#[derive(Debug)]
pub struct RuntimeState<M> {
    /// The current application model.
    pub model: Arc<M>,
    /// Whether the runtime is still accepting and processing messages.
    pub running: bool,
    /// Duration of the most recent render frame.
    pub last_render_time: Duration,
    /// Frames completed since start.
    pub frame_count: u64,
}

impl<M> Clone for RuntimeState<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            running: self.running,
            last_render_time: self.last_render_time,
            frame_count: self.frame_count,
        }
    }
}

/// Atomically swapped reference cell holding the current [`RuntimeState`].
pub(crate) struct SharedState<M> {
    inner: Arc<ArcSwap<RuntimeState<M>>>,
}

impl<M> Clone for SharedState<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> SharedState<M> {
    pub fn new(model: M) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(RuntimeState {
                model: Arc::new(model),
                running: true,
                last_render_time: Duration::ZERO,
                frame_count: 0,
            })),
        }
    }

    /// Load the current snapshot.
    pub fn load(&self) -> Arc<RuntimeState<M>> {
        self.inner.load_full()
    }

    /// Publish a new snapshot. Update-loop only.
    pub fn store(&self, state: RuntimeState<M>) {
        self.inner.store(Arc::new(state));
    }

    /// Flip `running` to false, keeping the rest of the snapshot.
    pub fn stop(&self) {
        self.inner.rcu(|prev| {
            let mut next = RuntimeState::clone(prev);
            next.running = false;
            next
        });
    }

    pub fn is_running(&self) -> bool {
        self.inner.load().running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_are_independent() {
        let shared = SharedState::new(1u32);
        let before = shared.load();

        let mut next = RuntimeState::clone(&before);
        next.model = Arc::new(2u32);
        next.frame_count = 7;
        shared.store(next);

        // The old snapshot is untouched; readers holding it see the prior
        // fully-formed value.
        assert_eq!(*before.model, 1);
        let after = shared.load();
        assert_eq!(*after.model, 2);
        assert_eq!(after.frame_count, 7);
    }

    #[test]
    fn stop_preserves_model() {
        let shared = SharedState::new("model".to_string());
        shared.stop();
        let state = shared.load();
        assert!(!state.running);
        assert!(!shared.is_running());
        assert_eq!(*state.model, "model");
    }
}

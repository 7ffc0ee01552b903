//! Subscription manager actor: periodic tear-down and rebuild of the
//! application's event stream.
//!
//! On a fixed poll interval the manager re-derives the subscription from the
//! latest model snapshot, cancels whichever stream it previously forked, and
//! forks the fresh one. The rebuild is unconditional: it happens even when
//! the model has not changed since the last poll. That cadence is observable
//! behavior applications may depend on; do not replace it with a
//! change-triggered rebuild.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;

use crate::component::{Component, SubSink};

use super::message::SystemMsg;
use super::state::SharedState;
use super::DefectSlot;

/// How often the subscription stream is torn down and rebuilt.
pub const REBUILD_INTERVAL: Duration = Duration::from_millis(100);

/// Subscription manager actor handle.
pub(crate) struct SubscriptionManager {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SubscriptionManager {
    /// Spawn the manager thread.
    pub fn spawn<C: Component>(
        component: Arc<C>,
        shared: SharedState<C::Model>,
        bus: Sender<SystemMsg<C::Msg>>,
        defects: DefectSlot,
    ) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();

        let handle = thread::Builder::new()
            .name("tiller-subs".to_string())
            .spawn(move || {
                run_loop(&component, &shared, &bus, &defects, &shutdown_flag);
            })
            .ok();
        if handle.is_none() {
            tracing::warn!(target: "tiller::runtime", "failed to spawn subscription thread");
        }

        Self {
            shutdown,
            handle,
        }
    }

    /// Stop the manager and wait for it (bounded by one poll interval).
    pub fn join(mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SubscriptionManager {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

fn run_loop<C: Component>(
    component: &Arc<C>,
    shared: &SharedState<C::Model>,
    bus: &Sender<SystemMsg<C::Msg>>,
    defects: &DefectSlot,
    shutdown: &AtomicBool,
) {
    // Cancellation token of the currently forked stream, if any.
    let mut current: Option<Arc<AtomicBool>> = None;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }
        let snapshot = shared.load();
        if !snapshot.running {
            break;
        }

        // Interrupt the previous stream, then fork the fresh one.
        if let Some(token) = current.take() {
            token.store(true, Ordering::Relaxed);
        }
        if let Some(sub) = component.subscriptions(&snapshot.model) {
            let cancelled = Arc::new(AtomicBool::new(false));
            current = Some(cancelled.clone());

            let bus_emit = bus.clone();
            let bus_defect = bus.clone();
            let defects = defects.clone();
            let spawned = thread::Builder::new()
                .name("tiller-sub-stream".to_string())
                .spawn(move || {
                    let sink = SubSink::new(
                        move |msg| {
                            let _ = bus_emit.send(SystemMsg::User(msg));
                        },
                        cancelled,
                    );
                    if let Err(payload) = catch_unwind(AssertUnwindSafe(|| sub.fork(sink))) {
                        // A subscription defect is fatal, but the terminal
                        // must be restored first: park the payload and ask
                        // the update loop to drain.
                        super::store_defect(&defects, payload);
                        let _ = bus_defect.send(SystemMsg::Quit);
                    }
                });
            if let Err(err) = spawned {
                tracing::warn!(target: "tiller::runtime", %err, "failed to fork subscription stream");
            }
        }

        thread::sleep(REBUILD_INTERVAL);
    }

    if let Some(token) = current {
        token.store(true, Ordering::Relaxed);
    }
}

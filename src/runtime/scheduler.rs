//! Render scheduler actor: fixed-cadence frame generation.
//!
//! Every `1000/fps` ms the scheduler loads the current state snapshot, calls
//! the application's `view`, and drives the renderer's three-phase contract.
//! The cadence is fixed, not adaptive: a slow frame never skips the next
//! deadline or batches catch-up renders, it just pushes the next deadline
//! forward. Reading the snapshot is a single atomic load, so overlapping a
//! late frame with other actors is harmless.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use crate::component::Component;
use crate::render::Renderer;

use super::message::SystemMsg;
use super::state::SharedState;
use super::DefectSlot;

/// Render scheduler actor handle.
pub(crate) struct RenderScheduler {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    /// Spawn the scheduler thread.
    pub fn spawn<C: Component, R: Renderer<C::View>>(
        component: Arc<C>,
        shared: SharedState<C::Model>,
        bus: Sender<SystemMsg<C::Msg>>,
        renderer: R,
        fps: u32,
        debug: bool,
        defects: DefectSlot,
    ) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();
        let interval = Duration::from_secs(1) / fps.max(1);

        let handle = thread::Builder::new()
            .name("tiller-render".to_string())
            .spawn(move || {
                run_loop(
                    &component,
                    &shared,
                    &bus,
                    renderer,
                    interval,
                    debug,
                    &defects,
                    &shutdown_flag,
                );
            })
            .ok();
        if handle.is_none() {
            tracing::warn!(target: "tiller::runtime", "failed to spawn render thread");
        }

        Self {
            shutdown,
            handle,
        }
    }

    /// Stop the scheduler and wait for it.
    pub fn join(mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_loop<C: Component, R: Renderer<C::View>>(
    component: &Arc<C>,
    shared: &SharedState<C::Model>,
    bus: &Sender<SystemMsg<C::Msg>>,
    mut renderer: R,
    interval: Duration,
    debug: bool,
    defects: &DefectSlot,
    shutdown: &AtomicBool,
) {
    let start = Instant::now();
    let mut next_tick = start + interval;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        let now = Instant::now();
        if now >= next_tick {
            let snapshot = shared.load();
            if !snapshot.running {
                break;
            }

            let frame_start = Instant::now();
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                render_frame(component, &snapshot.model, &mut renderer)
            }));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    // Mid-run render I/O failures are advisory; the loop
                    // stays alive and the next frame retries.
                    tracing::warn!(target: "tiller::runtime", %err, "frame render failed");
                }
                Err(payload) => {
                    // A `view` defect is fatal; route it through the update
                    // loop so the terminal is restored before it re-raises.
                    super::store_defect(defects, payload);
                    let _ = bus.send(SystemMsg::Quit);
                    break;
                }
            }

            let render_time = frame_start.elapsed();
            if debug && render_time > interval {
                tracing::warn!(
                    target: "tiller::runtime",
                    frame_ms = render_time.as_millis() as u64,
                    budget_ms = interval.as_millis() as u64,
                    "frame exceeded budget"
                );
            }
            if bus
                .send(SystemMsg::Tick {
                    time: frame_start,
                    render_time,
                })
                .is_err()
            {
                break;
            }

            next_tick += interval;
            // Behind schedule: advance without queueing catch-up frames.
            if next_tick < now {
                next_tick = now + interval;
            }
        } else {
            let sleep_duration = next_tick - now;
            thread::sleep(sleep_duration.min(Duration::from_millis(1)));
        }
    }
}

fn render_frame<C: Component, R: Renderer<C::View>>(
    component: &Arc<C>,
    model: &C::Model,
    renderer: &mut R,
) -> std::io::Result<()> {
    let view = component.view(model);
    renderer.begin_frame()?;
    renderer.render(&view)?;
    renderer.end_frame()
}

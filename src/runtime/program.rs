//! Program: lifecycle wrapper and the update loop.
//!
//! `run` owns the whole Starting → Running → Draining → Stopped state
//! machine. The update loop is the sole consumer of the bus and the sole
//! writer of the shared state: two messages are never processed
//! concurrently, and a model transition is never interleaved with another.
//! That sequencing is the single most important invariant of the runtime,
//! because `update` is allowed to assume exclusive access to the prior
//! model.
//!
//! Crash safety: the terminal is restored on every exit path. Acquisition
//! failures abort before Running; `Quit` drains normally; a panic escaping
//! `update`, `view`, or a subscription is caught, teardown runs, and only
//! then is the panic re-raised.

use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::component::{Cmd, Component, SystemEvent};
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::render::Renderer;
use crate::terminal::{CrosstermBackend, TerminalBackend, TerminalSession};

use super::message::SystemMsg;
use super::reader::{InputReader, ResizeWatcher};
use super::scheduler::RenderScheduler;
use super::state::{RuntimeState, SharedState};
use super::subscription::SubscriptionManager;
use super::{take_defect, DefectSlot};

/// Cloneable handle for offering messages onto the bus from outside the
/// runtime (network threads, agent streams, test harnesses).
pub struct RuntimeHandle<M> {
    tx: Sender<SystemMsg<M>>,
}

impl<M> Clone for RuntimeHandle<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<M> RuntimeHandle<M> {
    /// Offer an application message.
    pub fn send(&self, msg: M) {
        let _ = self.tx.send(SystemMsg::User(msg));
    }

    /// Ask the runtime to stop.
    pub fn quit(&self) {
        let _ = self.tx.send(SystemMsg::Quit);
    }
}

/// A configured MVU program, ready to run.
pub struct Program<C: Component> {
    component: Arc<C>,
    config: RuntimeConfig,
    bus_tx: Sender<SystemMsg<C::Msg>>,
    bus_rx: Receiver<SystemMsg<C::Msg>>,
}

impl<C: Component> Program<C> {
    /// Wrap a component with the default configuration.
    pub fn new(component: C) -> Self {
        let (bus_tx, bus_rx) = unbounded();
        Self {
            component: Arc::new(component),
            config: RuntimeConfig::default(),
            bus_tx,
            bus_rx,
        }
    }

    /// Replace the runtime configuration.
    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// A handle for offering messages from outside the runtime.
    ///
    /// Valid before and during `run`; messages sent before the runtime
    /// starts are queued and processed once it is running.
    pub fn handle(&self) -> RuntimeHandle<C::Msg> {
        RuntimeHandle {
            tx: self.bus_tx.clone(),
        }
    }

    /// Run against the real terminal. Returns when the runtime reaches
    /// Stopped.
    pub fn run(self, renderer: impl Renderer<C::View>) -> Result<()> {
        self.run_on(CrosstermBackend::new(), renderer)
    }

    /// Run against an explicit terminal backend.
    ///
    /// This is the seam tests use to substitute a recording backend and a
    /// null renderer.
    pub fn run_on(
        self,
        backend: impl TerminalBackend + 'static,
        renderer: impl Renderer<C::View>,
    ) -> Result<()> {
        // Starting: acquire the terminal before anything else observable.
        let mut session = TerminalSession::acquire(backend, &self.config)?;

        let (model, commands) = self.component.init();
        let shared = SharedState::new(model);
        let defects: DefectSlot = Arc::new(Mutex::new(None));
        spawn_commands(commands, &self.bus_tx);

        // Seed the application with the initial size; later changes arrive
        // via SIGWINCH.
        if let Ok((width, height)) = session.size() {
            let _ = self.bus_tx.send(SystemMsg::WindowResized { width, height });
        }

        let reader = InputReader::spawn(self.bus_tx.clone(), &self.config);
        let resize = match ResizeWatcher::spawn(self.bus_tx.clone()) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                tracing::warn!(target: "tiller::runtime", %err, "resize watcher unavailable");
                None
            }
        };
        let subscriptions = SubscriptionManager::spawn(
            Arc::clone(&self.component),
            shared.clone(),
            self.bus_tx.clone(),
            defects.clone(),
        );
        let scheduler = RenderScheduler::spawn(
            Arc::clone(&self.component),
            shared.clone(),
            self.bus_tx.clone(),
            renderer,
            self.config.fps,
            self.config.debug,
            defects.clone(),
        );

        // Running. A panic out of `update` must still tear down, so the
        // loop runs under catch_unwind and re-raises after release.
        let outcome = catch_unwind(AssertUnwindSafe(|| self.update_loop(&shared)));

        // Draining: interrupt producers, then restore the terminal.
        shared.stop();
        reader.shutdown();
        if let Some(watcher) = resize {
            watcher.join();
        }
        subscriptions.join();
        scheduler.join();
        session.release();

        // Stopped. Re-raise any defect now that the terminal is sane.
        match outcome {
            Err(payload) => resume_unwind(payload),
            Ok(()) => {
                if let Some(payload) = take_defect(&defects) {
                    resume_unwind(payload);
                }
                Ok(())
            }
        }
    }

    /// Drain the bus until `Quit`. Sole consumer, sole state writer.
    fn update_loop(&self, shared: &SharedState<C::Model>) {
        while let Ok(msg) = self.bus_rx.recv() {
            match msg {
                SystemMsg::Quit => {
                    shared.stop();
                    break;
                }
                SystemMsg::User(msg) => self.apply(shared, msg),
                SystemMsg::Tick { time, render_time } => {
                    let prev = shared.load();
                    shared.store(RuntimeState {
                        model: Arc::clone(&prev.model),
                        running: prev.running,
                        last_render_time: render_time,
                        frame_count: prev.frame_count + 1,
                    });
                    if let Some(msg) = self.component.system(SystemEvent::Tick(time)) {
                        self.apply(shared, msg);
                    }
                }
                SystemMsg::WindowResized { width, height } => {
                    if let Some(msg) = self
                        .component
                        .system(SystemEvent::WindowResized { width, height })
                    {
                        self.apply(shared, msg);
                    }
                }
                SystemMsg::KeyPressed(key) => {
                    if let Some(msg) = self.component.system(SystemEvent::Key(&key)) {
                        self.apply(shared, msg);
                    }
                }
                SystemMsg::Mouse(mouse) => {
                    if let Some(msg) = self.component.system(SystemEvent::Mouse(&mouse)) {
                        self.apply(shared, msg);
                    }
                }
            }
        }
    }

    /// Apply one application message: the only model transition in the
    /// system.
    fn apply(&self, shared: &SharedState<C::Model>, msg: C::Msg) {
        let prev = shared.load();
        let (model, commands) = self.component.update(msg, &prev.model);
        shared.store(RuntimeState {
            model: Arc::new(model),
            running: prev.running,
            last_render_time: prev.last_render_time,
            frame_count: prev.frame_count,
        });
        spawn_commands(commands, &self.bus_tx);
    }
}

/// Fork each command onto a worker thread.
fn spawn_commands<M: Send + 'static>(commands: Vec<Cmd<M>>, bus: &Sender<SystemMsg<M>>) {
    for command in commands {
        let bus = bus.clone();
        let spawned = thread::Builder::new()
            .name("tiller-cmd".to_string())
            .spawn(move || {
                // Intentional, per the runtime contract: a command that
                // returns None or panics is swallowed. No crash, no quit, no
                // retry. Applications that need failure visibility must
                // encode it as an explicit message variant.
                match catch_unwind(AssertUnwindSafe(|| command.run())) {
                    Ok(Some(msg)) => {
                        let _ = bus.send(SystemMsg::User(msg));
                    }
                    Ok(None) => {}
                    Err(_) => {
                        tracing::debug!(target: "tiller::runtime", "command failed, dropping");
                    }
                }
            });
        if let Err(err) = spawned {
            tracing::warn!(target: "tiller::runtime", %err, "failed to spawn command thread");
        }
    }
}

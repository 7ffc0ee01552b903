//! The application contract: Model-View-Update with commands and
//! subscriptions.
//!
//! The runtime only ever *calls* a [`Component`]; it never owns application
//! state beyond holding the current model snapshot. `update` is the sole
//! state transition and may assume exclusive access to the prior model,
//! because the update loop is strictly sequential.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::input::{KeyEvent, MouseEvent};

/// An asynchronous unit of work yielding at most one message.
///
/// Commands are produced by `init`/`update`, forked onto a worker thread by
/// the runtime, and consumed exactly once. A command that fails (returns
/// `None` or panics) is silently dropped: no crash, no quit, no retry.
/// Applications that need failure visibility must encode it as an explicit
/// message variant. There is also no cancellation: a command that never
/// completes simply never delivers.
pub struct Cmd<M> {
    task: Box<dyn FnOnce() -> Option<M> + Send + 'static>,
}

impl<M> Cmd<M> {
    /// Wrap a closure as a command.
    pub fn new(task: impl FnOnce() -> Option<M> + Send + 'static) -> Self {
        Self {
            task: Box::new(task),
        }
    }

    /// A command that immediately yields `msg`.
    pub fn msg(msg: M) -> Self
    where
        M: Send + 'static,
    {
        Self::new(move || Some(msg))
    }

    /// Execute the command on the current thread.
    pub(crate) fn run(self) -> Option<M> {
        (self.task)()
    }
}

impl<M> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Cmd")
    }
}

/// Handle given to a running subscription stream.
///
/// The stream emits messages through it and must observe cancellation
/// cooperatively: once the runtime rebuilds subscriptions (every poll
/// interval) or shuts down, [`SubSink::emit`] returns `false` and the stream
/// should return.
pub struct SubSink<M> {
    send: Box<dyn Fn(M) + Send + 'static>,
    cancelled: Arc<AtomicBool>,
}

impl<M> SubSink<M> {
    pub(crate) fn new(send: impl Fn(M) + Send + 'static, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            send: Box::new(send),
            cancelled,
        }
    }

    /// Emit a message onto the runtime bus.
    ///
    /// Returns `false` once this stream has been cancelled; the message is
    /// dropped in that case and the stream should stop.
    pub fn emit(&self, msg: M) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return false;
        }
        (self.send)(msg);
        true
    }

    /// Whether this stream has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A message-producing event stream, re-derived from the model on a fixed
/// poll interval.
///
/// The runtime tears the previous stream down and forks a fresh one each
/// interval whether or not the model changed; streams must tolerate being
/// restarted at that cadence.
pub struct Sub<M> {
    run: Box<dyn FnOnce(SubSink<M>) + Send + 'static>,
}

impl<M> Sub<M> {
    /// Wrap a closure as a subscription stream body.
    pub fn new(run: impl FnOnce(SubSink<M>) + Send + 'static) -> Self {
        Self { run: Box::new(run) }
    }

    /// Run the stream to completion on the current thread.
    pub(crate) fn fork(self, sink: SubSink<M>) {
        (self.run)(sink);
    }
}

impl<M> std::fmt::Debug for Sub<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Sub")
    }
}

/// A borrowed view of a non-user system message, offered to
/// [`Component::system`].
///
/// Raw key/mouse/resize/tick traffic is not delivered to `update` unless the
/// application maps it here; keyboard handling is normally done through
/// subscriptions instead.
#[derive(Debug, Clone, Copy)]
pub enum SystemEvent<'a> {
    /// The terminal was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// A key was pressed.
    Key(&'a KeyEvent),
    /// A mouse event arrived.
    Mouse(&'a MouseEvent),
    /// A render frame completed.
    Tick(Instant),
}

/// An interactive terminal application.
///
/// `init` produces the initial model, `update` is the only state transition,
/// `view` renders a snapshot, and `subscriptions` derives the current event
/// stream. All four must be effectively pure: effects belong in [`Cmd`]s.
pub trait Component: Send + Sync + 'static {
    /// Application state. Snapshots are shared across runtime actors.
    type Model: Send + Sync + 'static;
    /// Application message type.
    type Msg: Send + 'static;
    /// Opaque renderable produced by `view`, consumed by the renderer.
    type View;

    /// Produce the initial model and startup commands.
    fn init(&self) -> (Self::Model, Vec<Cmd<Self::Msg>>);

    /// Apply one message to the model.
    fn update(&self, msg: Self::Msg, model: &Self::Model) -> (Self::Model, Vec<Cmd<Self::Msg>>);

    /// Render the model.
    fn view(&self, model: &Self::Model) -> Self::View;

    /// Derive the current subscription stream, if any.
    fn subscriptions(&self, model: &Self::Model) -> Option<Sub<Self::Msg>> {
        let _ = model;
        None
    }

    /// Opt-in mapping of raw system messages to application messages.
    fn system(&self, event: SystemEvent<'_>) -> Option<Self::Msg> {
        let _ = event;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_runs_once() {
        let cmd = Cmd::new(|| Some(41 + 1));
        assert_eq!(cmd.run(), Some(42));
    }

    #[test]
    fn cancelled_sink_drops_messages() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = crossbeam_channel::unbounded();
        let sink = SubSink::new(move |m: u32| drop(tx.send(m)), cancelled.clone());

        assert!(sink.emit(1));
        cancelled.store(true, Ordering::Relaxed);
        assert!(!sink.emit(2));
        assert!(sink.is_cancelled());

        let received: Vec<u32> = rx.try_iter().collect();
        assert_eq!(received, vec![1]);
    }
}

//! Input reader actor: owns stdin and the decoder.
//!
//! Runs in its own thread so a blocked `read(2)` never stalls rendering or
//! updates. The decoder buffer lives here and is never shared; decoded
//! events are offered onto the bus in the order they were decoded.

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use signal_hook::consts::SIGWINCH;
use signal_hook::iterator::Signals;

use crate::config::RuntimeConfig;
use crate::input::{Decoder, InputEvent, KeyEvent, KeyKind, Modifiers};

use super::message::SystemMsg;

/// Input reader actor handle.
pub(crate) struct InputReader {
    shutdown: Arc<AtomicBool>,
}

impl InputReader {
    /// Spawn the reader thread.
    ///
    /// The thread exits on shutdown flag, stdin EOF, or a dropped bus. It is
    /// deliberately never joined: a thread blocked in `read(2)` on a quiet
    /// terminal cannot be interrupted portably, and exits on the next byte
    /// or EOF after shutdown is flagged.
    pub fn spawn<M: Send + 'static>(bus: Sender<SystemMsg<M>>, config: &RuntimeConfig) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();
        let quit_on_escape = config.quit_on_escape;
        let quit_on_ctrl_c = config.quit_on_ctrl_c;

        let spawned = thread::Builder::new()
            .name("tiller-input".to_string())
            .spawn(move || {
                run_loop(&bus, &shutdown_flag, quit_on_escape, quit_on_ctrl_c);
            });
        if let Err(err) = spawned {
            tracing::warn!(target: "tiller::runtime", %err, "failed to spawn input thread");
        }

        Self { shutdown }
    }

    /// Flag the reader thread to exit.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop<M>(
    bus: &Sender<SystemMsg<M>>,
    shutdown: &AtomicBool,
    quit_on_escape: bool,
    quit_on_ctrl_c: bool,
) {
    let mut decoder = Decoder::new();
    let stdin = std::io::stdin();
    let mut buf = [0u8; 1024];

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }
        match stdin.lock().read(&mut buf) {
            Ok(0) => break, // EOF
            Ok(n) => {
                let mut events = decoder.feed(&buf[..n]);
                if n < buf.len() {
                    // The OS handed us less than a full buffer, so nothing
                    // further is imminent: resolve a retained lone ESC into
                    // the Escape key. Incomplete sequences and unterminated
                    // pastes stay buffered for the next read.
                    events.extend(decoder.flush());
                }
                for event in events {
                    let msg = classify(event, quit_on_escape, quit_on_ctrl_c);
                    if bus.send(msg).is_err() {
                        return; // consumer gone
                    }
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
            Err(err) => {
                tracing::warn!(target: "tiller::input", %err, "stdin read failed, stopping reader");
                break;
            }
        }
    }
}

/// Map a decoded event to its bus message, applying quit bindings first.
fn classify<M>(event: InputEvent, quit_on_escape: bool, quit_on_ctrl_c: bool) -> SystemMsg<M> {
    match event {
        InputEvent::Key(key) => {
            if (quit_on_escape && key.is_escape()) || (quit_on_ctrl_c && key.is_ctrl_c()) {
                SystemMsg::Quit
            } else {
                SystemMsg::KeyPressed(key)
            }
        }
        InputEvent::Mouse(mouse) => SystemMsg::Mouse(mouse),
        // Paste and focus ride the key channel with synthetic labels so the
        // SystemMsg vocabulary stays closed.
        InputEvent::Paste(text) => SystemMsg::KeyPressed(KeyEvent {
            kind: KeyKind::Runes,
            key: "paste".to_string(),
            runes: text,
            modifiers: Modifiers::empty(),
            sequence: String::new(),
        }),
        InputEvent::Focus(gained) => SystemMsg::KeyPressed(KeyEvent::special(
            if gained { "focus" } else { "blur" },
            "",
        )),
    }
}

/// Offers `WindowResized` on SIGWINCH.
pub(crate) struct ResizeWatcher {
    shutdown: Arc<AtomicBool>,
    signals_handle: signal_hook::iterator::Handle,
    handle: Option<thread::JoinHandle<()>>,
}

impl ResizeWatcher {
    /// Spawn the signal-watching thread.
    pub fn spawn<M: Send + 'static>(bus: Sender<SystemMsg<M>>) -> std::io::Result<Self> {
        let mut signals = Signals::new([SIGWINCH])?;
        let signals_handle = signals.handle();
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();

        let handle = thread::Builder::new()
            .name("tiller-resize".to_string())
            .spawn(move || {
                for _signal in &mut signals {
                    if shutdown_flag.load(Ordering::Relaxed) {
                        break;
                    }
                    if let Ok((width, height)) = crossterm::terminal::size() {
                        if bus.send(SystemMsg::WindowResized { width, height }).is_err() {
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            shutdown,
            signals_handle,
            handle: Some(handle),
        })
    }

    /// Stop the watcher and wait for its thread.
    pub fn join(mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        self.signals_handle.close();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        self.signals_handle.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_bindings() {
        let ctrl_c = InputEvent::Key(KeyEvent::special("ctrl+c", "\x03"));
        assert!(matches!(
            classify::<()>(ctrl_c.clone(), false, true),
            SystemMsg::Quit
        ));
        // Unbound: passes through as a key.
        assert!(matches!(
            classify::<()>(ctrl_c, false, false),
            SystemMsg::KeyPressed(_)
        ));

        let escape = InputEvent::Key(KeyEvent::special("escape", "\x1b"));
        assert!(matches!(
            classify::<()>(escape.clone(), true, true),
            SystemMsg::Quit
        ));
        assert!(matches!(
            classify::<()>(escape, false, true),
            SystemMsg::KeyPressed(_)
        ));
    }

    #[test]
    fn paste_rides_the_key_channel() {
        let msg = classify::<()>(InputEvent::Paste("text".to_string()), false, true);
        let SystemMsg::KeyPressed(key) = msg else {
            panic!("expected key");
        };
        assert_eq!(key.key, "paste");
        assert_eq!(key.runes, "text");
    }

    #[test]
    fn focus_rides_the_key_channel() {
        let msg = classify::<()>(InputEvent::Focus(false), false, true);
        let SystemMsg::KeyPressed(key) = msg else {
            panic!("expected key");
        };
        assert_eq!(key.key, "blur");
    }
}

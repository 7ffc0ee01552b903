//! Scoped terminal acquisition with guaranteed release.
//!
//! A TUI program that crashes without restoring the terminal has failed
//! regardless of what caused the crash. The session acquires raw mode, the
//! alternate screen, mouse capture, paste/focus reporting, and cursor state
//! in a fixed order, and releases them in reverse on every exit path: normal
//! quit, startup failure part-way through, and unwinding panics (via `Drop`).

use std::io;

use crate::config::RuntimeConfig;
use crate::error::{RuntimeError, SetupStage};

use super::backend::TerminalBackend;

/// Tracks exactly which acquisition steps succeeded, so release touches
/// nothing that was never acquired.
#[derive(Debug, Default, Clone, Copy)]
struct Acquired {
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
    bracketed_paste: bool,
    focus_reporting: bool,
    cursor_hidden: bool,
}

/// A live terminal session owning the backend.
pub struct TerminalSession<T: TerminalBackend> {
    backend: T,
    acquired: Acquired,
    released: bool,
}

impl<T: TerminalBackend> TerminalSession<T> {
    /// Acquire the terminal for interactive use.
    ///
    /// Steps run in order: raw mode, alternate screen (unless inline), mouse
    /// capture (if enabled), bracketed paste, focus reporting, hide cursor,
    /// clear. Each step is individually fallible; on failure the steps
    /// already taken are rolled back before the error is returned, so a
    /// failed startup never leaves the terminal raw.
    pub fn acquire(backend: T, config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        let mut session = Self {
            backend,
            acquired: Acquired::default(),
            released: false,
        };

        if let Err(err) = session.acquire_steps(config) {
            session.release();
            return Err(err);
        }
        Ok(session)
    }

    fn acquire_steps(&mut self, config: &RuntimeConfig) -> Result<(), RuntimeError> {
        let step = |stage: SetupStage| move |source: io::Error| RuntimeError::TerminalSetup { stage, source };

        self.backend
            .set_raw_mode(true)
            .map_err(step(SetupStage::RawMode))?;
        self.acquired.raw_mode = true;

        if config.fullscreen {
            self.backend
                .set_alternate_screen(true)
                .map_err(step(SetupStage::AlternateScreen))?;
            self.acquired.alternate_screen = true;
        }

        if config.enable_mouse {
            self.backend
                .set_mouse_capture(true)
                .map_err(step(SetupStage::MouseCapture))?;
            self.acquired.mouse_capture = true;
        }

        self.backend
            .set_bracketed_paste(true)
            .map_err(step(SetupStage::BracketedPaste))?;
        self.acquired.bracketed_paste = true;

        self.backend
            .set_focus_reporting(true)
            .map_err(step(SetupStage::FocusReporting))?;
        self.acquired.focus_reporting = true;

        self.backend
            .hide_cursor()
            .map_err(step(SetupStage::HideCursor))?;
        self.acquired.cursor_hidden = true;

        self.backend.clear().map_err(step(SetupStage::Clear))?;
        Ok(())
    }

    /// Restore the terminal, reversing acquisition.
    ///
    /// Best-effort and idempotent: each failure is logged at `warn` and the
    /// remaining steps still run. Called explicitly on the normal exit path;
    /// `Drop` re-invokes it as the crash backstop.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let warn = |what: &str, result: io::Result<()>| {
            if let Err(err) = result {
                tracing::warn!(target: "tiller::terminal", %err, "teardown: {what} failed");
            }
        };

        if self.acquired.cursor_hidden {
            warn("show cursor", self.backend.show_cursor());
        }
        if self.acquired.focus_reporting {
            warn("disable focus reporting", self.backend.set_focus_reporting(false));
        }
        if self.acquired.bracketed_paste {
            warn("disable bracketed paste", self.backend.set_bracketed_paste(false));
        }
        if self.acquired.mouse_capture {
            warn("disable mouse capture", self.backend.set_mouse_capture(false));
        }
        if self.acquired.alternate_screen {
            warn("leave alternate screen", self.backend.set_alternate_screen(false));
        }
        if self.acquired.raw_mode {
            warn("disable raw mode", self.backend.set_raw_mode(false));
        }
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        self.backend.size()
    }
}

impl<T: TerminalBackend> Drop for TerminalSession<T> {
    fn drop(&mut self) {
        self.release();
    }
}

//! Runtime error types.
//!
//! Only one failure class crosses the boundary out of the runtime: terminal
//! acquisition failures, fatal at startup. Decoder anomalies and command
//! failures are absorbed internally, render I/O failures are logged per
//! frame and retried on the next one, and teardown failures are logged
//! best-effort rather than returned over a successful run.

use std::io;

use thiserror::Error;

/// Stage of terminal acquisition that failed.
///
/// Setup steps are individually fallible and individually reported, not
/// silently chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    /// Enabling raw mode.
    RawMode,
    /// Switching to the alternate screen buffer.
    AlternateScreen,
    /// Enabling mouse capture.
    MouseCapture,
    /// Enabling bracketed paste.
    BracketedPaste,
    /// Enabling focus reporting.
    FocusReporting,
    /// Hiding the cursor.
    HideCursor,
    /// Clearing the screen.
    Clear,
}

impl std::fmt::Display for SetupStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RawMode => "raw mode",
            Self::AlternateScreen => "alternate screen",
            Self::MouseCapture => "mouse capture",
            Self::BracketedPaste => "bracketed paste",
            Self::FocusReporting => "focus reporting",
            Self::HideCursor => "hide cursor",
            Self::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A terminal acquisition step failed; the runtime never reached the
    /// Running state.
    #[error("terminal setup failed at {stage}: {source}")]
    TerminalSetup {
        /// Which acquisition step failed.
        stage: SetupStage,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for runtime results.
pub type Result<T> = std::result::Result<T, RuntimeError>;

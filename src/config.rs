//! Runtime configuration.

/// Configuration for one [`run`](crate::runtime::Program::run) call.
///
/// Immutable for the lifetime of the runtime. Debug behavior is an explicit
/// field rather than an environment read so hosts stay in control of it.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Target frames per second for the render scheduler.
    pub fps: u32,
    /// Emit advisory diagnostics (frame-over-budget warnings).
    pub debug: bool,
    /// Quit when the Escape key is pressed.
    pub quit_on_escape: bool,
    /// Quit on Ctrl+C.
    pub quit_on_ctrl_c: bool,
    /// Enable mouse capture and decode mouse reports.
    pub enable_mouse: bool,
    /// Switch to the alternate screen buffer.
    pub fullscreen: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            debug: false,
            quit_on_escape: false,
            quit_on_ctrl_c: true,
            enable_mouse: false,
            fullscreen: true,
        }
    }
}

impl RuntimeConfig {
    /// Set the target framerate, clamped to 1..=120.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.clamp(1, 120);
        self
    }

    /// Enable advisory debug diagnostics.
    pub const fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Bind the Escape key to quit.
    pub const fn with_quit_on_escape(mut self) -> Self {
        self.quit_on_escape = true;
        self
    }

    /// Unbind Ctrl+C from quit (bound by default).
    pub const fn without_quit_on_ctrl_c(mut self) -> Self {
        self.quit_on_ctrl_c = false;
        self
    }

    /// Enable mouse capture.
    pub const fn with_mouse(mut self) -> Self {
        self.enable_mouse = true;
        self
    }

    /// Stay on the primary screen buffer (inline mode).
    pub const fn inline(mut self) -> Self {
        self.fullscreen = false;
        self
    }
}

//! Renderer seam between the scheduler and the screen.
//!
//! The three-phase contract (`begin_frame` / `render` / `end_frame`) lets
//! double-buffering or diffing renderers plug in without the scheduler
//! knowing; the scheduler only drives the phases on its fixed cadence.

use std::io::{self, Write};
use std::marker::PhantomData;

use crate::terminal::output::OutputBuffer;

/// A three-phase frame renderer for views of type `V`.
pub trait Renderer<V>: Send + 'static {
    /// Start a frame.
    fn begin_frame(&mut self) -> io::Result<()>;
    /// Draw the view into the frame.
    fn render(&mut self, view: &V) -> io::Result<()>;
    /// Finish and present the frame.
    fn end_frame(&mut self) -> io::Result<()>;
}

/// A minimal full-repaint renderer for `String` views.
///
/// Each frame is assembled in an [`OutputBuffer`] inside a synchronized-
/// update bracket and flushed to stdout in one write. Lines are terminated
/// with erase-to-end-of-line so shorter lines cleanly overwrite longer
/// predecessors without clearing the whole screen first.
pub struct TextRenderer {
    buffer: OutputBuffer,
}

impl TextRenderer {
    /// Create a stdout text renderer.
    pub fn new() -> Self {
        Self {
            buffer: OutputBuffer::new(),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<String> for TextRenderer {
    fn begin_frame(&mut self) -> io::Result<()> {
        self.buffer.clear();
        self.buffer.sync_begin();
        self.buffer.cursor_home();
        Ok(())
    }

    fn render(&mut self, view: &String) -> io::Result<()> {
        // Raw mode disables output post-processing; every newline needs an
        // explicit carriage return, and EL clears stale tails.
        for (i, line) in view.split('\n').enumerate() {
            if i > 0 {
                self.buffer.push_str("\x1b[K\r\n");
            }
            self.buffer.push_str(line);
        }
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        self.buffer.clear_below();
        self.buffer.sync_end();
        self.buffer.flush_to(&mut io::stdout().lock())
    }
}

/// Renderer that discards every frame. Used in tests and headless runs.
pub struct NullRenderer<V> {
    _view: PhantomData<fn(&V)>,
}

impl<V> NullRenderer<V> {
    /// Create a no-op renderer.
    pub fn new() -> Self {
        Self { _view: PhantomData }
    }
}

impl<V> Default for NullRenderer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: 'static> Renderer<V> for NullRenderer<V> {
    fn begin_frame(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn render(&mut self, _view: &V) -> io::Result<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! `OutputBuffer`: single-syscall frame assembly for ANSI output.
//!
//! A whole frame is accumulated here and flushed in one `write()` so the
//! terminal never paints a half-written frame.

use std::io::{self, Write};

/// Pre-allocated buffer for building one frame of terminal output.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical frame (16KB).
    pub fn new() -> Self {
        Self::with_capacity(16 * 1024)
    }

    /// Clear the buffer for the next frame.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Buffer length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Append a string.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Erase from the cursor to the end of the screen.
    #[inline]
    pub fn clear_below(&mut self) {
        self.data.extend_from_slice(b"\x1b[J");
    }

    /// Open a synchronized-update bracket (DEC 2026).
    ///
    /// Terminals that support it hold painting until the closing bracket, so
    /// even a slow flush cannot tear.
    #[inline]
    pub fn sync_begin(&mut self) {
        self.data.extend_from_slice(b"\x1b[?2026h");
    }

    /// Close the synchronized-update bracket.
    #[inline]
    pub fn sync_end(&mut self) {
        self.data.extend_from_slice(b"\x1b[?2026l");
    }

    /// Flush the whole buffer to `out` in a single write, then clear it.
    pub fn flush_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        out.write_all(&self.data)?;
        out.flush()?;
        self.data.clear();
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

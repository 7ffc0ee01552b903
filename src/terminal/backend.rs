//! Terminal controller contract and the crossterm-backed implementation.

use std::io::{self, Write};

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

/// The terminal operations the runtime requires.
///
/// Every operation is individually fallible. Failures during setup abort
/// startup; failures during teardown are logged best-effort and never
/// returned over a successful run. Tests substitute a recording mock.
pub trait TerminalBackend: Send {
    /// Clear the whole screen.
    fn clear(&mut self) -> io::Result<()>;
    /// Write raw text at the current cursor position.
    fn write(&mut self, text: &str) -> io::Result<()>;
    /// Hide the cursor.
    fn hide_cursor(&mut self) -> io::Result<()>;
    /// Show the cursor.
    fn show_cursor(&mut self) -> io::Result<()>;
    /// Enable or disable raw mode.
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;
    /// Switch to or from the alternate screen buffer.
    fn set_alternate_screen(&mut self, enabled: bool) -> io::Result<()>;
    /// Enable or disable mouse capture.
    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()>;
    /// Enable or disable bracketed paste.
    fn set_bracketed_paste(&mut self, enabled: bool) -> io::Result<()>;
    /// Enable or disable focus reporting.
    fn set_focus_reporting(&mut self, enabled: bool) -> io::Result<()>;
    /// Current terminal size as (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// [`TerminalBackend`] implemented over crossterm and stdout.
#[derive(Debug, Default)]
pub struct CrosstermBackend {
    _private: (),
}

impl CrosstermBackend {
    /// Create a backend over the process stdout.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Show)
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }

    fn set_alternate_screen(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnterAlternateScreen)
        } else {
            execute!(io::stdout(), LeaveAlternateScreen)
        }
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }

    fn set_bracketed_paste(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableBracketedPaste)
        } else {
            execute!(io::stdout(), DisableBracketedPaste)
        }
    }

    fn set_focus_reporting(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableFocusChange)
        } else {
            execute!(io::stdout(), DisableFocusChange)
        }
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

//! Terminal setup, teardown and drawing.
//!
//! Owns raw mode and the alternate screen as a scoped resource: acquired in
//! [`TerminalDriver::new`], restored on drop on every exit path so a panic
//! or early return never leaves the user's shell in raw mode.

use std::io::{Stdout, stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use thiserror::Error;

/// Terminal-specific failures.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Underlying terminal I/O failed.
    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Platform driver for the demo host: a raw-mode alternate-screen terminal.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(out))?;
        Ok(Self { terminal })
    }

    /// Render one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<(), TerminalError> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

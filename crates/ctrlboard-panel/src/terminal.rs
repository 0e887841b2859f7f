//! Terminal session guard.

use std::io::{Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::PanelError;

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Take over the terminal.
    pub fn enter() -> Result<(Self, Terminal<CrosstermBackend<Stdout>>), PanelError> {
        enable_raw_mode()?;
        let session = Self { _private: () };
        stdout().execute(EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok((session, terminal))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

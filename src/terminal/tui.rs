//! Scoped terminal session for live rendering.
//!
//! Owns the ratatui terminal over crossterm while raw mode and the alternate
//! screen are active. Drawing itself lives in the `rendering` module.

use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::Ordering;

use super::raw_mode::{install_panic_hook, RAW_MODE_ACTIVE};
use super::rendering;
use super::Screen;
use crate::ascii::AsciiFrame;

type Backend = CrosstermBackend<Stdout>;

/// Live-mode terminal session.
///
/// Creating a `Tui` enters raw mode and the alternate screen with the cursor
/// hidden. The terminal is put back by [`Tui::restore`], by `Drop`, or by the
/// panic hook, whichever runs first.
///
/// ```ignore
/// let mut tui = Tui::new()?;
/// tui.draw(&grid)?;
/// tui.restore()?;
/// ```
pub struct Tui {
    terminal: Terminal<Backend>,
    active: bool,
}

impl Tui {
    /// Take over the terminal.
    ///
    /// # Errors
    /// Returns the first failing terminal control step. Anything already
    /// switched on is switched off again first.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        match Self::enter() {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
                let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, Show);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    fn enter() -> io::Result<Terminal<Backend>> {
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(terminal)
    }

    /// Give the terminal back. Later calls, and the eventual drop, do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

        // every step runs even if an earlier one failed
        let left = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let raw = disable_raw_mode();
        let cursor = self.terminal.show_cursor();
        left.and(raw).and(cursor)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Screen for Tui {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn draw(&mut self, grid: &AsciiFrame) -> io::Result<()> {
        self.terminal
            .draw(|frame| rendering::render_grid(frame, grid))
            .map(|_| ())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("failed to restore terminal: {}", e);
        }
    }
}

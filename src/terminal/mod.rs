//! Terminal management: size queries, the scoped TUI context and grid drawing.

mod raw_mode;
mod rendering;
mod tui;

use std::io;

pub use rendering::{render_grid, GridWidget};
pub use tui::Tui;

use crate::ascii::AsciiFrame;
use crate::error::AppError;

/// A cell-addressable drawing surface.
pub trait Screen {
    /// Current size in cells as `(columns, rows)`.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Replace the visible contents with `grid`.
    fn draw(&mut self, grid: &AsciiFrame) -> io::Result<()>;
}

/// Query the controlling terminal's size as `(columns, rows)`.
///
/// # Errors
/// * `AppError::TerminalInit` - If there is no terminal to query
pub fn terminal_size() -> Result<(u16, u16), AppError> {
    crossterm::terminal::size().map_err(AppError::TerminalInit)
}

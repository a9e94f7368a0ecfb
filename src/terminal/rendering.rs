//! Drawing character grids into a ratatui buffer.
//!
//! Pure rendering logic, separated from terminal lifecycle management.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::ascii::AsciiFrame;

/// Widget that writes one grid glyph per buffer cell with the default style.
///
/// Glyphs outside `area` are clipped; cells not covered by the grid are left
/// as they are.
pub struct GridWidget<'a> {
    grid: &'a AsciiFrame,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a AsciiFrame) -> Self {
        Self { grid }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in self.grid.rows().enumerate().take(area.height as usize) {
            for (x, &glyph) in row.iter().enumerate().take(area.width as usize) {
                let position = (area.x + x as u16, area.y + y as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_char(glyph);
                }
            }
        }
    }
}

/// Render a grid over the whole frame area.
pub fn render_grid(frame: &mut ratatui::Frame, grid: &AsciiFrame) {
    let area = frame.area();
    frame.render_widget(GridWidget::new(grid), area);
}

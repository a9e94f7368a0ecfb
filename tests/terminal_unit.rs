//! Unit tests for terminal drawing (GridWidget, render_grid).
//!
//! These run against ratatui's test backend, so no real terminal is needed.

use asciicam::ascii::{render_image, AsciiFrame, CharSet, RenderConfig};
use asciicam::terminal::{render_grid, GridWidget};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

fn draw(grid: &AsciiFrame, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render_grid(frame, grid)).unwrap();
    terminal.backend().buffer().clone()
}

// ==================== render_grid Tests ====================

#[test]
fn test_render_grid_fills_terminal() {
    let grid = AsciiFrame::from_chars("ab.cd:".chars().collect(), 3, 2);
    assert_eq!(draw(&grid, 3, 2), Buffer::with_lines(["ab.", "cd:"]));
}

#[test]
fn test_render_grid_smaller_than_terminal_leaves_rest_blank() {
    let grid = AsciiFrame::from_chars(vec!['#'; 2], 2, 1);
    assert_eq!(draw(&grid, 4, 2), Buffer::with_lines(["##  ", "    "]));
}

#[test]
fn test_render_grid_larger_than_terminal_is_clipped() {
    let grid = AsciiFrame::from_chars(vec!['@'; 12], 4, 3);
    assert_eq!(draw(&grid, 2, 2), Buffer::with_lines(["@@", "@@"]));
}

#[test]
fn test_render_grid_block_glyphs() {
    let grid = AsciiFrame::from_chars(vec!['░', '▒', '▓', '█'], 4, 1);
    assert_eq!(draw(&grid, 4, 1), Buffer::with_lines(["░▒▓█"]));
}

#[test]
fn test_rendered_image_reaches_buffer() {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        10,
        10,
        image::Rgb([255, 255, 255]),
    ));
    let config = RenderConfig::new(CharSet::Standard.ramp(), false);
    let grid = render_image(&img, 5, 2, &config);
    assert_eq!(draw(&grid, 5, 2), Buffer::with_lines(["@@@@@", "@@@@@"]));
}

// ==================== GridWidget Tests ====================

#[test]
fn test_widget_respects_area_offset() {
    let grid = AsciiFrame::from_chars(vec!['x', 'y'], 2, 1);
    let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
    GridWidget::new(&grid).render(Rect::new(1, 1, 3, 1), &mut buf);
    assert_eq!(buf, Buffer::with_lines(["    ", " xy "]));
}

#[test]
fn test_widget_empty_grid_draws_nothing() {
    let grid = AsciiFrame::default();
    let area = Rect::new(0, 0, 3, 1);
    let mut buf = Buffer::with_lines(["abc"]);
    GridWidget::new(&grid).render(area, &mut buf);
    assert_eq!(buf, Buffer::with_lines(["abc"]));
}

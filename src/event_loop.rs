//! Live capture loop: one frame at a time from source to screen.
//!
//! The loop alternates between two states:
//!
//! - **Idle**: waiting on [`FrameSource::read_frame`] for the next frame
//! - **Rendering**: sample the frame at the screen's current size, map it to
//!   glyphs, drop the frame, draw the grid
//!
//! Cancellation is checked between frames. There is no pipelining: the next
//! frame is not requested until the previous grid has been drawn.

use crate::ascii::{render_frame, RenderConfig};
use crate::camera::FrameSource;
use crate::error::AppError;
use crate::signal::CancelSignal;
use crate::terminal::Screen;

/// Summary of a finished capture session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames drawn to the screen
    pub frames_rendered: u64,
    /// Frames dropped because the screen had no area
    pub frames_skipped: u64,
}

/// Run the capture loop until `cancel` is triggered.
///
/// # Errors
/// * `AppError::Capture` - If a frame read fails; the loop stops immediately
/// * `AppError::Terminal` - If the screen cannot be queried or drawn
pub fn run<F, S>(
    source: &mut F,
    screen: &mut S,
    config: &RenderConfig,
    cancel: &CancelSignal,
) -> Result<LoopStats, AppError>
where
    F: FrameSource + ?Sized,
    S: Screen + ?Sized,
{
    let mut stats = LoopStats::default();

    while !cancel.is_cancelled() {
        // Idle
        let frame = source.read_frame()?;

        // Rendering: the size is sampled per frame so resizes take effect
        let (cols, rows) = screen.size().map_err(AppError::Terminal)?;
        if cols == 0 || rows == 0 {
            log::debug!("screen has no area, skipping frame");
            stats.frames_skipped += 1;
            continue;
        }

        let grid = render_frame(&frame, cols, rows, config);
        drop(frame);

        screen.draw(&grid).map_err(AppError::Terminal)?;
        stats.frames_rendered += 1;
    }

    log::info!(
        "capture loop finished: {} frame(s) rendered, {} skipped",
        stats.frames_rendered,
        stats.frames_skipped
    );
    Ok(stats)
}

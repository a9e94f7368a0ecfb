//! Sampling and mapping glued together behind an explicit configuration.

use image::DynamicImage;

use super::charset::DensityRamp;
use super::grid::AsciiFrame;
use super::mapping::map_to_grid;
use super::sampler::{sample_frame, sample_image};
use crate::camera::Frame;

/// Immutable rendering configuration, passed to every render call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    ramp: DensityRamp,
}

impl RenderConfig {
    /// Build a configuration. With `invert`, the ramp is reversed once here
    /// so the bright end maps to the sparsest glyph.
    pub fn new(ramp: DensityRamp, invert: bool) -> Self {
        let ramp = if invert { ramp.reversed() } else { ramp };
        Self { ramp }
    }

    /// The ramp in effect, polarity already applied.
    pub fn ramp(&self) -> &DensityRamp {
        &self.ramp
    }
}

/// Render a decoded image to a `width` x `height` grid.
pub fn render_image(
    image: &DynamicImage,
    width: u16,
    height: u16,
    config: &RenderConfig,
) -> AsciiFrame {
    let samples = sample_image(image, width, height);
    log::debug!(
        "sampled {}x{} image onto {}x{} grid",
        image.width(),
        image.height(),
        width,
        height
    );
    map_to_grid(&samples, width, height, &config.ramp)
}

/// Render a camera frame to a `width` x `height` grid.
pub fn render_frame(frame: &Frame, width: u16, height: u16, config: &RenderConfig) -> AsciiFrame {
    let samples = sample_frame(frame, width, height);
    map_to_grid(&samples, width, height, &config.ramp)
}

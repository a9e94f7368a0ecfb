//! ASCII renderer: turns images and camera frames into character grids.
//!
//! The pipeline has two stages:
//!
//! 1. **Sampling** - nearest-neighbor resize to the terminal grid, one
//!    [`Sample`] per cell
//! 2. **Mapping** - averaged brightness of each sample indexes a
//!    [`DensityRamp`]
//!
//! # Character Sets
//!
//! Built-in ramps are available via [`CharSet`]:
//! - `Classic` - 35-level reference ramp
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod charset;
mod grid;
mod mapping;
mod render;
mod sample;
mod sampler;

pub use charset::{
    CharSet, DensityRamp, RampError, BLOCKS_CHARSET, CLASSIC_CHARSET, MINIMAL_CHARSET,
    STANDARD_CHARSET,
};
pub use grid::AsciiFrame;
pub use mapping::{map_samples, map_to_chars, map_to_grid};
pub use render::{render_frame, render_image, RenderConfig};
pub use sample::Sample;
pub use sampler::{nearest_neighbor, sample_frame, sample_image};

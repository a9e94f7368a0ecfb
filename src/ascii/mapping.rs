//! Brightness to character mapping.

use super::charset::DensityRamp;
use super::grid::AsciiFrame;
use super::sample::Sample;

/// Map brightness values to glyphs.
///
/// Lower brightness maps to earlier glyphs of the ramp, higher brightness to
/// later ones.
///
/// # Example
/// ```ignore
/// let ramp = CharSet::Standard.ramp();
/// let chars = map_to_chars(&[0, 127, 255], &ramp);
/// assert_eq!(chars, vec![' ', '=', '@']);
/// ```
pub fn map_to_chars(brightness: &[u8], ramp: &DensityRamp) -> Vec<char> {
    brightness.iter().map(|&b| ramp.glyph_for(b)).collect()
}

/// Map samples to glyphs, averaging the color channels before scaling.
pub fn map_samples(samples: &[Sample], ramp: &DensityRamp) -> Vec<char> {
    samples.iter().map(|s| ramp.glyph_for(s.brightness())).collect()
}

/// Map a row-major sample grid into an output grid.
///
/// `samples` must hold `width * height` entries; a shorter slice leaves the
/// remaining cells blank.
pub fn map_to_grid(samples: &[Sample], width: u16, height: u16, ramp: &DensityRamp) -> AsciiFrame {
    let mut chars = map_samples(samples, ramp);
    chars.resize(width as usize * height as usize, ' ');
    AsciiFrame::from_chars(chars, width, height)
}

//! Nearest-neighbor resampling of source pixels onto the character grid.

use image::{ColorType, DynamicImage, GenericImageView};

use super::sample::Sample;
use crate::camera::Frame;

/// Resample a source of `src_width` x `src_height` pixels to exactly
/// `char_width` x `char_height` samples using nearest-neighbor selection.
///
/// Each target cell reads the source pixel under its center:
/// `sx = (2 * x + 1) * src_width / (2 * char_width)`, and likewise for rows.
/// No blending takes place, so every sample is a real source pixel.
///
/// # Arguments
/// * `src_width` - Width of the source in pixels
/// * `src_height` - Height of the source in pixels
/// * `char_width` - Desired output width in characters
/// * `char_height` - Desired output height in characters
/// * `pixel_at` - Reads the source pixel at `(x, y)`
///
/// # Returns
/// `char_width * char_height` samples in row-major order, or an empty vector
/// when any dimension is zero.
pub fn nearest_neighbor<F>(
    src_width: u32,
    src_height: u32,
    char_width: u16,
    char_height: u16,
    mut pixel_at: F,
) -> Vec<Sample>
where
    F: FnMut(u32, u32) -> Sample,
{
    if char_width == 0 || char_height == 0 || src_width == 0 || src_height == 0 {
        return Vec::new();
    }

    let columns: Vec<u32> = (0..char_width)
        .map(|x| nearest_source(x, src_width, char_width))
        .collect();

    let mut samples = Vec::with_capacity(char_width as usize * char_height as usize);
    for y in 0..char_height {
        let sy = nearest_source(y, src_height, char_height);
        for &sx in &columns {
            samples.push(pixel_at(sx, sy));
        }
    }

    samples
}

#[inline]
fn nearest_source(target: u16, src_len: u32, target_len: u16) -> u32 {
    ((2 * target as u64 + 1) * src_len as u64 / (2 * target_len as u64)) as u32
}

/// Sample a decoded image onto the character grid.
///
/// Images with more than 8 bits per channel are read at 16-bit depth and
/// narrowed by dividing by 257; 8-bit images are read directly and narrowed
/// with a shift after premultiplying.
pub fn sample_image(image: &DynamicImage, char_width: u16, char_height: u16) -> Vec<Sample> {
    let (src_width, src_height) = image.dimensions();

    if is_wide(image.color()) {
        let wide = image.to_rgba16();
        nearest_neighbor(src_width, src_height, char_width, char_height, |x, y| {
            Sample::from_rgba16(wide.get_pixel(x, y).0)
        })
    } else {
        nearest_neighbor(src_width, src_height, char_width, char_height, |x, y| {
            Sample::from_rgba8(image.get_pixel(x, y).0)
        })
    }
}

/// Sample an RGB camera frame onto the character grid.
///
/// Pixels missing from a short buffer read as black.
pub fn sample_frame(frame: &Frame, char_width: u16, char_height: u16) -> Vec<Sample> {
    let bpp = Frame::BYTES_PER_PIXEL;
    let stride = frame.stride();

    nearest_neighbor(frame.width, frame.height, char_width, char_height, |x, y| {
        let idx = y as usize * stride + x as usize * bpp;
        match frame.data.get(idx..idx + 3) {
            Some(rgb) => Sample::from_rgb8([rgb[0], rgb[1], rgb[2]]),
            None => Sample::default(),
        }
    })
}

fn is_wide(color: ColorType) -> bool {
    color.bytes_per_pixel() / color.channel_count() > 1
}

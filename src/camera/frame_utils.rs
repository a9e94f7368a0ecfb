//! Frame conversion and transformation utilities.

use super::types::Frame;
#[cfg(feature = "webcam")]
use super::types::CameraError;

/// Convert a nokhwa buffer to our RGB Frame format.
///
/// nokhwa's `decode_image` handles the camera's native format (MJPEG, YUYV,
/// NV12, ...). A buffer that fails to decode, or decodes to the wrong size,
/// is a read failure.
#[cfg(feature = "webcam")]
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Result<Frame, CameraError> {
    use nokhwa::pixel_format::RgbFormat;

    let decoded = buffer
        .decode_image::<RgbFormat>()
        .map_err(|e| CameraError::ReadFailed(e.to_string()))?;
    let resolution = buffer.resolution();
    let (width, height) = (resolution.width(), resolution.height());

    let data = decoded.into_raw();
    let expected = width as usize * height as usize * 3;
    if data.len() != expected {
        return Err(CameraError::ReadFailed(format!(
            "decoded {} bytes for a {}x{} frame, expected {}",
            data.len(),
            width,
            height,
            expected
        )));
    }

    Ok(Frame::rgb(data, width, height))
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let bpp = Frame::BYTES_PER_PIXEL;
    let stride = frame.stride();

    for y in 0..height {
        let row_start = y * stride;
        let Some(row) = frame.data.get_mut(row_start..row_start + stride) else {
            break;
        };

        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_horizontal_2x1() {
        // Pixel A (1,2,3) and pixel B (4,5,6)
        let mut frame = Frame::rgb(vec![1, 2, 3, 4, 5, 6], 2, 1);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_mirror_horizontal_3x2() {
        let mut frame = Frame::rgb(
            vec![
                1, 1, 1, 2, 2, 2, 3, 3, 3, // Row 0: A, B, C
                4, 4, 4, 5, 5, 5, 6, 6, 6, // Row 1: D, E, F
            ],
            3,
            2,
        );
        mirror_horizontal(&mut frame);
        assert_eq!(
            frame.data,
            vec![
                3, 3, 3, 2, 2, 2, 1, 1, 1, // Row 0: C, B, A
                6, 6, 6, 5, 5, 5, 4, 4, 4, // Row 1: F, E, D
            ]
        );
    }

    #[test]
    fn test_mirror_horizontal_single_pixel() {
        let mut frame = Frame::rgb(vec![1, 2, 3], 1, 1);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_mirror_short_buffer_does_not_panic() {
        let mut frame = Frame::rgb(vec![1, 2, 3, 4, 5, 6], 2, 2);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![4, 5, 6, 1, 2, 3]);
    }
}

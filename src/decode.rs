//! Still-image loading with content-based format detection.

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::AppError;

/// Formats accepted as input. Detection looks at magic bytes only.
pub const SUPPORTED_FORMATS: &[ImageFormat] =
    &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Read and decode an image file.
///
/// # Errors
/// * `AppError::FileAccess` - If the file cannot be read
/// * `AppError::UnsupportedFormat` - If the content is not PNG, JPEG or WebP
/// * `AppError::ImageDecode` - If the content is corrupt
pub fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
    let bytes = std::fs::read(path).map_err(|source| AppError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_image(&bytes)?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Decode an in-memory image, choosing the decoder from its content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, AppError> {
    let format = detect_format(bytes)?;
    image::load_from_memory_with_format(bytes, format).map_err(AppError::ImageDecode)
}

/// Identify the container from its magic bytes.
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, AppError> {
    let format = image::guess_format(bytes).map_err(AppError::ImageDecode)?;
    if SUPPORTED_FORMATS.contains(&format) {
        Ok(format)
    } else {
        Err(AppError::UnsupportedFormat(format!("{:?}", format)))
    }
}

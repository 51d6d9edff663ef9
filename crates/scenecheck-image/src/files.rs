//! PNG reading and writing

use crate::error::CompareError;
use crate::pixel::PackedRgb;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Load a reference image
///
/// Any read or decode failure is an error naming the path; there is no
/// fallback.
pub fn load_reference(path: &Path) -> Result<RgbaImage, CompareError> {
    let image = image::open(path).map_err(|source| CompareError::ReferenceLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Write image as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), image::ImageError> {
    image.save_with_format(path, ImageFormat::Png)
}

/// Create an opaque single-color image
#[must_use]
pub fn solid_image(width: u32, height: u32, color: PackedRgb) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.to_rgba())
}

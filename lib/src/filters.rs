use crate::error::{AsciiError, Result};
use image::{GrayImage, Luma, RgbImage, imageops};

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT: u64 = 2;

/// Compute the character grid for an image scaled to `new_width` columns
///
/// Height is `floor(height / width * new_width / 2)`, evaluated in integer
/// arithmetic so no rounding creeps in. A zero-width source yields zero rows.
///
/// # Errors
/// [`AsciiError::InvalidConfig`] when the row count does not fit in a `u32`.
pub fn target_dimensions(width: u32, height: u32, new_width: u32) -> Result<(u32, u32)> {
    if width == 0 {
        return Ok((new_width, 0));
    }

    let rows = (height as u64 * new_width as u64) / (CELL_ASPECT * width as u64);
    let rows = u32::try_from(rows).map_err(|_| {
        AsciiError::InvalidConfig(format!(
            "width {new_width} on a {width}x{height} image needs {rows} rows"
        ))
    })?;
    Ok((new_width, rows))
}

/// Resize an image to `new_width` columns, squashing it vertically
///
/// Uses Catmull-Rom (bicubic) resampling. When the computed height is zero
/// the result is an empty `new_width × 0` image.
///
/// # Arguments
/// * `input` - Source RGB image
/// * `new_width` - Target width in characters
///
/// # Returns
/// The resized image, or an error if the target height overflows
pub fn resize_to_width(input: &RgbImage, new_width: u32) -> Result<RgbImage> {
    let (width, height) = input.dimensions();
    let (target_width, target_height) = target_dimensions(width, height, new_width)?;

    if target_width == 0 || target_height == 0 {
        return Ok(RgbImage::new(target_width, 0));
    }

    Ok(imageops::resize(
        input,
        target_width,
        target_height,
        imageops::FilterType::CatmullRom,
    ))
}

/// Calculate luminance from an RGB image
///
/// Formula: L = round((299*R + 587*G + 114*B) / 1000) (ITU-R 601-2 luma)
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Grayscale image with luminance values
pub fn calculate_luminance(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            output.put_pixel(x, y, Luma([luma(pixel[0], pixel[1], pixel[2])]));
        }
    }

    output
}

/// Luma of a single RGB triple, rounded to nearest, always within 0-255
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((weighted + 500) / 1000) as u8
}

//! Brightness to glyph bucketing.

use image::GrayImage;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Width of one brightness bucket for a ramp of `ramp_len` characters
///
/// `255 / len + 1` rather than `255 / len`, so that brightness 255 still
/// lands inside the ramp when 255 divides evenly by its length.
///
/// # Panics
/// If `ramp_len` is zero. Built-in [`Scale`](crate::scale::Scale) ramps are
/// never empty.
pub fn bucket_size(ramp_len: usize) -> usize {
    assert!(ramp_len > 0, "Character ramp must not be empty");
    255 / ramp_len + 1
}

/// Index into a ramp of `ramp_len` characters for a brightness value
///
/// Always in `0..ramp_len`.
pub fn bucket_index(brightness: u8, ramp_len: usize) -> usize {
    brightness as usize / bucket_size(ramp_len)
}

/// Select the glyph for a brightness value
///
/// # Arguments
/// * `brightness` - Luminance in [0, 255]
/// * `ramp` - Characters ordered darkest first (already reversed when inverting)
///
/// # Returns
/// The character to render
///
/// # Panics
/// If `ramp` is empty.
pub fn select_glyph(brightness: u8, ramp: &[char]) -> char {
    ramp[bucket_index(brightness, ramp.len())]
}

/// Select glyphs for every pixel of a luminance image, in row-major order
///
/// # Arguments
/// * `lum` - Luminance image
/// * `ramp` - Characters ordered darkest first
///
/// # Returns
/// One glyph per pixel, `width * height` long
pub fn select_glyphs(lum: &GrayImage, ramp: &[char]) -> Vec<char> {
    let size = bucket_size(ramp.len());

    #[cfg(feature = "parallel")]
    let pixels = lum.as_raw().par_iter();
    #[cfg(not(feature = "parallel"))]
    let pixels = lum.as_raw().iter();

    pixels.map(|&p| ramp[p as usize / size]).collect()
}

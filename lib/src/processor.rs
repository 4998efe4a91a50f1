use crate::ansi::colorize;
use crate::ascii::select_glyphs;
use crate::config::AsciiConfig;
use crate::error::{AsciiError, Result};
use crate::filters::{calculate_luminance, resize_to_width};
use crate::layout::assemble_lines;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Open and decode an image file
///
/// # Errors
/// [`AsciiError::Load`] when the path is missing, unreadable, or not a
/// supported image format.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| AsciiError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Converts an image to plain ASCII art
///
/// Pipeline:
/// 1. Resize to `config.width` columns at half the aspect-correct height
/// 2. Extract luminance
/// 3. Bucket each luminance value into the (optionally inverted) ramp
/// 4. Chunk into rows of `config.width` glyphs
///
/// # Arguments
/// * `input` - The input RGB image
/// * `config` - Conversion settings; `config.color` is ignored here
///
/// # Returns
/// Rows of glyphs joined by `\n`, empty if the image resizes to zero rows
pub fn convert_grey(input: &RgbImage, config: &AsciiConfig) -> Result<String> {
    config.validate()?;

    let resized = resize_to_width(input, config.width)?;
    log::debug!(
        "Greyscale pipeline at {}x{}",
        resized.width(),
        resized.height()
    );

    let lum = calculate_luminance(&resized);
    let ramp = config.effective_scale().ramp(config.invert);
    log::trace!("Ramp {:?}", ramp);

    let glyphs = select_glyphs(&lum, &ramp);
    Ok(assemble_lines(&glyphs, config.width as usize))
}

/// Converts an image to ASCII art with every glyph in its pixel's color
///
/// Glyphs are bucketed from the luminance of each resized pixel, then
/// wrapped in the RGB color of that same pixel.
///
/// # Arguments
/// * `input` - The input RGB image
/// * `config` - Conversion settings; `config.color` is ignored here
///
/// # Returns
/// Rows of escape-wrapped glyphs joined by `\n`
pub fn convert_color(input: &RgbImage, config: &AsciiConfig) -> Result<String> {
    config.validate()?;

    let resized = resize_to_width(input, config.width)?;
    log::debug!(
        "Color pipeline at {}x{}",
        resized.width(),
        resized.height()
    );

    let lum = calculate_luminance(&resized);
    let ramp = config.effective_scale().ramp(config.invert);
    log::trace!("Ramp {:?}", ramp);

    let glyphs = select_glyphs(&lum, &ramp);
    let colored = colorize(&glyphs, &resized);
    Ok(assemble_lines(&colored, config.width as usize))
}

/// Converts an image using the pipeline selected by `config.color`
pub fn convert(input: &DynamicImage, config: &AsciiConfig) -> Result<String> {
    let rgb = input.to_rgb8();
    if config.color {
        convert_color(&rgb, config)
    } else {
        convert_grey(&rgb, config)
    }
}

/// Load an image from `path` and convert it
///
/// Nothing is resized or converted if loading fails.
pub fn convert_path(path: impl AsRef<Path>, config: &AsciiConfig) -> Result<String> {
    config.validate()?;
    let image = load_image(path)?;
    convert(&image, config)
}

//! 24-bit ANSI foreground coloring.

use image::RgbImage;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

const ESC: char = '\x1b';
const RESET: &str = "\x1b[0m";

/// Wrap a single glyph in a truecolor foreground escape followed by a reset
pub fn color(glyph: char, r: u8, g: u8, b: u8) -> String {
    format!("{ESC}[38;2;{r};{g};{b}m{glyph}{RESET}")
}

/// Pair every glyph with the pixel at the same position and color it
///
/// # Arguments
/// * `glyphs` - Glyphs in row-major order
/// * `source` - Resized RGB image the glyphs were derived from
///
/// # Returns
/// One escape-wrapped string per glyph, same order and count
///
/// # Panics
/// If `glyphs.len()` differs from the pixel count of `source`.
pub fn colorize(glyphs: &[char], source: &RgbImage) -> Vec<String> {
    let raw = source.as_raw();
    assert_eq!(
        glyphs.len() * 3,
        raw.len(),
        "Glyph count must match pixel count"
    );

    #[cfg(feature = "parallel")]
    let pairs = glyphs.par_iter().zip(raw.par_chunks_exact(3));
    #[cfg(not(feature = "parallel"))]
    let pairs = glyphs.iter().zip(raw.chunks_exact(3));

    pairs
        .map(|(&glyph, rgb)| color(glyph, rgb[0], rgb[1], rgb[2]))
        .collect()
}

/// Remove `ESC[...m` sequences, leaving only the visible characters
pub fn strip_ansi(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            // skip through the final byte of the SGR sequence
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_color_format() {
        assert_eq!(color('#', 255, 0, 10), "\x1b[38;2;255;0;10m#\x1b[0m");
    }

    #[test]
    fn test_color_resets_after_each_glyph() {
        let colored = color('@', 1, 2, 3);
        assert!(colored.ends_with(RESET));
        assert_eq!(colored.matches(ESC).count(), 2);
    }

    #[test]
    fn test_colorize_uses_pixel_colors() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([40, 50, 60]));

        let colored = colorize(&['#', '@'], &img);
        assert_eq!(
            colored,
            vec![color('#', 10, 20, 30), color('@', 40, 50, 60)]
        );
    }

    #[test]
    fn test_colorize_empty() {
        let img = RgbImage::new(3, 0);
        assert!(colorize(&[], &img).is_empty());
    }

    #[test]
    #[should_panic(expected = "Glyph count must match pixel count")]
    fn test_colorize_length_mismatch() {
        let img = RgbImage::new(2, 2);
        colorize(&['#'], &img);
    }

    #[test]
    fn test_strip_ansi() {
        let text = format!("{}{}\n{}", color('#', 1, 2, 3), color('%', 4, 5, 6), color('@', 7, 8, 9));
        assert_eq!(strip_ansi(&text), "#%\n@");
    }

    #[test]
    fn test_strip_ansi_plain_text_untouched() {
        assert_eq!(strip_ansi(" .:-=\n+*#%@"), " .:-=\n+*#%@");
    }
}

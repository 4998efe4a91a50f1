/// Render a synthetic image with every built-in scale, plain and colored
use ascii_term::{AsciiConfig, Scale, convert};
use image::{DynamicImage, Rgb, RgbImage};

fn main() -> Result<(), ascii_term::AsciiError> {
    let width = 320;
    let height = 160;

    // Radial brightness falloff over a hue sweep
    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - width as f32 / 2.0;
        let dy = (y as f32 - height as f32 / 2.0) * 2.0;
        let dist = (dx * dx + dy * dy).sqrt() / (width as f32 / 2.0);
        let level = (1.0 - dist).clamp(0.0, 1.0);

        let hue = x as f32 / width as f32;
        Rgb([
            (level * 255.0 * hue) as u8,
            (level * 255.0 * (1.0 - hue)) as u8,
            (level * 255.0) as u8,
        ])
    });
    let img = DynamicImage::ImageRgb8(img);

    for scale in Scale::ALL {
        for color in [false, true] {
            let config = AsciiConfig {
                width: 60,
                scale: Some(scale),
                color,
                ..Default::default()
            };
            println!("{} (color: {})", scale, color);
            println!("{}\n", convert(&img, &config)?);
        }
    }

    Ok(())
}

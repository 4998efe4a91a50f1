//! Command-line arguments.

use ascii_term::{AsciiConfig, Scale};
use clap::Parser;
use std::path::PathBuf;

/// Print an image as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-art")]
#[command(about = "Print an image as ASCII art in the terminal", long_about = None)]
pub struct Cli {
    /// Path to image
    #[arg(long)]
    pub path: PathBuf,

    /// ASCII image width in characters
    #[arg(long, default_value_t = 100)]
    pub width: u32,

    /// Character scale: STANDARD, TEN or COLOR [default: STANDARD, COLOR with --color]
    #[arg(long, value_name = "SCALE")]
    pub scale: Option<String>,

    /// Color every character with its pixel's RGB value
    #[arg(long)]
    pub color: bool,

    /// Invert the greyscale ramp (for light terminals)
    #[arg(long)]
    pub invert: bool,
}

impl Cli {
    /// Map the parsed flags onto a conversion config
    ///
    /// Fails on an unrecognized scale name instead of falling back.
    pub fn config(&self) -> ascii_term::Result<AsciiConfig> {
        let scale = self
            .scale
            .as_deref()
            .map(str::parse::<Scale>)
            .transpose()?;

        let config = AsciiConfig {
            width: self.width,
            scale,
            color: self.color,
            invert: self.invert,
        };
        config.validate()?;
        Ok(config)
    }
}

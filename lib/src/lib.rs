//! ASCII Term - image to terminal ASCII art converter
//!
//! Resizes an image to a target column count (halving the height to match
//! terminal cell proportions), maps every pixel's luminance onto a
//! character ramp, and optionally wraps each glyph in a 24-bit ANSI color.
//!
//! # Example
//! ```no_run
//! use ascii_term::{AsciiConfig, Scale, convert, load_image};
//!
//! let image = load_image("photo.jpg").unwrap();
//! let config = AsciiConfig {
//!     width: 80,
//!     scale: Some(Scale::Ten),
//!     ..Default::default()
//! };
//! println!("{}", convert(&image, &config).unwrap());
//! ```

pub mod ansi;
pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod layout;
pub mod processor;
pub mod scale;

// Re-export main types for convenience
pub use ansi::strip_ansi;
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use processor::{convert, convert_color, convert_grey, convert_path, load_image};
pub use scale::Scale;

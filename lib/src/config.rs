use crate::error::{AsciiError, Result};
use crate::scale::Scale;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiConfig {
    /// Output width in characters, default 100
    pub width: u32,

    /// Character ramp. `None` picks the mode default, see [`AsciiConfig::effective_scale`]
    pub scale: Option<Scale>,

    /// Wrap every glyph in a 24-bit foreground color escape
    pub color: bool,
    /// Read the ramp right-to-left
    pub invert: bool,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            width: 100,
            scale: None,
            color: false,
            invert: false,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(AsciiError::InvalidConfig(
                "width must be a positive number of characters, got 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Ramp actually used for this configuration
    ///
    /// Greyscale output falls back to `Standard`, colored output to `Color`.
    pub fn effective_scale(&self) -> Scale {
        match (self.scale, self.color) {
            (Some(scale), _) => scale,
            (None, false) => Scale::Standard,
            (None, true) => Scale::Color,
        }
    }
}

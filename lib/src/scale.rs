//! Character ramps used to turn brightness into glyphs.
//!
//! Every ramp is ordered from darkest (index 0) to brightest (last index).

use crate::error::AsciiError;
use std::fmt;
use std::str::FromStr;

/// Short 10 level ramp
pub const TEN_CHARS: &str = " .:-=+*#%@";

/// Long 70 level ramp, the default for greyscale output
pub const STANDARD_CHARS: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Dense 3 level ramp meant to carry terminal color
pub const COLOR_CHARS: &str = "#%@";

/// Named character ramp
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scale {
    #[default]
    Standard,
    Ten,
    Color,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Standard, Scale::Ten, Scale::Color];

    /// The ramp characters, darkest first
    pub fn chars(self) -> &'static str {
        match self {
            Scale::Standard => STANDARD_CHARS,
            Scale::Ten => TEN_CHARS,
            Scale::Color => COLOR_CHARS,
        }
    }

    /// Upper-case name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Scale::Standard => "STANDARD",
            Scale::Ten => "TEN",
            Scale::Color => "COLOR",
        }
    }

    /// Build the ramp used for bucketing
    ///
    /// With `invert` set the ramp is read right-to-left, so bright pixels
    /// get the sparse glyphs (useful on light terminal backgrounds).
    pub fn ramp(self, invert: bool) -> Vec<char> {
        let chars = self.chars().chars();
        if invert {
            chars.rev().collect()
        } else {
            chars.collect()
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AsciiError::UnknownScale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_lengths() {
        assert_eq!(Scale::Ten.ramp(false).len(), 10);
        assert_eq!(Scale::Standard.ramp(false).len(), 70);
        assert_eq!(Scale::Color.ramp(false).len(), 3);
    }

    #[test]
    fn test_ramps_are_never_empty() {
        for scale in Scale::ALL {
            assert!(!scale.chars().is_empty());
        }
    }

    #[test]
    fn test_darkest_is_space() {
        assert_eq!(Scale::Ten.ramp(false)[0], ' ');
        assert_eq!(Scale::Standard.ramp(false)[0], ' ');
        assert_eq!(Scale::Standard.ramp(false)[69], '$');
    }

    #[test]
    fn test_standard_keeps_single_backslash() {
        let ramp = Scale::Standard.ramp(false);
        assert_eq!(ramp[28], '\\');
        assert_eq!(ramp[29], '/');
    }

    #[test]
    fn test_inverted_ramp() {
        assert_eq!(Scale::Color.ramp(true), vec!['@', '%', '#']);
        let forward = Scale::Ten.ramp(false);
        let mut reversed = Scale::Ten.ramp(true);
        reversed.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("standard".parse::<Scale>().unwrap(), Scale::Standard);
        assert_eq!("TEN".parse::<Scale>().unwrap(), Scale::Ten);
        assert_eq!("Color".parse::<Scale>().unwrap(), Scale::Color);
    }

    #[test]
    fn test_parse_unknown_scale() {
        let err = "PURPLE".parse::<Scale>().unwrap_err();
        assert!(matches!(err, AsciiError::UnknownScale(ref name) if name == "PURPLE"));
        assert!(err.to_string().contains("PURPLE"));
    }

    #[test]
    fn test_display_round_trips() {
        for scale in Scale::ALL {
            assert_eq!(scale.to_string().parse::<Scale>().unwrap(), scale);
        }
    }
}

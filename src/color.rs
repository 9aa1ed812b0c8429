//! Color utilities
//!
//! Hex parsing/formatting and the per-channel tolerance test used to match
//! rendered pixels back to assigned word colors.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CloudError;

/// Fallback color handed to the renderer for words missing from the catalog.
pub const DEFAULT_WORD_COLOR: Rgb = Rgb::new(0x33, 0x33, 0x33);

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    ///
    /// Excel-style ARGB (`AARRGGBB`) is accepted too; the alpha byte is dropped.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let hex = match hex.len() {
            6 => hex,
            8 => hex.get(2..)?,
            _ => return None,
        };

        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Largest absolute difference over the three channels.
    #[must_use]
    pub fn channel_distance(self, other: Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    /// True when every channel differs by strictly less than `tolerance`.
    ///
    /// Channels are compared independently, so this is a box test in RGB
    /// space rather than a Euclidean one.
    #[must_use]
    pub fn matches_within(self, other: Self, tolerance: u8) -> bool {
        self.channel_distance(other) < tolerance
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| CloudError::Other(format!("Invalid color: {s}")))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("#1f77b4", Rgb::new(0x1f, 0x77, 0xb4) ; "lowercase with hash")]
    #[test_case("1F77B4", Rgb::new(0x1f, 0x77, 0xb4) ; "uppercase without hash")]
    #[test_case("FF1F77B4", Rgb::new(0x1f, 0x77, 0xb4) ; "argb drops alpha")]
    #[test_case(" #000000 ", Rgb::new(0, 0, 0) ; "surrounding whitespace")]
    fn test_from_hex(input: &str, expected: Rgb) {
        assert_eq!(Rgb::from_hex(input), Some(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("#fff" ; "short form")]
    #[test_case("#gg0000" ; "not hex")]
    #[test_case("#1234567" ; "seven digits")]
    fn test_from_hex_rejects(input: &str) {
        assert_eq!(Rgb::from_hex(input), None);
    }

    #[test]
    fn test_hex_formatting_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0x1f, 0x77, 0xb4).to_hex(), "#1f77b4");
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(DEFAULT_WORD_COLOR.to_hex(), "#333333");
    }

    #[test]
    fn test_parse_via_from_str() {
        let color: Rgb = "#ff7f0e".parse().unwrap();
        assert_eq!(color, Rgb::new(0xff, 0x7f, 0x0e));
        assert!("nope".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_off_by_one_matches() {
        let assigned = Rgb::from_hex("#1f77b4").unwrap();
        let rendered = Rgb::from_hex("#1f77b5").unwrap();
        assert!(assigned.matches_within(rendered, 25));
    }

    #[test]
    fn test_thirty_off_in_one_channel_does_not_match() {
        let assigned = Rgb::new(100, 100, 100);
        assert!(!assigned.matches_within(Rgb::new(130, 100, 100), 25));
        assert!(!assigned.matches_within(Rgb::new(100, 70, 100), 25));
        assert!(!assigned.matches_within(Rgb::new(100, 100, 130), 25));
    }

    #[test]
    fn test_tolerance_is_exclusive() {
        let assigned = Rgb::new(100, 100, 100);
        assert!(assigned.matches_within(Rgb::new(124, 124, 124), 25));
        assert!(!assigned.matches_within(Rgb::new(125, 100, 100), 25));
    }

    #[test]
    fn test_channels_are_independent() {
        // Euclidean distance here is ~41, yet every channel is within 24.
        let assigned = Rgb::new(100, 100, 100);
        assert!(assigned.matches_within(Rgb::new(124, 124, 124), 25));
        assert_eq!(assigned.channel_distance(Rgb::new(124, 90, 101)), 24);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }
}

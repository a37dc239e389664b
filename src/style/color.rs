//! Color values for syntax styles
//!
//! Colors are always held as three RGB bytes, so a stored color is canonical
//! by construction. The textual form is `#rrggbb`, lowercase.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, StyleError};

/// Accepted color literal: `#rgb` or `#rrggbb`
static VALID_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex"));

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// White, the default background
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Pale yellow, the default current-line highlight
    pub const PALE_YELLOW: Color = Color::rgb(0xff, 0xff, 0xcc);

    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color literal, rejecting anything that is not `#rgb` or `#rrggbb`
    pub fn parse(value: &str) -> Result<Self> {
        let caps = VALID_COLOR
            .captures(value)
            .ok_or_else(|| StyleError::InvalidColor(value.to_string()))?;
        let digits = caps[1].as_bytes();

        // Regex guarantees every byte is a hex digit
        let nibble = |b: u8| (b as char).to_digit(16).unwrap_or(0) as u8;

        let color = if digits.len() == 3 {
            let expand = |b: u8| nibble(b) * 17;
            Color::rgb(expand(digits[0]), expand(digits[1]), expand(digits[2]))
        } else {
            let byte = |i: usize| (nibble(digits[i]) << 4) | nibble(digits[i + 1]);
            Color::rgb(byte(0), byte(2), byte(4))
        };
        Ok(color)
    }

    /// Relative luminance in `0.0..=1.0` (ITU-R BT.709 weights, no gamma)
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }

    /// Whether text on this color should use a light-background scheme
    pub fn is_light(&self) -> bool {
        self.luminance() >= 0.5
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

/// Normalise an optional color literal.
///
/// Absent or empty input means "no color" and is not an error. Anything else
/// must be a valid literal; 3-digit forms are expanded.
pub fn normalize(input: Option<&str>) -> Result<Option<Color>> {
    match input {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => Color::parse(value).map(Some),
    }
}

//! RGB color values, hex parsing, and distance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),

    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, case-insensitive, with or without a
    /// leading `#`. Shorthand (`#FFF`), alpha (`#RRGGBBAA`) and named
    /// forms are rejected.
    pub fn parse(hex: &str) -> Result<Self, ParseHexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ParseHexError::Length(digits.len()));
        }
        // All-ASCII check before slicing, so multi-byte input cannot
        // split a char boundary below.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseHexError::Digit(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseHexError::Digit(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Canonical `#RRGGBB` form, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Euclidean distance to another color in RGB space, over channel
    /// values in [0, 255]. Symmetric.
    pub fn distance(self, other: Self) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

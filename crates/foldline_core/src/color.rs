//! RGBA colors

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a color string is not `#RRGGBB` or `#AARRGGBB`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 6 or 8 hex digits: {0:?}")]
    InvalidLength(String),

    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`, the same notation Android color
    /// resources use.
    pub fn parse_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::InvalidLength(s.to_string()));
        }
        // from_str_radix alone would accept a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_hex(value))
        } else {
            let alpha = ((value >> 24) & 0xFF) as f32 / 255.0;
            Ok(Self::from_hex(value & 0x00FF_FFFF).with_alpha(alpha))
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn channel(v: f32) -> u32 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb = (Self::channel(self.r) << 16) | (Self::channel(self.g) << 8) | Self::channel(self.b);
        if Self::channel(self.a) == 255 {
            write!(f, "#{:06X}", rgb)
        } else {
            write!(f, "#{:02X}{:06X}", Self::channel(self.a), rgb)
        }
    }
}

//! CSS color values

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A color in a form that can be written into an inline CSS declaration
///
/// Spreadsheet extractors report colors as `#rrggbb` strings or CSS names;
/// cells without an explicit color carry [`CssColor::None`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CssColor {
    /// No color set
    #[default]
    None,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// RGB color with alpha, written as `#rrggbbaa`
    Rgba { r: u8, g: u8, b: u8, a: u8 },

    /// A CSS named color (e.g. "red", "cornflowerblue"), stored lowercase
    Named(String),
}

impl CssColor {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        CssColor::Rgb { r, g, b }
    }

    /// Parse from `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => {
                let mut nibbles = hex.chars().map(|c| c.to_digit(16).map(|d| d as u8 * 17));
                Some(CssColor::Rgb {
                    r: nibbles.next()??,
                    g: nibbles.next()??,
                    b: nibbles.next()??,
                })
            }
            6 => Some(CssColor::Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            }),
            8 => Some(CssColor::Rgba {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Parse any color string an extractor may report
    ///
    /// An empty string or `none` yields [`CssColor::None`].
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(CssColor::None);
        }
        if s.starts_with('#') {
            return Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()));
        }
        if s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(CssColor::Named(s.to_ascii_lowercase()));
        }
        Err(Error::InvalidColor(s.to_string()))
    }

    /// Check if no color is set
    pub fn is_none(&self) -> bool {
        matches!(self, CssColor::None)
    }

    pub const BLACK: CssColor = CssColor::rgb(0, 0, 0);
    pub const WHITE: CssColor = CssColor::rgb(255, 255, 255);
    pub const RED: CssColor = CssColor::rgb(255, 0, 0);
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssColor::None => write!(f, "none"),
            CssColor::Rgb { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            CssColor::Rgba { r, g, b, a } => write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
            CssColor::Named(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for CssColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

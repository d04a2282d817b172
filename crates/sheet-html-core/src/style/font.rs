//! Font style and weight

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Font slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// CSS keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "normal" => Ok(FontStyle::Normal),
            // Spreadsheets have no oblique; treat it as italic
            "italic" | "oblique" => Ok(FontStyle::Italic),
            other => Err(Error::InvalidFontStyle(other.to_string())),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Font weight, either a keyword or a numeric CSS weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    /// Numeric weight in 1..=1000
    Numeric(u16),
}

impl FontWeight {
    /// Create a numeric weight, rejecting values outside the CSS range
    pub fn numeric(weight: u16) -> Result<Self> {
        if (1..=1000).contains(&weight) {
            Ok(FontWeight::Numeric(weight))
        } else {
            Err(Error::InvalidFontWeight(weight.to_string()))
        }
    }
}

impl FromStr for FontWeight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "" | "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            other => other
                .parse::<u16>()
                .map_err(|_| Error::InvalidFontWeight(s.to_string()))
                .and_then(FontWeight::numeric),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
            FontWeight::Numeric(w) => write!(f, "{}", w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_parse() {
        assert_eq!("italic".parse::<FontStyle>().unwrap(), FontStyle::Italic);
        assert_eq!("NORMAL".parse::<FontStyle>().unwrap(), FontStyle::Normal);
        assert!("slanted".parse::<FontStyle>().is_err());
    }

    #[test]
    fn test_font_weight_parse() {
        assert_eq!("bold".parse::<FontWeight>().unwrap(), FontWeight::Bold);
        assert_eq!("600".parse::<FontWeight>().unwrap(), FontWeight::Numeric(600));
        assert!("0".parse::<FontWeight>().is_err());
        assert!("1001".parse::<FontWeight>().is_err());
        assert!("heavy".parse::<FontWeight>().is_err());
    }
}

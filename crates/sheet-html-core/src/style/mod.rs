//! Cell styling types
//!
//! Only the properties that have an inline CSS equivalent are modelled:
//! - [`CssColor`] - background and text colors
//! - [`FontStyle`] - normal or italic
//! - [`FontWeight`] - keyword or numeric weight

mod color;
mod font;

pub use color::CssColor;
pub use font::{FontStyle, FontWeight};

/// Visual formatting of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    /// Fill color
    pub background_color: CssColor,
    /// Font color
    pub text_color: CssColor,
    /// Font slant
    pub font_style: FontStyle,
    /// Font weight
    pub font_weight: FontWeight,
}

impl CellStyle {
    /// Create a new default style (no colors, normal font)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set background color
    pub fn background(mut self, color: CssColor) -> Self {
        self.background_color = color;
        self
    }

    /// Set text color
    pub fn color(mut self, color: CssColor) -> Self {
        self.text_color = color;
        self
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_weight = if bold {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_style = if italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        self
    }

    /// Set an explicit font weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

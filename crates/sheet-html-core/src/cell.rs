//! Per-position cell records

use crate::address::CellAddress;
use crate::style::CellStyle;
use std::fmt;

/// Scalar kind of the value underlying a cell
///
/// Drives default alignment: text sits left, everything else right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    /// String value (also used for empty cells)
    #[default]
    Text,
    /// Numeric value, including currency and percentages
    Number,
    /// TRUE/FALSE
    Boolean,
    /// Anything else, such as dates
    Other,
}

impl ValueKind {
    /// Map an extractor's type name (`string`, `number`, `boolean`, ...)
    pub fn from_type_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "string" | "text" => ValueKind::Text,
            "number" => ValueKind::Number,
            "boolean" | "bool" => ValueKind::Boolean,
            _ => ValueKind::Other,
        }
    }

    /// The extractor-facing type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Text => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Other => "object",
        }
    }

    pub fn is_text_like(&self) -> bool {
        matches!(self, ValueKind::Text)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Which table-cell element a grid position renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<th>`, used for the first grid row
    Header,
    /// `<td>`
    Body,
}

impl ElementKind {
    /// Element kind for a grid row; only row 0 is a header row
    pub fn for_row(row_index: u32) -> Self {
        if row_index == 0 {
            ElementKind::Header
        } else {
            ElementKind::Body
        }
    }

    /// HTML tag name
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Header => "th",
            ElementKind::Body => "td",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Everything known about one grid position
///
/// `row_index`/`col_index` are relative to the grid, while `address` is the
/// cell's position on the source sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRecord {
    /// Sheet address, unique within a grid
    pub address: CellAddress,
    /// Row within the grid (0 = header row)
    pub row_index: u32,
    /// Column within the grid
    pub col_index: u32,
    /// Kind of the underlying value
    pub value_kind: ValueKind,
    /// Text as the sheet displays it
    pub display_value: String,
    /// Colors and font
    pub style: CellStyle,
    /// Part of some merge region, anchor or covered
    pub is_merged: bool,
    /// Cell note; empty means none
    pub note: String,
}

impl CellRecord {
    /// Create an empty, unstyled record
    pub fn new(address: CellAddress, row_index: u32, col_index: u32) -> Self {
        Self {
            address,
            row_index,
            col_index,
            value_kind: ValueKind::Text,
            display_value: String::new(),
            style: CellStyle::default(),
            is_merged: false,
            note: String::new(),
        }
    }

    /// Element kind, derived from the row index
    pub fn element_kind(&self) -> ElementKind {
        ElementKind::for_row(self.row_index)
    }

    /// Set the value kind and displayed text
    pub fn with_value<S: Into<String>>(mut self, kind: ValueKind, display: S) -> Self {
        self.value_kind = kind;
        self.display_value = display.into();
        self
    }

    /// Set a text value
    pub fn text<S: Into<String>>(self, display: S) -> Self {
        self.with_value(ValueKind::Text, display)
    }

    /// Set a numeric value, given as the sheet displays it
    pub fn number<S: Into<String>>(self, display: S) -> Self {
        self.with_value(ValueKind::Number, display)
    }

    /// Set the style
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Mark as participating in a merge
    pub fn merged(mut self, is_merged: bool) -> Self {
        self.is_merged = is_merged;
        self
    }

    /// Attach a note
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.note = note.into();
        self
    }

    /// Check if the record carries a non-empty note
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

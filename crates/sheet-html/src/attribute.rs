//! Recognized cell attribute vocabulary
//!
//! Extractors that hand over loosely-typed records name attributes with
//! these strings. Looking up any other name is a programming error and
//! fails immediately.

use std::fmt;
use std::str::FromStr;

use sheet_html_core::{CellAddress, CssColor, ElementKind, FontStyle, FontWeight, ValueKind};

use crate::error::HtmlError;
use crate::merge::MergeRegion;

/// One recognized attribute name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellAttribute {
    Address,
    RangeRowIndex,
    HtmlCellType,
    RangeColIndex,
    SheetCellType,
    Value,
    BackgroundColor,
    Color,
    IsMerged,
    CellNote,
    FontStyle,
    FontWeight,
    /// Only present on merge anchors
    MergeInfo,
}

impl CellAttribute {
    /// The full vocabulary, in contract order
    pub const ALL: [CellAttribute; 13] = [
        CellAttribute::Address,
        CellAttribute::RangeRowIndex,
        CellAttribute::HtmlCellType,
        CellAttribute::RangeColIndex,
        CellAttribute::SheetCellType,
        CellAttribute::Value,
        CellAttribute::BackgroundColor,
        CellAttribute::Color,
        CellAttribute::IsMerged,
        CellAttribute::CellNote,
        CellAttribute::FontStyle,
        CellAttribute::FontWeight,
        CellAttribute::MergeInfo,
    ];

    /// Wire name of the attribute
    pub fn name(&self) -> &'static str {
        match self {
            CellAttribute::Address => "address",
            CellAttribute::RangeRowIndex => "rangeRowIndex",
            CellAttribute::HtmlCellType => "htmlCellType",
            CellAttribute::RangeColIndex => "rangeColIndex",
            CellAttribute::SheetCellType => "sheetCellType",
            CellAttribute::Value => "value",
            CellAttribute::BackgroundColor => "backgroundColor",
            CellAttribute::Color => "color",
            CellAttribute::IsMerged => "isMerged",
            CellAttribute::CellNote => "cellNote",
            CellAttribute::FontStyle => "fontStyle",
            CellAttribute::FontWeight => "fontWeight",
            CellAttribute::MergeInfo => "mergeInfo",
        }
    }

    /// Every attribute except `mergeInfo` is present on every record
    pub fn is_required(&self) -> bool {
        !matches!(self, CellAttribute::MergeInfo)
    }

    /// Look up an attribute by its exact, case-sensitive name
    pub fn from_name(name: &str) -> Result<Self, HtmlError> {
        Self::ALL
            .iter()
            .copied()
            .find(|attr| attr.name() == name)
            .ok_or_else(|| HtmlError::UnrecognizedAttribute(name.to_string()))
    }
}

impl FromStr for CellAttribute {
    type Err = HtmlError;

    fn from_str(s: &str) -> Result<Self, HtmlError> {
        Self::from_name(s)
    }
}

impl fmt::Display for CellAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of one attribute of an enriched cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Address(CellAddress),
    Index(u32),
    ElementKind(ElementKind),
    ValueKind(ValueKind),
    Text(&'a str),
    Color(&'a CssColor),
    Flag(bool),
    FontStyle(FontStyle),
    FontWeight(FontWeight),
    MergeInfo(Option<&'a MergeRegion>),
}

impl fmt::Display for AttributeValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Address(addr) => write!(f, "{}", addr),
            AttributeValue::Index(i) => write!(f, "{}", i),
            AttributeValue::ElementKind(kind) => write!(f, "{}", kind),
            AttributeValue::ValueKind(kind) => write!(f, "{}", kind),
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Color(color) => write!(f, "{}", color),
            AttributeValue::Flag(flag) => write!(f, "{}", flag),
            AttributeValue::FontStyle(style) => write!(f, "{}", style),
            AttributeValue::FontWeight(weight) => write!(f, "{}", weight),
            AttributeValue::MergeInfo(Some(region)) => write!(
                f,
                "{} (rows: {}, cols: {})",
                region.range, region.row_span, region.col_span
            ),
            AttributeValue::MergeInfo(None) => f.write_str("none"),
        }
    }
}

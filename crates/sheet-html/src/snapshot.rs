//! Grid snapshots: the JSON form of an extracted range
//!
//! An extractor running next to the spreadsheet writes one of these; the
//! attribute names follow the cell attribute vocabulary.
//!
//! ```json
//! {
//!   "cells": [[{ "address": "A1", "rangeRowIndex": 0, "htmlCellType": "th",
//!                "rangeColIndex": 0, "sheetCellType": "string", "value": "Name",
//!                "backgroundColor": "#ffffff", "color": "#000000",
//!                "isMerged": false, "cellNote": "",
//!                "fontStyle": "normal", "fontWeight": "bold" }]],
//!   "merges": ["A1:B1"]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use sheet_html_core::{
    CellAddress, CellRange, CellRecord, CellStyle, CssColor, ElementKind, FontStyle, FontWeight,
    Grid, ValueKind,
};

use crate::error::{HtmlError, HtmlResult};

/// One cell as written by an extractor
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCell {
    pub address: String,
    pub range_row_index: u32,
    /// `th` or `td`; checked against the row index when present
    #[serde(default)]
    pub html_cell_type: Option<String>,
    pub range_col_index: u32,
    pub sheet_cell_type: String,
    pub value: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_merged: bool,
    #[serde(default)]
    pub cell_note: String,
    #[serde(default)]
    pub font_style: String,
    #[serde(default)]
    pub font_weight: WeightField,
}

/// `fontWeight` may be a keyword or a number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeightField {
    Number(u16),
    Keyword(String),
}

impl Default for WeightField {
    fn default() -> Self {
        WeightField::Keyword(String::new())
    }
}

/// A full extracted range: cells plus merged ranges in A1 notation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridSnapshot {
    pub cells: Vec<Vec<SnapshotCell>>,
    #[serde(default)]
    pub merges: Vec<String>,
}

impl GridSnapshot {
    /// Read a snapshot file
    pub fn read_file<P: AsRef<Path>>(path: P) -> HtmlResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a snapshot from a reader
    pub fn from_reader<R: Read>(reader: R) -> HtmlResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> HtmlResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a validated grid and the merged ranges
    pub fn into_parts(self) -> HtmlResult<(Grid, Vec<CellRange>)> {
        let rows = self
            .cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(SnapshotCell::into_record)
                    .collect::<HtmlResult<Vec<_>>>()
            })
            .collect::<HtmlResult<Vec<Vec<CellRecord>>>>()?;
        let grid = Grid::new(rows)?;

        let merges = self
            .merges
            .iter()
            .map(|m| CellRange::parse(m))
            .collect::<sheet_html_core::Result<Vec<_>>>()?;

        Ok((grid, merges))
    }
}

impl SnapshotCell {
    /// Parse the loosely-typed fields into a record
    pub fn into_record(self) -> HtmlResult<CellRecord> {
        let address = CellAddress::parse(&self.address)?;

        if let Some(declared) = &self.html_cell_type {
            let derived = ElementKind::for_row(self.range_row_index);
            if declared.as_str() != derived.tag() {
                return Err(HtmlError::SnapshotMismatch {
                    address: self.address,
                    message: format!(
                        "htmlCellType is {} but row {} renders as {}",
                        declared, self.range_row_index, derived
                    ),
                });
            }
        }

        let font_weight = match &self.font_weight {
            WeightField::Number(w) => FontWeight::numeric(*w)?,
            WeightField::Keyword(k) => k.parse::<FontWeight>()?,
        };

        let style = CellStyle::new()
            .background(CssColor::parse(&self.background_color)?)
            .color(CssColor::parse(&self.color)?)
            .weight(font_weight);
        let style = CellStyle {
            font_style: self.font_style.parse::<FontStyle>()?,
            ..style
        };

        Ok(
            CellRecord::new(address, self.range_row_index, self.range_col_index)
                .with_value(ValueKind::from_type_name(&self.sheet_cell_type), self.value)
                .with_style(style)
                .merged(self.is_merged)
                .with_note(self.cell_note),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SNAPSHOT: &str = r##"{
        "cells": [
            [
                {"address": "B2", "rangeRowIndex": 0, "htmlCellType": "th", "rangeColIndex": 0,
                 "sheetCellType": "string", "value": "Region", "backgroundColor": "#cfe2f3",
                 "color": "#000000", "isMerged": false, "cellNote": "",
                 "fontStyle": "normal", "fontWeight": "bold"},
                {"address": "C2", "rangeRowIndex": 0, "rangeColIndex": 1,
                 "sheetCellType": "string", "value": "Sales", "fontWeight": 700}
            ],
            [
                {"address": "B3", "rangeRowIndex": 1, "htmlCellType": "td", "rangeColIndex": 0,
                 "sheetCellType": "string", "value": "North", "fontStyle": "italic",
                 "textAlign": "general-left"},
                {"address": "C3", "rangeRowIndex": 1, "rangeColIndex": 1,
                 "sheetCellType": "number", "value": "1,200", "cellNote": "estimate"}
            ]
        ],
        "merges": []
    }"##;

    #[test]
    fn test_parse_snapshot() {
        let (grid, merges) = GridSnapshot::from_json(SNAPSHOT).unwrap().into_parts().unwrap();
        assert!(merges.is_empty());
        assert_eq!(grid.row_count(), 2);

        let header = grid.cell(0, 0).unwrap();
        assert_eq!(header.address.to_string(), "B2");
        assert_eq!(header.style.background_color, CssColor::rgb(0xcf, 0xe2, 0xf3));
        assert_eq!(header.style.font_weight, FontWeight::Bold);

        assert_eq!(grid.cell(0, 1).unwrap().style.font_weight, FontWeight::Numeric(700));
        assert_eq!(grid.cell(0, 1).unwrap().style.text_color, CssColor::None);
        assert_eq!(grid.cell(1, 0).unwrap().style.font_style, FontStyle::Italic);

        let number = grid.cell(1, 1).unwrap();
        assert_eq!(number.value_kind, ValueKind::Number);
        assert_eq!(number.note, "estimate");
    }

    #[test]
    fn test_merges_are_parsed() {
        let json = r#"{"cells": [], "merges": ["A1:B2", "D4"]}"#;
        let (_, merges) = GridSnapshot::from_json(json).unwrap().into_parts().unwrap();
        assert_eq!(merges.len(), 2);
        assert_eq!(merges[0].to_string(), "A1:B2");
        assert_eq!(merges[1].cell_count(), 1);
    }

    #[test]
    fn test_cell_type_must_match_row() {
        let json = r#"{"cells": [[{"address": "A1", "rangeRowIndex": 0, "htmlCellType": "td",
                       "rangeColIndex": 0, "sheetCellType": "string", "value": "x"}]]}"#;
        let err = GridSnapshot::from_json(json).unwrap().into_parts().unwrap_err();
        assert!(matches!(err, HtmlError::SnapshotMismatch { ref address, .. } if address == "A1"));
    }

    #[test]
    fn test_bad_color_is_reported() {
        let json = r##"{"cells": [[{"address": "A1", "rangeRowIndex": 0, "rangeColIndex": 0,
                        "sheetCellType": "string", "value": "x", "color": "#12"}]]}"##;
        let err = GridSnapshot::from_json(json).unwrap().into_parts().unwrap_err();
        assert!(matches!(err, HtmlError::Core(sheet_html_core::Error::InvalidColor(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GridSnapshot::from_json("{\"cells\": 3}"),
            Err(HtmlError::Json(_))
        ));
    }
}

//! Joining cell records with merge metadata

use sheet_html_core::{CellRecord, Grid};

use crate::attribute::{AttributeValue, CellAttribute};
use crate::error::{HtmlError, HtmlResult};
use crate::merge::{outside_grid, MergeIndex, MergeRegion};

/// What a grid position turns into when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDisposition<'a> {
    /// Covered by another cell's span; renders nothing
    Suppressed,
    /// An ordinary cell
    Single,
    /// Top-left cell of a merge region; renders with span attributes
    Anchor(&'a MergeRegion),
}

/// A cell record plus the merge region it anchors, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichedCell<'a> {
    pub record: &'a CellRecord,
    pub merge_info: Option<&'a MergeRegion>,
}

impl<'a> EnrichedCell<'a> {
    /// Attach merge info to a record
    pub fn new(record: &'a CellRecord, merge_info: Option<&'a MergeRegion>) -> Self {
        Self { record, merge_info }
    }

    pub fn is_anchor(&self) -> bool {
        self.merge_info.is_some()
    }

    /// Merged but not an anchor, so some other cell's span absorbs it
    pub fn is_covered(&self) -> bool {
        self.record.is_merged && !self.is_anchor()
    }

    /// Emit/suppress decision for this position
    pub fn disposition(&self) -> CellDisposition<'a> {
        match self.merge_info {
            Some(region) => CellDisposition::Anchor(region),
            None if self.record.is_merged => CellDisposition::Suppressed,
            None => CellDisposition::Single,
        }
    }

    /// Typed attribute access
    pub fn attribute(&self, attr: CellAttribute) -> AttributeValue<'a> {
        let record = self.record;
        match attr {
            CellAttribute::Address => AttributeValue::Address(record.address),
            CellAttribute::RangeRowIndex => AttributeValue::Index(record.row_index),
            CellAttribute::HtmlCellType => AttributeValue::ElementKind(record.element_kind()),
            CellAttribute::RangeColIndex => AttributeValue::Index(record.col_index),
            CellAttribute::SheetCellType => AttributeValue::ValueKind(record.value_kind),
            CellAttribute::Value => AttributeValue::Text(&record.display_value),
            CellAttribute::BackgroundColor => AttributeValue::Color(&record.style.background_color),
            CellAttribute::Color => AttributeValue::Color(&record.style.text_color),
            CellAttribute::IsMerged => AttributeValue::Flag(record.is_merged),
            CellAttribute::CellNote => AttributeValue::Text(&record.note),
            CellAttribute::FontStyle => AttributeValue::FontStyle(record.style.font_style),
            CellAttribute::FontWeight => AttributeValue::FontWeight(record.style.font_weight),
            CellAttribute::MergeInfo => AttributeValue::MergeInfo(self.merge_info),
        }
    }

    /// Attribute access by name
    ///
    /// Fails with [`HtmlError::UnrecognizedAttribute`] for any name outside
    /// the vocabulary, whatever the cell holds.
    pub fn attribute_by_name(&self, name: &str) -> HtmlResult<AttributeValue<'a>> {
        Ok(self.attribute(CellAttribute::from_name(name)?))
    }
}

/// The grid with merge info joined in, borrowing the original records
#[derive(Debug, Clone)]
pub struct EnrichedGrid<'a> {
    rows: Vec<Vec<EnrichedCell<'a>>>,
}

impl<'a> EnrichedGrid<'a> {
    /// Attach each region to the record at its anchor address
    ///
    /// Every region must lie entirely inside the grid. The caller's grid
    /// is left untouched.
    pub fn join(grid: &'a Grid, index: &'a MergeIndex) -> HtmlResult<Self> {
        let present = grid.addresses();
        for region in index.iter() {
            if let Some(missing) = outside_grid(&region.range, &present) {
                return Err(HtmlError::MergeOutOfBounds {
                    region: region.range.to_string(),
                    address: missing.to_string(),
                });
            }
        }

        let rows = grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|record| {
                        let cell = EnrichedCell::new(record, index.region(&record.address));
                        let in_region = cell.is_anchor() || index.is_covered(&record.address);
                        if in_region != record.is_merged {
                            log::warn!(
                                "cell {} has isMerged={} but the merge regions say {}",
                                record.address,
                                record.is_merged,
                                in_region
                            );
                        }
                        cell
                    })
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<EnrichedCell<'a>>] {
        &self.rows
    }

    /// Cell at a grid position
    pub fn cell(&self, row: usize, col: usize) -> Option<&EnrichedCell<'a>> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &EnrichedCell<'a>> {
        self.rows.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_html_core::{CellAddress, CellRange, CssColor, FontWeight};

    fn grid_with_merges(range: &str, merges: &[&str]) -> (Grid, MergeIndex) {
        let merges: Vec<CellRange> = merges.iter().map(|m| CellRange::parse(m).unwrap()).collect();
        let grid = Grid::from_range(CellRange::parse(range).unwrap(), |cell| {
            let merged = merges.iter().any(|m| m.contains(&cell.address));
            cell.merged(merged)
        });
        let index = MergeIndex::build(&merges).unwrap();
        (grid, index)
    }

    #[test]
    fn test_join_attaches_only_anchors() {
        let (grid, index) = grid_with_merges("A1:C3", &["A1:B2"]);
        let joined = EnrichedGrid::join(&grid, &index).unwrap();

        let anchor = joined.cell(0, 0).unwrap();
        assert!(anchor.is_anchor());
        assert!(matches!(anchor.disposition(), CellDisposition::Anchor(r) if r.row_span == 2));

        for (r, c) in [(0, 1), (1, 0), (1, 1)] {
            let covered = joined.cell(r, c).unwrap();
            assert!(covered.merge_info.is_none());
            assert_eq!(covered.disposition(), CellDisposition::Suppressed);
        }

        assert_eq!(joined.cell(2, 2).unwrap().disposition(), CellDisposition::Single);
        assert_eq!(joined.iter().filter(|c| c.is_covered()).count(), 3);
    }

    #[test]
    fn test_join_does_not_mutate_grid() {
        let (grid, index) = grid_with_merges("A1:B1", &["A1:B1"]);
        let before = grid.clone();
        let _ = EnrichedGrid::join(&grid, &index).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_region_outside_grid_rejected() {
        let (grid, _) = grid_with_merges("A1:B2", &[]);
        let index = MergeIndex::build(&[CellRange::parse("B2:C2").unwrap()]).unwrap();
        let err = EnrichedGrid::join(&grid, &index).unwrap_err();
        assert!(matches!(err, HtmlError::MergeOutOfBounds { ref address, .. } if address == "C2"));
    }

    #[test]
    fn test_merged_flag_is_authoritative() {
        // Extractor claims B1 is merged although no region covers it
        let grid = Grid::from_range(CellRange::parse("A1:B1").unwrap(), |cell| {
            let merged = cell.col_index == 1;
            cell.merged(merged)
        });
        let index = MergeIndex::build(&[]).unwrap();
        let joined = EnrichedGrid::join(&grid, &index).unwrap();
        assert_eq!(joined.cell(0, 1).unwrap().disposition(), CellDisposition::Suppressed);
    }

    #[test]
    fn test_unflagged_covered_cell_still_renders() {
        // Extractor left isMerged unset on B1 although A1:B1 is merged
        let grid = Grid::from_range(CellRange::parse("A1:B1").unwrap(), |cell| cell);
        let index = MergeIndex::build(&[CellRange::parse("A1:B1").unwrap()]).unwrap();
        let joined = EnrichedGrid::join(&grid, &index).unwrap();

        assert!(joined.cell(0, 0).unwrap().is_anchor());
        let b1 = joined.cell(0, 1).unwrap();
        assert!(!b1.is_covered());
        assert_eq!(b1.disposition(), CellDisposition::Single);
    }

    #[test]
    fn test_attribute_access() {
        let record = sheet_html_core::CellRecord::new(CellAddress::new(3, 1), 1, 0)
            .number("42")
            .with_note("total")
            .with_style(
                sheet_html_core::CellStyle::new()
                    .background(CssColor::RED)
                    .weight(FontWeight::Bold),
            );
        let cell = EnrichedCell::new(&record, None);

        assert_eq!(cell.attribute(CellAttribute::Address).to_string(), "B4");
        assert_eq!(cell.attribute(CellAttribute::HtmlCellType).to_string(), "td");
        assert_eq!(cell.attribute(CellAttribute::SheetCellType).to_string(), "number");
        assert_eq!(cell.attribute(CellAttribute::BackgroundColor).to_string(), "#ff0000");
        assert_eq!(cell.attribute(CellAttribute::FontWeight).to_string(), "bold");
        assert_eq!(
            cell.attribute_by_name("cellNote").unwrap(),
            AttributeValue::Text("total")
        );
        assert_eq!(
            cell.attribute_by_name("mergeInfo").unwrap(),
            AttributeValue::MergeInfo(None)
        );
        assert!(matches!(
            cell.attribute_by_name("textAlign"),
            Err(HtmlError::UnrecognizedAttribute(_))
        ));
    }
}

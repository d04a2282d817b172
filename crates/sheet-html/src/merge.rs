//! Merge region index
//!
//! Turns the merged ranges of a sheet into a lookup keyed by each region's
//! anchor (top-left) address, plus the set of addresses that are covered
//! by a region without being its anchor.

use ahash::{AHashMap, AHashSet};
use sheet_html_core::{CellAddress, CellRange, Grid};

use crate::error::{HtmlError, HtmlResult};

/// One merged block of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRegion {
    /// Footprint on the sheet
    pub range: CellRange,
    /// Top-left address, the only one that renders
    pub anchor: CellAddress,
    /// Rows spanned (>= 1)
    pub row_span: u32,
    /// Columns spanned (>= 1)
    pub col_span: u32,
    /// Every address in the footprint except the anchor, row-major
    pub covered: Vec<CellAddress>,
}

impl MergeRegion {
    /// Describe a merged range
    pub fn from_range(range: CellRange) -> Self {
        let anchor = range.start;
        Self {
            range,
            anchor,
            row_span: range.row_count(),
            col_span: range.col_count() as u32,
            covered: range.cells().filter(|addr| *addr != anchor).collect(),
        }
    }

    /// A 1×1 region; renders with no span attributes
    pub fn is_degenerate(&self) -> bool {
        self.row_span == 1 && self.col_span == 1
    }
}

/// Anchor-keyed lookup of merge regions
#[derive(Debug, Clone, Default)]
pub struct MergeIndex {
    by_anchor: AHashMap<CellAddress, MergeRegion>,
    covered: AHashSet<CellAddress>,
}

impl MergeIndex {
    /// Build the index in one pass over the regions
    ///
    /// Regions must not share any address; an overlap is rejected rather
    /// than resolved, before either region is expanded.
    pub fn build(ranges: &[CellRange]) -> HtmlResult<Self> {
        let mut index = Self::default();

        for (i, range) in ranges.iter().enumerate() {
            if let Some(earlier) = ranges[..i].iter().find(|other| other.overlaps(range)) {
                return Err(HtmlError::OverlappingMerge {
                    region: range.to_string(),
                    address: first_shared(earlier, range).to_string(),
                });
            }

            let region = MergeRegion::from_range(*range);
            if region.is_degenerate() {
                log::debug!("merge region {} spans a single cell", region.range);
            }

            index.covered.extend(region.covered.iter().copied());
            index.by_anchor.insert(region.anchor, region);
        }

        log::debug!(
            "indexed {} merge regions covering {} cells",
            index.by_anchor.len(),
            index.covered.len()
        );

        Ok(index)
    }

    /// Build the index for regions that must lie inside `grid`
    ///
    /// Bounds are checked before any region is expanded, so a range far
    /// larger than the grid fails after at most one step per grid cell.
    pub fn build_for(grid: &Grid, ranges: &[CellRange]) -> HtmlResult<Self> {
        let present = grid.addresses();
        for range in ranges {
            if let Some(missing) = outside_grid(range, &present) {
                return Err(HtmlError::MergeOutOfBounds {
                    region: range.to_string(),
                    address: missing.to_string(),
                });
            }
        }
        Self::build(ranges)
    }

    /// Region anchored at `anchor`, if any
    pub fn region(&self, anchor: &CellAddress) -> Option<&MergeRegion> {
        self.by_anchor.get(anchor)
    }

    pub fn is_anchor(&self, addr: &CellAddress) -> bool {
        self.by_anchor.contains_key(addr)
    }

    /// Check if `addr` lies in a region without being its anchor
    pub fn is_covered(&self, addr: &CellAddress) -> bool {
        self.covered.contains(addr)
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.by_anchor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_anchor.is_empty()
    }

    /// Regions in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &MergeRegion> {
        self.by_anchor.values()
    }

    /// Count of covered (non-anchor) addresses over all regions
    pub fn covered_count(&self) -> usize {
        self.covered.len()
    }
}

/// First address of `range`, row by row, that the grid does not hold
pub(crate) fn outside_grid(
    range: &CellRange,
    present: &AHashSet<CellAddress>,
) -> Option<CellAddress> {
    range.cells().find(|addr| !present.contains(addr))
}

/// Top-left address of the intersection of two overlapping ranges
fn first_shared(a: &CellRange, b: &CellRange) -> CellAddress {
    CellAddress::new(a.start.row.max(b.start.row), a.start.col.max(b.start.col))
}

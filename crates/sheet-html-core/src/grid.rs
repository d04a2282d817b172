//! The rectangular cell grid handed over by an extractor

use ahash::AHashSet;

use crate::address::{CellAddress, CellRange};
use crate::cell::CellRecord;
use crate::error::{Error, Result};

/// A complete, row-major M×N block of cell records
///
/// Construction validates that the grid is rectangular, that every record
/// sits at the position its indices claim, and that addresses are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<CellRecord>>,
}

impl Grid {
    /// Validate and wrap row-major records
    pub fn new(rows: Vec<Vec<CellRecord>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        let mut seen = AHashSet::with_capacity(rows.len() * expected);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::RaggedGrid {
                    row: r,
                    expected,
                    actual: row.len(),
                });
            }

            for (c, cell) in row.iter().enumerate() {
                if cell.row_index as usize != r || cell.col_index as usize != c {
                    return Err(Error::MisplacedCell {
                        address: cell.address.to_string(),
                        claimed_row: cell.row_index,
                        claimed_col: cell.col_index,
                        row: r,
                        col: c,
                    });
                }
                if !seen.insert(cell.address) {
                    return Err(Error::DuplicateAddress(cell.address.to_string()));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Build a grid covering `range`, one record per address
    ///
    /// Each record starts with the right address and indices; `fill` sets
    /// everything else.
    pub fn from_range<F>(range: CellRange, mut fill: F) -> Self
    where
        F: FnMut(CellRecord) -> CellRecord,
    {
        let rows = (0..range.row_count())
            .map(|r| {
                (0..range.col_count())
                    .map(|c| {
                        let address = range.start.offset(r, c);
                        let mut cell = fill(CellRecord::new(address, r, c as u32));
                        // fill may not move the record
                        cell.address = address;
                        cell.row_index = r;
                        cell.col_index = c as u32;
                        cell
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Number of rows (M)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (N)
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.col_count() == 0
    }

    /// Record at a grid position
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellRecord> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Find a record by sheet address (linear scan)
    pub fn find(&self, address: &CellAddress) -> Option<&CellRecord> {
        self.iter().find(|cell| cell.address == *address)
    }

    /// Rows of records
    pub fn rows(&self) -> &[Vec<CellRecord>] {
        &self.rows
    }

    /// All records in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &CellRecord> {
        self.rows.iter().flatten()
    }

    /// All sheet addresses present in the grid
    pub fn addresses(&self) -> AHashSet<CellAddress> {
        self.iter().map(|cell| cell.address).collect()
    }
}

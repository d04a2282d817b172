//! Error types for sheet-html-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the cell grid
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Color string that is neither hex, a CSS name, nor the "none" sentinel
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown font style keyword
    #[error("Invalid font style: {0}")]
    InvalidFontStyle(String),

    /// Unknown font weight keyword or weight outside 1..=1000
    #[error("Invalid font weight: {0}")]
    InvalidFontWeight(String),

    /// A row whose length differs from the first row
    #[error("Grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The same address appears at two grid positions
    #[error("Duplicate cell address {0} in grid")]
    DuplicateAddress(String),

    /// A record's own indices do not match where it sits in the grid
    #[error("Cell {address} claims position ({claimed_row}, {claimed_col}) but sits at ({row}, {col})")]
    MisplacedCell {
        address: String,
        claimed_row: u32,
        claimed_col: u32,
        row: usize,
        col: usize,
    },
}

//! # sheet-html-core
//!
//! Data model for turning a spreadsheet range into an HTML table.
//!
//! This crate provides the types an extractor fills in:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`CellStyle`] - colors and font, the formatting that maps to inline CSS
//! - [`CellRecord`] - everything known about one grid position
//! - [`Grid`] - a validated rectangle of records
//!
//! ## Example
//!
//! ```rust
//! use sheet_html_core::{CellRange, CellStyle, CssColor, Grid};
//!
//! let range = CellRange::parse("A1:B2").unwrap();
//! let grid = Grid::from_range(range, |cell| {
//!     let label = cell.address.to_string();
//!     cell.text(label)
//!         .with_style(CellStyle::new().background(CssColor::WHITE))
//! });
//!
//! assert_eq!(grid.row_count(), 2);
//! assert_eq!(grid.cell(1, 1).unwrap().display_value, "B2");
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod grid;
pub mod style;

pub use address::{CellAddress, CellRange};
pub use cell::{CellRecord, ElementKind, ValueKind};
pub use error::{Error, Result};
pub use grid::Grid;
pub use style::{CellStyle, CssColor, FontStyle, FontWeight};

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: u16 = 16_384;

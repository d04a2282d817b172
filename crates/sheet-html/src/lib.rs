//! # sheet-html
//!
//! Renders a spreadsheet range, including merged cells, as a styled HTML
//! table.
//!
//! The pipeline runs in four steps:
//! 1. [`MergeIndex::build`] keys merge regions by their anchor address
//! 2. [`EnrichedGrid::join`] attaches each region to its anchor cell
//! 3. [`CellRenderer`] emits a `<th>`/`<td>` per position, or nothing for
//!    positions covered by a span
//! 4. [`TableAssembler`] wraps the rows in a table, optionally a page
//!
//! [`HtmlTable`] runs the whole pipeline and [`HtmlWriter`] writes the
//! result to a file.
//!
//! ## Example
//!
//! ```rust
//! use sheet_html::{HtmlTable, HtmlWriteOptions};
//! use sheet_html_core::{CellRange, Grid};
//!
//! let merged = CellRange::parse("A1:B1").unwrap();
//! let grid = Grid::from_range(CellRange::parse("A1:B2").unwrap(), |cell| {
//!     let is_merged = merged.contains(&cell.address);
//!     match cell.row_index {
//!         0 => cell.text("Totals").merged(is_merged),
//!         _ => cell.number("42"),
//!     }
//! });
//!
//! let table = HtmlTable::build(&grid, &[merged], &HtmlWriteOptions::default()).unwrap();
//! assert_eq!(table.cells()[0][1], "");
//! assert!(table.table_html().contains("colspan=\"2\""));
//! ```

mod assemble;
mod attribute;
mod error;
mod escape;
mod join;
mod merge;
mod options;
mod render;
mod snapshot;
mod table;
mod writer;

pub use assemble::TableAssembler;
pub use attribute::{AttributeValue, CellAttribute};
pub use error::{HtmlError, HtmlResult};
pub use escape::escape_html;
pub use join::{CellDisposition, EnrichedCell, EnrichedGrid};
pub use merge::{MergeIndex, MergeRegion};
pub use options::{HtmlWriteOptions, DEFAULT_CELL_BORDER};
pub use render::CellRenderer;
pub use snapshot::{GridSnapshot, SnapshotCell, WeightField};
pub use table::HtmlTable;
pub use writer::HtmlWriter;

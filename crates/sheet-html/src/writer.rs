//! HTML file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sheet_html_core::{CellRange, Grid};

use crate::error::HtmlResult;
use crate::options::HtmlWriteOptions;
use crate::table::HtmlTable;

/// HTML file writer
pub struct HtmlWriter;

impl HtmlWriter {
    /// Render a grid to an HTML file
    ///
    /// The file is only created once rendering has succeeded, so a
    /// rejected grid leaves any existing file untouched.
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        merges: &[CellRange],
        path: P,
        options: &HtmlWriteOptions,
    ) -> HtmlResult<()> {
        let table = HtmlTable::build(grid, merges, options)?;
        let file = File::create(path)?;
        Self::write_table(&table, BufWriter::new(file))
    }

    /// Render a grid to a writer
    ///
    /// Writes a bare `<table>` unless `options.full_page` is set.
    pub fn write<W: Write>(
        grid: &Grid,
        merges: &[CellRange],
        writer: W,
        options: &HtmlWriteOptions,
    ) -> HtmlResult<()> {
        let table = HtmlTable::build(grid, merges, options)?;
        Self::write_table(&table, writer)
    }

    fn write_table<W: Write>(table: &HtmlTable, mut writer: W) -> HtmlResult<()> {
        writer.write_all(table.to_html().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

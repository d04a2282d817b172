//! Whole-grid rendering

use sheet_html_core::{CellRange, Grid};

use crate::assemble::TableAssembler;
use crate::error::HtmlResult;
use crate::join::EnrichedGrid;
use crate::merge::MergeIndex;
use crate::options::HtmlWriteOptions;
use crate::render::CellRenderer;

/// A grid rendered cell by cell, ready to assemble
///
/// `cells()` keeps one slot per grid position, so a suppressed position is
/// an empty string rather than a missing entry.
#[derive(Debug, Clone)]
pub struct HtmlTable {
    cells: Vec<Vec<String>>,
    options: HtmlWriteOptions,
}

impl HtmlTable {
    /// Index the merges, join them to the grid, and render every position
    pub fn build(grid: &Grid, merges: &[CellRange], options: &HtmlWriteOptions) -> HtmlResult<Self> {
        let index = MergeIndex::build_for(grid, merges)?;
        let joined = EnrichedGrid::join(grid, &index)?;
        let renderer = CellRenderer::new(options);

        let cells = joined
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| renderer.render(cell)).collect())
            .collect();

        log::debug!(
            "rendered {}x{} grid with {} merge regions",
            grid.row_count(),
            grid.col_count(),
            index.len()
        );

        Ok(Self {
            cells,
            options: options.clone(),
        })
    }

    /// Rendered markup per position
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cell slots per row
    pub fn col_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Count of positions absorbed by a merge
    pub fn suppressed_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// The `<table>` element
    pub fn table_html(&self) -> String {
        TableAssembler::new(&self.options).table(&self.cells)
    }

    /// The table inside a full HTML document
    pub fn page_html(&self) -> String {
        TableAssembler::new(&self.options).page(&self.cells)
    }

    /// Table or page, depending on `full_page`
    pub fn to_html(&self) -> String {
        if self.options.full_page {
            self.page_html()
        } else {
            self.table_html()
        }
    }
}

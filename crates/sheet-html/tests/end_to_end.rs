//! End-to-end rendering from grid to table, page, and file.

use pretty_assertions::assert_eq;
use sheet_html::{GridSnapshot, HtmlError, HtmlTable, HtmlWriteOptions, HtmlWriter};
use sheet_html_core::{CellAddress, CellRange, CellRecord, CellStyle, CssColor, Grid};

/// 2×2 grid: A1:B1 merged into one red header, a note on the number in B2
fn summary_grid() -> (Grid, Vec<CellRange>) {
    let header = CellRecord::new(CellAddress::new(0, 0), 0, 0)
        .text("Total")
        .with_style(CellStyle::new().background(CssColor::RED))
        .merged(true);
    let covered = CellRecord::new(CellAddress::new(0, 1), 0, 1).merged(true);
    let label = CellRecord::new(CellAddress::new(1, 0), 1, 0).text("Apples");
    let amount = CellRecord::new(CellAddress::new(1, 1), 1, 1)
        .number("42")
        .with_note("total");

    let grid = Grid::new(vec![vec![header, covered], vec![label, amount]]).unwrap();
    (grid, vec![CellRange::parse("A1:B1").unwrap()])
}

const SUMMARY_TABLE: &str = "<table style=\"border-collapse: collapse;\">\n\
<tr><th style=\"background-color:#ff0000;color:inherit;font-style:normal;font-weight:normal;\
text-align:left;border:1px solid black\" colspan=\"2\">Total</th></tr>\n\
<tr><td style=\"background-color:transparent;color:inherit;font-style:normal;font-weight:normal;\
text-align:left;border:1px solid black\">Apples</td>\
<td style=\"background-color:transparent;color:inherit;font-style:normal;font-weight:normal;\
text-align:right;border:1px solid black\" title=\"total\">42</td></tr>\n\
</table>";

#[test]
fn test_summary_table() {
    let (grid, merges) = summary_grid();
    let table = HtmlTable::build(&grid, &merges, &HtmlWriteOptions::default()).unwrap();

    assert_eq!(table.cells()[0][1], "");
    assert_eq!(table.table_html(), SUMMARY_TABLE);
}

#[test]
fn test_summary_page() {
    let (grid, merges) = summary_grid();
    let options = HtmlWriteOptions::default().with_full_page(true);
    let page = HtmlTable::build(&grid, &merges, &options).unwrap().page_html();

    assert_eq!(
        page,
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{}\n</body>\n</html>\n",
            SUMMARY_TABLE
        )
    );
}

#[test]
fn test_write_file() {
    let (grid, merges) = summary_grid();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.html");

    HtmlWriter::write_file(&grid, &merges, &path, &HtmlWriteOptions::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, SUMMARY_TABLE);
}

#[test]
fn test_write_to_buffer_full_page() {
    let (grid, merges) = summary_grid();
    let mut buffer = Vec::new();
    let options = HtmlWriteOptions::default()
        .with_full_page(true)
        .with_page_title("Summary");

    HtmlWriter::write(&grid, &merges, &mut buffer, &options).unwrap();

    let html = String::from_utf8(buffer).unwrap();
    assert!(html.contains("<title>Summary</title>"));
    assert!(html.contains(SUMMARY_TABLE));
}

#[test]
fn test_write_rejects_merge_outside_grid() {
    let (grid, _) = summary_grid();
    let merges = vec![CellRange::parse("B2:B3").unwrap()];
    let err = HtmlWriter::write(&grid, &merges, Vec::new(), &HtmlWriteOptions::default())
        .unwrap_err();
    assert!(matches!(err, HtmlError::MergeOutOfBounds { .. }));
}

#[test]
fn test_rejected_grid_keeps_existing_file() {
    let (grid, _) = summary_grid();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    std::fs::write(&path, "<p>previous report</p>").unwrap();

    let merges = vec![CellRange::parse("B2:C2").unwrap()];
    let err = HtmlWriter::write_file(&grid, &merges, &path, &HtmlWriteOptions::default())
        .unwrap_err();

    assert!(matches!(err, HtmlError::MergeOutOfBounds { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>previous report</p>");
}

#[test]
fn test_snapshot_file_to_html() {
    let json = r#"{
        "cells": [
            [{"address": "A1", "rangeRowIndex": 0, "htmlCellType": "th", "rangeColIndex": 0,
              "sheetCellType": "string", "value": "Q1", "isMerged": true},
             {"address": "B1", "rangeRowIndex": 0, "htmlCellType": "th", "rangeColIndex": 1,
              "sheetCellType": "string", "value": "", "isMerged": true}],
            [{"address": "A2", "rangeRowIndex": 1, "htmlCellType": "td", "rangeColIndex": 0,
              "sheetCellType": "string", "value": "R&D", "isMerged": true},
             {"address": "B2", "rangeRowIndex": 1, "htmlCellType": "td", "rangeColIndex": 1,
              "sheetCellType": "number", "value": "7", "isMerged": false}],
            [{"address": "A3", "rangeRowIndex": 2, "htmlCellType": "td", "rangeColIndex": 0,
              "sheetCellType": "string", "value": "", "isMerged": true},
             {"address": "B3", "rangeRowIndex": 2, "htmlCellType": "td", "rangeColIndex": 1,
              "sheetCellType": "boolean", "value": "TRUE", "isMerged": false}]
        ],
        "merges": ["A1:B1", "A2:A3"]
    }"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, json).unwrap();

    let (grid, merges) = GridSnapshot::read_file(&path).unwrap().into_parts().unwrap();
    let table = HtmlTable::build(&grid, &merges, &HtmlWriteOptions::default()).unwrap();

    assert_eq!(table.suppressed_count(), 2);
    assert!(table.cells()[0][0].contains(" colspan=\"2\">Q1</th>"));
    assert!(table.cells()[1][0].contains(" rowspan=\"2\">R&amp;D</td>"));
    assert_eq!(table.cells()[2][0], "");
    assert!(table.cells()[2][1].contains("text-align:right"));
}

#[test]
fn test_unknown_attribute_fails_for_every_cell() {
    use sheet_html::{EnrichedGrid, MergeIndex};

    let (grid, merges) = summary_grid();
    let index = MergeIndex::build(&merges).unwrap();
    let joined = EnrichedGrid::join(&grid, &index).unwrap();

    for cell in joined.iter() {
        assert!(cell.attribute_by_name("value").is_ok());
        assert!(matches!(
            cell.attribute_by_name("textAlign"),
            Err(HtmlError::UnrecognizedAttribute(ref name)) if name == "textAlign"
        ));
    }
    assert_eq!(
        joined.cell(0, 0).unwrap().attribute_by_name("mergeInfo").unwrap().to_string(),
        "A1:B1 (rows: 1, cols: 2)"
    );
}

// src/sheet.rs
//
// Spreadsheet catalogs via calamine. Only the first sheet is read; its
// first used row is the header.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};

use crate::catalog::{Catalog, Row};
use crate::error::LoadError;

pub fn read_path(path: &Path) -> Result<Catalog, LoadError> {
    let workbook = open_workbook_auto(path)?;
    first_sheet(workbook)
}

/// Decode an in-memory workbook (e.g. a file dropped onto the window).
pub fn read_bytes(bytes: &[u8]) -> Result<Catalog, LoadError> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    first_sheet(workbook)
}

fn first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Catalog, LoadError> {
    let range = workbook.worksheet_range_at(0).ok_or(LoadError::NoSheets)??;

    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return Ok(Catalog::default());
    };
    let headers: Vec<String> = header_cells.iter().map(|c| cell_text(c).trim().to_string()).collect();

    let mut records = Vec::new();
    for cells in rows {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let mut row = Row::new();
        for (h, cell) in headers.iter().zip(cells) {
            if h.is_empty() || matches!(cell, Data::Empty) {
                continue;
            }
            row.set(h.as_str(), cell_text(cell).trim());
        }
        records.push(row);
    }

    logd!("Sheet: {} header(s), {} data row(s)", headers.len(), records.len());
    Ok(Catalog::from_rows(headers, records))
}

/// Cell as the operator typed it: whole numbers lose their `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn format_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_print_as_integers() {
        assert_eq!(cell_text(&Data::Float(100.0)), "100");
        assert_eq!(cell_text(&Data::Float(99.5)), "99.5");
        assert_eq!(cell_text(&Data::Int(8901234)), "8901234");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn garbage_bytes_are_a_load_error() {
        assert!(read_bytes(b"definitely not a workbook").is_err());
    }
}

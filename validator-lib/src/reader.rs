//! Decoding of spreadsheet files into [`Document`]s with `calamine`.
//!
//! The validator itself never touches files; this module is the thin adapter
//! that turns a workbook into typed cell values.

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use chrono::NaiveDate;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::cell::{CellValue, Row};
use crate::document::{Document, Sheet};
use crate::error::ReadError;
use crate::utils::excel_serial_to_date;

const SUPPORTED_EXTENSIONS: &[&str] = &["ods", "xlsx", "xlsm", "xlsb", "xls"];

/// Largest float converted to an integer without losing precision
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Read every sheet of a workbook file
pub fn read_document(path: impl AsRef<Path>) -> Result<Document, ReadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ReadError::UnsupportedFormat(format!(".{extension}")));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| ReadError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    return read_sheets(&mut workbook);
}

/// Read every sheet of a workbook held in memory. The format is detected
/// from the content.
pub fn read_document_from_bytes(bytes: &[u8]) -> Result<Document, ReadError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| ReadError::Open {
            path: "<memory>".to_string(),
            message: e.to_string(),
        })?;
    return read_sheets(&mut workbook);
}

fn read_sheets<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Document, ReadError> {
    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ReadError::Sheet {
                sheet: name.clone(),
                message: e.to_string(),
            })?;
        sheets.push(Sheet::new(name, rows_from_range(&range)));
    }
    Ok(Document::new(sheets))
}

/// Convert a cell range into rows addressed from cell A1.
///
/// `calamine` ranges start at the first used cell, so leading rows and
/// columns are restored. Rows with no content become zero-cell rows.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let (start_row, start_column) = range
        .start()
        .map(|(row, column)| (row as usize, column as usize))
        .unwrap_or_default();

    let mut rows: Vec<Row> = vec![Vec::new(); start_row];
    for cells in range.rows() {
        let mut row: Row = vec![CellValue::Empty; start_column];
        row.extend(cells.iter().map(convert_cell));
        if row.iter().all(CellValue::is_blank) {
            row.clear();
        }
        rows.push(row);
    }
    rows
}

/// Convert one decoded cell to a [`CellValue`]
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        // Whole numbers lose their fractional zeros on the way in
        Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => CellValue::Int(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match excel_serial_to_date(dt.as_f64()) {
            Some(date) => CellValue::Date(date),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_date(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date = value.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

// Test utilities available to both unit and integration tests
// Only compiled when testing

use chrono::NaiveDate;

use crate::cell::{CellValue, Row};
use crate::document::{Document, Sheet};
use crate::schema::{DocumentSpec, SheetSpec};

/// The built-in schema
pub fn ers_spec() -> DocumentSpec {
    DocumentSpec::ers_other_v3().unwrap()
}

pub fn ers_sheet_spec(name: &str) -> SheetSpec {
    ers_spec().sheet(name).cloned().unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> CellValue {
    CellValue::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

/// A header row holding the exact expected titles of `spec`
pub fn header_row(spec: &SheetSpec) -> Row {
    spec.columns().map(|column| CellValue::from(column.header.as_str())).collect()
}

/// Full sheet content: title rows, header row, `data` and a footer row
pub fn sheet_rows(spec: &SheetSpec, data: Vec<Row>) -> Vec<Row> {
    let mut rows: Vec<Row> = vec![Vec::new(); spec.header_row_index];
    rows[0] = vec![CellValue::from(spec.name.as_str())];
    rows.push(header_row(spec));
    rows.extend(data);
    rows.push(vec![CellValue::from("End of sheet")]);
    rows
}

/// A document holding every sheet of `spec` in order, each with its data
/// from `data` (sheets not listed have no data rows)
pub fn document_with(spec: &DocumentSpec, data: Vec<(&str, Vec<Row>)>) -> Document {
    let mut data = data;
    let sheets = spec
        .sheets()
        .iter()
        .map(|sheet_spec| {
            let rows = match data.iter().position(|(name, _)| *name == sheet_spec.name) {
                Some(index) => data.remove(index).1,
                None => Vec::new(),
            };
            Sheet::new(sheet_spec.name.clone(), sheet_rows(sheet_spec, rows))
        })
        .collect();
    Document::new(sheets)
}

/// A fully valid grants row
pub fn valid_grants_row() -> Row {
    vec![
        date(2023, 4, 5),
        CellValue::Int(12),
        CellValue::Float(10.1234),
        CellValue::Float(100.25),
    ]
}

/// A fully valid options row for an exercised option on listed shares
pub fn valid_options_row() -> Row {
    let mut row: Row = vec![CellValue::Empty; 42];
    row[0] = date(2023, 4, 5);
    row[1] = "no".into();
    row[3] = "Ann".into();
    row[5] = "Smith".into();
    row[6] = "AB123456C".into();
    row[7] = "123/AB456".into();
    row[8] = date(2020, 1, 31);
    row[9] = "Grantor Ltd".into();
    row[10] = "1 High Street".into();
    row[16] = CellValue::Int(1234567);
    row[19] = "Issuer plc".into();
    row[20] = "2 Market Square".into();
    row[28] = "456/CD789".into();
    row[29] = "yes".into();
    row[30] = CellValue::Float(100.5);
    row[31] = CellValue::Float(1.25);
    row[32] = CellValue::Float(2.5);
    row[33] = "yes".into();
    row[36] = CellValue::Float(3.5);
    row[39] = "no".into();
    row[40] = "yes".into();
    row[41] = "no".into();
    row
}

use log::{debug, warn};
use std::collections::HashSet;

use crate::cell::{CellValue, Row};
use crate::checker::{CheckOutcome, check_data_type};
use crate::diagnostic::{Diagnostic, Severity, ValidationResult};
use crate::schema::{ColumnSpec, SheetSpec};
use crate::utils::{column_label, normalize_string};

/// 1-based spreadsheet row of the `row_index`-th data row
pub fn data_row_number(spec: &SheetSpec, row_index: usize) -> usize {
    row_index + spec.header_row_index + 2
}

/// Validate one sheet: header row, row widths and every data cell.
///
/// Never fails: every problem becomes a diagnostic in the result.
pub fn validate_sheet(spec: &SheetSpec, rows: &[Row]) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(header_row) = rows.get(spec.header_row_index) else {
        result.add_error(
            &spec.name,
            format!(
                "The header row (row {}) is missing, the sheet has only {} rows!",
                spec.header_row_index + 1,
                rows.len()
            ),
        );
        return result;
    };

    let skipped = validate_header(spec, header_row, &mut result);

    // Footer rows are counted from the last row with content
    let first = spec.header_row_index + 1;
    let filled = rows.len() - trailing_blank_rows(rows);
    let last = filled.saturating_sub(spec.footer_rows);
    let data_rows = rows.get(first..last).unwrap_or_default();

    for (row_index, row) in data_rows.iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        let row_number = data_row_number(spec, row_index);

        if row.len() != spec.column_count() {
            result.push(Diagnostic::row(
                &spec.name,
                row_number,
                Severity::Error,
                format!(
                    "The row has {} columns but the sheet requires {} columns!",
                    row.len(),
                    spec.column_count()
                ),
            ));
            continue;
        }

        for column in spec.columns() {
            if skipped.contains(&column.position) {
                continue;
            }
            let outcome = check_cell(spec, column, row);
            result.add_outcome(&spec.name, row_number, column.position, outcome);
        }
    }

    debug!(
        "Validated sheet {}: {} errors, {} warnings",
        spec.name,
        result.errors.len(),
        result.warnings.len()
    );
    result
}

fn trailing_blank_rows(rows: &[Row]) -> usize {
    rows.iter()
        .rev()
        .take_while(|row| row.iter().all(CellValue::is_blank))
        .count()
}

/// Compare the header row with the expected titles. Returns the positions
/// whose header failed, which are excluded from cell validation.
///
/// Titles must match exactly apart from surrounding whitespace. Messages
/// show the title on one line.
fn validate_header(
    spec: &SheetSpec,
    header_row: &[CellValue],
    result: &mut ValidationResult,
) -> HashSet<usize> {
    let found: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    let header_row_number = spec.header_row_index + 1;
    let mut skipped = HashSet::new();

    for column in spec.columns() {
        let expected = column.header.trim();
        if found.get(column.position).map(String::as_str) == Some(expected) {
            continue;
        }

        let title = normalize_string(expected);
        let message = match found.iter().position(|header| header == expected) {
            Some(actual) => format!(
                "The column ({}) should be at column {} but was found at column {}!",
                title,
                column_label(column.position),
                column_label(actual)
            ),
            None => format!("Could not find the column ({title}) in the header row!"),
        };
        result.push(Diagnostic::cell(
            &spec.name,
            header_row_number,
            column.position,
            Severity::Error,
            message,
        ));
        skipped.insert(column.position);
    }
    skipped
}

fn check_cell(spec: &SheetSpec, column: &ColumnSpec, row: &[CellValue]) -> CheckOutcome {
    let Some(rule) = &column.rule else {
        return check_data_type(
            &row[column.position],
            column.data_type,
            column.warn_if_blank,
            column.required,
        );
    };
    match rule.evaluate(column.position, row, column) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(
                "Rule for column {} of sheet {} could not be evaluated: {}",
                column.position, spec.name, e
            );
            CheckOutcome::error(format!("General error: {e}"))
        }
    }
}

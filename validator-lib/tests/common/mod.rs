use validator_lib::{Diagnostic, ValidationResult};

// Re-export shared test utilities from src/test_utils.rs
// These are the core functions used by most tests
#[allow(unused_imports)]
pub use validator_lib::test_utils::{
    date, document_with, ers_sheet_spec, ers_spec, header_row, sheet_rows, valid_grants_row,
    valid_options_row,
};

#[allow(dead_code)]
pub const GRANTS: &str = "Other_Grants_V3";
#[allow(dead_code)]
pub const OPTIONS: &str = "Other_Options_V3";
#[allow(dead_code)]
pub const ACQUISITION: &str = "Other_Acquisition_V3";
#[allow(dead_code)]
pub const RESTRICTED: &str = "Other_RestrictedSecurities_V3";

/// Errors reported for one cell, located by row number and column label
#[allow(dead_code)]
pub fn cell_errors<'a>(result: &'a ValidationResult, row: usize, column: &str) -> Vec<&'a Diagnostic> {
    result
        .errors
        .iter()
        .filter(|d| d.row == Some(row) && d.column.as_deref() == Some(column))
        .collect()
}

/// Warnings reported for one cell
#[allow(dead_code)]
pub fn cell_warnings<'a>(result: &'a ValidationResult, row: usize, column: &str) -> Vec<&'a Diagnostic> {
    result
        .warnings
        .iter()
        .filter(|d| d.row == Some(row) && d.column.as_deref() == Some(column))
        .collect()
}

/// All diagnostic lines, errors first
#[allow(dead_code)]
pub fn lines(result: &ValidationResult) -> Vec<String> {
    result.diagnostics().map(|d| d.to_string()).collect()
}

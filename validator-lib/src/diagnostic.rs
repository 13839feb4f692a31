use serde::Serialize;
use std::fmt;

use crate::checker::CheckOutcome;
use crate::utils::column_label;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub sheet_name: String,
    /// 1-based question number on the business form
    pub entry: Option<usize>,
    /// 1-based spreadsheet row
    pub row: Option<usize>,
    /// Spreadsheet column label ("A", "B", ..., "AA", ...)
    pub column: Option<String>,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    /// A finding about the sheet as a whole (missing, misplaced, bad header)
    pub fn sheet(sheet_name: &str, severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            sheet_name: sheet_name.to_string(),
            entry: None,
            row: None,
            column: None,
            message: message.into(),
            severity,
        }
    }

    /// A finding about a whole data row
    pub fn row(sheet_name: &str, row: usize, severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            row: Some(row),
            ..Diagnostic::sheet(sheet_name, severity, message)
        }
    }

    /// A finding about one cell, located by its zero-based column position
    pub fn cell(
        sheet_name: &str,
        row: usize,
        position: usize,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            entry: Some(position + 1),
            row: Some(row),
            column: Some(column_label(position)),
            message: message.into(),
            severity,
            sheet_name: sheet_name.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "Warning",
        };
        write!(f, "{prefix}: Sheet Name: {}", self.sheet_name)?;
        if let Some(row) = self.row {
            write!(f, ", Row: {row}")?;
        }
        if let Some(column) = &self.column {
            write!(f, ", Column: {column}")?;
        }
        write!(f, ", Message: {}", self.message)
    }
}

/// Errors and warnings found in one document, in sheet, row, column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn add_error(&mut self, sheet_name: &str, message: impl Into<String>) {
        self.push(Diagnostic::sheet(sheet_name, Severity::Error, message));
    }

    /// Record the outcome of checking one cell
    pub fn add_outcome(&mut self, sheet_name: &str, row: usize, position: usize, outcome: CheckOutcome) {
        if let Some(message) = outcome.error {
            self.push(Diagnostic::cell(sheet_name, row, position, Severity::Error, message));
        }
        if let Some(message) = outcome.warning {
            self.push(Diagnostic::cell(sheet_name, row, position, Severity::Warning, message));
        }
    }

    pub fn extend(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors first, then warnings
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::cell::Row;
use crate::diagnostic::ValidationResult;
use crate::reader::read_document;
use crate::report::format_report;
use crate::schema::DocumentSpec;
use crate::sheet::validate_sheet;
use crate::utils::write_error_to_log;

/// One decoded sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Sheet {
            name: name.into(),
            rows,
        }
    }
}

/// A decoded workbook: sheets in the order they appear in the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sheets: Vec<Sheet>,
}

impl Document {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Document { sheets }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    /// Position and content of the first sheet called `name`
    pub fn find(&self, name: &str) -> Option<(usize, &Sheet)> {
        self.sheets.iter().enumerate().find(|(_, sheet)| sheet.name == name)
    }
}

/// Validate a decoded document against a schema.
///
/// Required sheets are checked in schema order. A missing sheet is one error
/// and nothing else is checked for it; a sheet at the wrong position is one
/// error and its content is still validated.
pub fn validate_document(spec: &DocumentSpec, document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();

    for sheet_spec in spec.sheets() {
        let Some((index, sheet)) = document.find(&sheet_spec.name) else {
            result.add_error(
                &sheet_spec.name,
                format!("The sheet \"{}\" is missing!", sheet_spec.name),
            );
            continue;
        };
        if index != sheet_spec.expected_index {
            result.add_error(
                &sheet_spec.name,
                format!(
                    "The sheet \"{}\" is not at the required index {}!",
                    sheet_spec.name,
                    sheet_spec.expected_index + 1
                ),
            );
        }
        result.extend(validate_sheet(sheet_spec, &sheet.rows));
    }

    debug!(
        "Validated document against {} {}: {} errors, {} warnings",
        spec.name,
        spec.version,
        result.errors.len(),
        result.warnings.len()
    );
    result
}

/// Validates submissions against one schema.
///
/// Holds no per-run state, so a single instance can validate any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    spec: DocumentSpec,
    log_errors: bool,
}

pub struct SubmissionValidatorBuilder {
    spec: Option<DocumentSpec>,
    log_errors: bool,
}

impl Default for SubmissionValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionValidatorBuilder {
    pub fn new() -> Self {
        SubmissionValidatorBuilder {
            spec: None,
            log_errors: false,
        }
    }

    /// Use `spec` instead of the built-in schema
    pub fn schema(mut self, spec: DocumentSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Append a report to the errors log whenever a file fails validation
    pub fn log_errors(mut self, log_errors: bool) -> Self {
        self.log_errors = log_errors;
        self
    }

    pub fn build(self) -> Result<SubmissionValidator> {
        let spec = match self.spec {
            Some(spec) => spec,
            None => DocumentSpec::ers_other_v3()?,
        };
        Ok(SubmissionValidator {
            spec,
            log_errors: self.log_errors,
        })
    }
}

impl SubmissionValidator {
    pub fn builder() -> SubmissionValidatorBuilder {
        SubmissionValidatorBuilder::new()
    }

    pub fn spec(&self) -> &DocumentSpec {
        &self.spec
    }

    pub fn validate(&self, document: &Document) -> ValidationResult {
        validate_document(&self.spec, document)
    }

    /// Decode a spreadsheet file and validate it
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<ValidationResult> {
        let path = path.as_ref();
        let document = read_document(path)?;
        let result = self.validate(&document);

        if self.log_errors && !result.is_valid() {
            let report = format_report(&path.display().to_string(), &result);
            write_error_to_log("Submission Validation Report", &report);
        }
        Ok(result)
    }
}

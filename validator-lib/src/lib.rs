#![allow(clippy::needless_return)]

pub mod cell;
pub mod checker;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod reader;
pub mod report;
pub mod rules;
pub mod schema;
pub mod sheet;
pub mod types;
pub mod utils;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use cell::{CellValue, Row};
pub use checker::{CheckOutcome, check_data_type};
pub use diagnostic::{Diagnostic, Severity, ValidationResult};
pub use document::{Document, Sheet, SubmissionValidator, SubmissionValidatorBuilder, validate_document};
pub use error::{ReadError, RuleError, SchemaError};
pub use rules::{Check, Gate, Rule};
pub use schema::{ColumnSpec, DocumentSpec, SheetSpec};
pub use sheet::validate_sheet;
pub use types::{DataType, PrimitiveKind};

pub const ERRORS_LOG_FILE: &str = "errors.log";

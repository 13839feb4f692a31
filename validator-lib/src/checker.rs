use crate::cell::CellValue;
use crate::types::{DataType, KindCheck, PrimitiveKind};

/// Error and warning text produced for a single cell.
///
/// Either side may be empty. Multiple problems found by one rule are joined
/// into the same message so one cell never yields more than one error and
/// one warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub error: Option<String>,
    pub warning: Option<String>,
}

impl CheckOutcome {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        CheckOutcome {
            error: Some(message.into()),
            warning: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        CheckOutcome {
            error: None,
            warning: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.warning.is_none()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Add another error message to this outcome
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = Some(match self.error.take() {
            Some(existing) => format!("{existing} {message}"),
            None => message,
        });
    }
}

pub const EMPTY_WARNING: &str = "The data was empty.";
pub const REQUIRED_ERROR: &str = "The data is required but the cell was empty!";

/// Validate one raw cell against a data type and a blank policy.
///
/// Blank handling runs first: a required blank cell is an error (never just a
/// warning), a blank cell flagged `warn_if_blank` is a warning, any other blank
/// cell is accepted. Non-blank values are then checked against the kind.
pub fn check_data_type(
    value: &CellValue,
    data_type: DataType,
    warn_if_blank: bool,
    required: bool,
) -> CheckOutcome {
    if value.is_blank() {
        if required {
            return CheckOutcome::error(REQUIRED_ERROR);
        }
        if warn_if_blank {
            return CheckOutcome::warning(EMPTY_WARNING);
        }
        return CheckOutcome::ok();
    }

    check_kind(value, data_type.kind(), data_type.name())
}

/// Check a non-blank value against a primitive kind, naming the type as
/// `type_label` in any message.
pub fn check_kind(value: &CellValue, kind: PrimitiveKind, type_label: &str) -> CheckOutcome {
    match kind.classify(value) {
        KindCheck::Valid => CheckOutcome::ok(),
        KindCheck::TypeMismatch => CheckOutcome::error(format!(
            "The data ({}) is of type ({}) but the expected type is ({})!",
            value.repr(),
            value.type_name(),
            type_label
        )),
        KindCheck::WrongDateFormat { format } => CheckOutcome::error(format!(
            "The data ({}) looks like a date written as ({}) but the expected type is ({}), \
             a date cell in the format yyyy-mm-dd!",
            value.repr(),
            format,
            type_label
        )),
        KindCheck::TooLong { length, max } => CheckOutcome::error(format!(
            "The data ({}) is too long. It has a length of ({}) but the type ({}) allows at most ({})!",
            value.repr(),
            length,
            type_label,
            max
        )),
        KindCheck::BeforeDecimalTooLong { length, max } => CheckOutcome::error(format!(
            "The data ({}) has too many digits before the decimal. It has a length of ({}) \
             but the type ({}) allows at most ({})!",
            value.repr(),
            length,
            type_label,
            max
        )),
        KindCheck::AfterDecimalTooLong { length, max } => CheckOutcome::error(format!(
            "The data ({}) has too many digits after the decimal. It has a length of ({}) \
             but the type ({}) allows at most ({})!",
            value.repr(),
            length,
            type_label,
            max
        )),
        KindCheck::PossibleIssue => CheckOutcome::warning(format!(
            "Possible issue: the data ({}) is a whole number but the type ({}) expects a decimal. \
             Check that no decimal places were lost (e.g. 100.00).",
            value.repr(),
            type_label
        )),
    }
}

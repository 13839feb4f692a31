//! Cross-field conditional rules.
//!
//! A rule is plain data stored on a [`ColumnSpec`]: an optional [`Gate`] that
//! decides from other cells of the same row whether the column applies, and a
//! [`Check`] run on the cell when it does. Evaluation is a pure function of
//! (column index, row, column spec) and never touches the row.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::checker::{CheckOutcome, check_data_type, check_kind};
use crate::error::RuleError;
use crate::schema::ColumnSpec;
use crate::types::PrimitiveKind;

/// Decides whether a column applies to a row, based on other cells of the row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gate {
    /// Applies when any column in `[from, index)` was answered "yes"
    PreviousYes { from: usize },
    /// Applies when the column immediately before was answered "yes"
    Predecessor,
    /// Applies when `column` was answered "yes"
    ColumnYes { column: usize },
    /// Applies when `column` was answered "no"
    ColumnNo { column: usize },
    /// Applies when the integer choice in `column` is one of `codes`
    Discriminator { column: usize, codes: Vec<i64> },
}

/// What is checked on a cell once its gate (if any) is open
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Plain data type check
    #[default]
    Type,
    /// Answer must be "yes" or "no"
    YesNo,
    /// Integer within an inclusive range
    Range { min: i64, max: i64 },
    /// One of a few fixed words, compared trimmed and case-insensitively
    OneOf { tokens: Vec<String> },
    /// Either a number of at most `digits` digits or text of at most
    /// `max_length` characters without spaces
    CompanyReference { digits: usize, max_length: usize },
    NationalInsurance,
    PayeReference,
    NoSpaces,
}

/// A conditional rule attached to a column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<Gate>,
    #[serde(default)]
    pub check: Check,
}

enum GateState {
    Open,
    Closed(String),
}

/// Index of the most recent "yes" among columns `[from, to)` of the row
pub fn most_recent_yes(row: &[CellValue], from: usize, to: usize) -> Option<usize> {
    let to = to.min(row.len());
    (from..to).rev().find(|&index| row[index].is_yes())
}

fn cell(row: &[CellValue], column: usize) -> Result<&CellValue, RuleError> {
    row.get(column).ok_or(RuleError::MissingColumn {
        column,
        width: row.len(),
    })
}

impl Gate {
    /// The earliest column this gate reads
    pub fn referenced_column(&self, index: usize) -> Option<usize> {
        match self {
            Gate::PreviousYes { from } => Some(*from),
            Gate::Predecessor => index.checked_sub(1),
            Gate::ColumnYes { column }
            | Gate::ColumnNo { column }
            | Gate::Discriminator { column, .. } => Some(*column),
        }
    }

    fn evaluate(&self, index: usize, row: &[CellValue]) -> Result<GateState, RuleError> {
        match self {
            Gate::PreviousYes { from } => {
                if most_recent_yes(row, *from, index).is_some() {
                    return Ok(GateState::Open);
                }
                Ok(GateState::Closed(format!(
                    "The value in this column should be blank because none of the switch \
                     questions {} to {} was answered \"yes\"!",
                    from + 1,
                    index
                )))
            }
            Gate::Predecessor => {
                let previous = index
                    .checked_sub(1)
                    .ok_or(RuleError::NoPredecessor { column: index })?;
                if cell(row, previous)?.is_yes() {
                    return Ok(GateState::Open);
                }
                Ok(GateState::Closed(
                    "The value should be blank since the previous column was not answered \"yes\"!"
                        .to_string(),
                ))
            }
            Gate::ColumnYes { column } => {
                if cell(row, *column)?.is_yes() {
                    return Ok(GateState::Open);
                }
                Ok(GateState::Closed(format!(
                    "Because \"{}\" was not answered \"yes\" this entry should be blank!",
                    column + 1
                )))
            }
            Gate::ColumnNo { column } => {
                if cell(row, *column)?.is_no() {
                    return Ok(GateState::Open);
                }
                Ok(GateState::Closed(format!(
                    "Because \"{}\" was not answered \"no\" this entry should be blank!",
                    column + 1
                )))
            }
            Gate::Discriminator { column, codes } => {
                let choice = cell(row, *column)?.as_integer();
                if choice.map(|code| codes.contains(&code)).unwrap_or(false) {
                    return Ok(GateState::Open);
                }
                let expected = codes
                    .iter()
                    .map(|code| format!("\"{code}\""))
                    .collect::<Vec<_>>()
                    .join(" or ");
                Ok(GateState::Closed(format!(
                    "This entry should be left blank because the answer to \"{}\" selected a \
                     different branch (this entry applies to {})!",
                    column + 1,
                    expected
                )))
            }
        }
    }
}

impl Check {
    /// Whitespace error for an accepted answer with surrounding whitespace.
    fn padded_answer(&self, value: &CellValue) -> Option<String> {
        let text = value.as_text()?;
        if text.trim() == text {
            return None;
        }
        match self {
            Check::YesNo if value.is_yes() || value.is_no() => Some(format!(
                "The cell contains '{text}', which has additional whitespace around \"yes\"/\"no\"!"
            )),
            Check::OneOf { tokens } => {
                let normalized = text.trim().to_lowercase();
                if tokens.iter().any(|token| token.to_lowercase() == normalized) {
                    return Some(
                        "The contents of this entry should contain no additional whitespace!".to_string(),
                    );
                }
                None
            }
            _ => None,
        }
    }

    fn apply(&self, value: &CellValue, spec: &ColumnSpec, required: bool) -> CheckOutcome {
        if let Check::CompanyReference { digits, max_length } = self {
            return company_reference(value, spec, required, *digits, *max_length);
        }

        // a padded answer would otherwise be reported as too long
        if let Some(message) = self.padded_answer(value) {
            return CheckOutcome::error(message);
        }

        let mut outcome = check_data_type(value, spec.data_type, spec.warn_if_blank, required);
        if outcome.has_error() || value.is_blank() {
            return outcome;
        }

        match self {
            Check::Type | Check::CompanyReference { .. } => {}
            Check::YesNo => {
                if let Some(text) = value.as_text() {
                    if text == "yes" || text == "no" {
                        // exact answer
                    } else if text.trim() != text {
                        outcome.push_error(format!(
                            "The cell contains '{text}', which has additional whitespace around \"yes\"/\"no\"!"
                        ));
                    } else if value.is_yes() || value.is_no() {
                        outcome.warning = Some(format!(
                            "The cell contains {text}, but the value is not all lower case!"
                        ));
                    } else {
                        outcome.push_error(format!(
                            "The cell contains {text}, but the value must be \"yes\" or \"no\"!"
                        ));
                    }
                }
            }
            Check::Range { min, max } => {
                if let Some(number) = value.as_integer() {
                    if number < *min || number > *max {
                        outcome.push_error(format!(
                            "The entry must be a number greater than or equal to {min} and less \
                             than or equal to {max}! Provided value was {number}"
                        ));
                    }
                }
            }
            Check::OneOf { tokens } => {
                if let Some(text) = value.as_text() {
                    let normalized = text.trim().to_lowercase();
                    if !tokens.iter().any(|token| token.to_lowercase() == normalized) {
                        let expected = tokens
                            .iter()
                            .map(|token| format!("\"{token}\""))
                            .collect::<Vec<_>>()
                            .join(" or ");
                        outcome.push_error(format!(
                            "The contents of this entry should be {expected}!"
                        ));
                    }
                }
            }
            Check::NationalInsurance => {
                if value.as_text().map(|text| text.contains(' ')).unwrap_or(false) {
                    outcome.push_error("The National Insurance Number contains a space character!");
                }
            }
            Check::PayeReference => {
                if let Some(text) = value.as_text() {
                    let prefix: Vec<char> = text.chars().take(4).collect();
                    if prefix.len() < 3 || !prefix[..3].iter().all(|c| c.is_ascii_digit()) {
                        outcome.push_error(format!(
                            "The PAYE reference does not start with three digits. Read value ({text})!"
                        ));
                    }
                    if prefix.get(3) != Some(&'/') {
                        outcome.push_error(format!(
                            "The PAYE reference is missing a forward slash after the first three \
                             digits. Read value ({text})!"
                        ));
                    }
                }
            }
            Check::NoSpaces => {
                if value.as_text().map(|text| text.contains(' ')).unwrap_or(false) {
                    outcome.push_error("The value should not contain spaces!");
                }
            }
        }
        outcome
    }
}

/// Company references arrive either as numbers (the decoder dropped the text
/// formatting) or as text, so the check branches on the runtime type.
fn company_reference(
    value: &CellValue,
    spec: &ColumnSpec,
    required: bool,
    digits: usize,
    max_length: usize,
) -> CheckOutcome {
    if value.is_blank() {
        return check_data_type(value, spec.data_type, spec.warn_if_blank, required);
    }
    match value {
        CellValue::Int(_) => check_kind(
            value,
            PrimitiveKind::BoundedInteger {
                max_digits: digits,
                lenient: false,
            },
            &format!("number of up to {digits} digits"),
        ),
        CellValue::Text(text) => {
            let mut outcome = check_kind(
                value,
                PrimitiveKind::BoundedString { max_length },
                &format!("text of up to {max_length} characters"),
            );
            if text.contains(' ') {
                outcome.push_error("The reference should not contain spaces!");
            }
            outcome
        }
        _ => CheckOutcome::error(format!(
            "The data ({}) is of type ({}) but a company reference must be a number or text!",
            value.repr(),
            value.type_name()
        )),
    }
}

impl Rule {
    pub fn new(gate: Option<Gate>, check: Check) -> Self {
        Rule { gate, check }
    }

    pub fn check(check: Check) -> Self {
        Rule { gate: None, check }
    }

    pub fn gated(gate: Gate, check: Check) -> Self {
        Rule {
            gate: Some(gate),
            check,
        }
    }

    /// Evaluate the rule for the cell at `index`.
    ///
    /// A closed gate means the cell must be blank; an open gate makes the cell
    /// required. Without a gate the column's own `required` flag applies.
    pub fn evaluate(
        &self,
        index: usize,
        row: &[CellValue],
        spec: &ColumnSpec,
    ) -> Result<CheckOutcome, RuleError> {
        let value = cell(row, index)?;
        let required = match &self.gate {
            None => spec.required,
            Some(gate) => match gate.evaluate(index, row)? {
                GateState::Open => true,
                GateState::Closed(reason) => {
                    if value.is_blank() {
                        return Ok(CheckOutcome::ok());
                    }
                    return Ok(CheckOutcome::error(reason));
                }
            },
        };
        Ok(self.check.apply(value, spec, required))
    }
}

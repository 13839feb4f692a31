use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::CellValue;

/// Named column data types used by the submission templates.
///
/// Each name maps to exactly one [`PrimitiveKind`] with fixed limits. The
/// names are what schema files refer to (`"NUM13V4"`, `"CHAR35"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Date,

    // Integers
    Num6,
    Num8,
    /// Free-text numeric choice; anything convertible to an integer is accepted
    Number,

    // Decimals
    Num6v2,
    Num11v2,
    Num13v4,

    // Text
    Char3,
    Char4,
    Char8,
    Char9,
    Char10,
    Char14,
    Char18,
    Char27,
    Char35,
    Char120,
}

impl DataType {
    pub fn kind(self) -> PrimitiveKind {
        use PrimitiveKind::*;
        match self {
            DataType::Date => Date,
            DataType::Num6 => BoundedInteger { max_digits: 6, lenient: false },
            DataType::Num8 => BoundedInteger { max_digits: 8, lenient: false },
            DataType::Number => BoundedInteger { max_digits: 9, lenient: true },
            DataType::Num6v2 => BoundedDecimal { total: 9, before: 6, after: 2 },
            DataType::Num11v2 => BoundedDecimal { total: 14, before: 11, after: 2 },
            DataType::Num13v4 => BoundedDecimal { total: 18, before: 13, after: 4 },
            DataType::Char3 => BoundedString { max_length: 3 },
            DataType::Char4 => BoundedString { max_length: 4 },
            DataType::Char8 => BoundedString { max_length: 8 },
            DataType::Char9 => BoundedString { max_length: 9 },
            DataType::Char10 => BoundedString { max_length: 10 },
            DataType::Char14 => BoundedString { max_length: 14 },
            DataType::Char18 => BoundedString { max_length: 18 },
            DataType::Char27 => BoundedString { max_length: 27 },
            DataType::Char35 => BoundedString { max_length: 35 },
            DataType::Char120 => BoundedString { max_length: 120 },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Date => "DATE",
            DataType::Num6 => "NUM6",
            DataType::Num8 => "NUM8",
            DataType::Number => "NUMBER",
            DataType::Num6v2 => "NUM6V2",
            DataType::Num11v2 => "NUM11V2",
            DataType::Num13v4 => "NUM13V4",
            DataType::Char3 => "CHAR3",
            DataType::Char4 => "CHAR4",
            DataType::Char8 => "CHAR8",
            DataType::Char9 => "CHAR9",
            DataType::Char10 => "CHAR10",
            DataType::Char14 => "CHAR14",
            DataType::Char18 => "CHAR18",
            DataType::Char27 => "CHAR27",
            DataType::Char35 => "CHAR35",
            DataType::Char120 => "CHAR120",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Primitive value kinds and their length/precision limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Date,
    /// `lenient` kinds accept any value convertible to an integer
    BoundedInteger { max_digits: usize, lenient: bool },
    BoundedDecimal { total: usize, before: usize, after: usize },
    BoundedString { max_length: usize },
}

/// Outcome of checking a non-blank value against a [`PrimitiveKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindCheck {
    Valid,
    TypeMismatch,
    /// Text that parses as a date, but in a format the template does not use
    WrongDateFormat { format: &'static str },
    TooLong { length: usize, max: usize },
    BeforeDecimalTooLong { length: usize, max: usize },
    AfterDecimalTooLong { length: usize, max: usize },
    /// A whole number where a decimal is expected; the decoder may have dropped
    /// trailing zero decimals, so this is only worth a warning.
    PossibleIssue,
}

struct DateFormat {
    pattern: &'static str,
    label: &'static str,
    year_digits: usize,
}

/// Recognisable but wrong ways of typing a date, tried in order.
const WRONG_DATE_FORMATS: &[DateFormat] = &[
    DateFormat { pattern: "%Y-%m-%d", label: "YYYY-MM-DD typed as text", year_digits: 4 },
    DateFormat { pattern: "%d/%m/%Y", label: "DD/MM/YYYY", year_digits: 4 },
    DateFormat { pattern: "%d-%m-%Y", label: "DD-MM-YYYY", year_digits: 4 },
    DateFormat { pattern: "%d\\%m\\%Y", label: "DD\\MM\\YYYY", year_digits: 4 },
    DateFormat { pattern: "%d.%m.%Y", label: "DD.MM.YYYY", year_digits: 4 },
    DateFormat { pattern: "%m/%d/%Y", label: "MM/DD/YYYY", year_digits: 4 },
    DateFormat { pattern: "%m-%d-%Y", label: "MM-DD-YYYY", year_digits: 4 },
    DateFormat { pattern: "%m\\%d\\%Y", label: "MM\\DD\\YYYY", year_digits: 4 },
    DateFormat { pattern: "%Y/%m/%d", label: "YYYY/MM/DD", year_digits: 4 },
    DateFormat { pattern: "%Y\\%m\\%d", label: "YYYY\\MM\\DD", year_digits: 4 },
    DateFormat { pattern: "%d/%m/%y", label: "DD/MM/YY", year_digits: 2 },
    DateFormat { pattern: "%d-%m-%y", label: "DD-MM-YY", year_digits: 2 },
    DateFormat { pattern: "%d\\%m\\%y", label: "DD\\MM\\YY", year_digits: 2 },
    DateFormat { pattern: "%m/%d/%y", label: "MM/DD/YY", year_digits: 2 },
    DateFormat { pattern: "%m-%d-%y", label: "MM-DD-YY", year_digits: 2 },
    DateFormat { pattern: "%m\\%d\\%y", label: "MM\\DD\\YY", year_digits: 2 },
];

impl DateFormat {
    fn matches(&self, text: &str) -> bool {
        if NaiveDate::parse_from_str(text, self.pattern).is_err() {
            return false;
        }
        // chrono reads "%Y" greedily, so the year width is checked on the text
        let parts: Vec<&str> = text
            .split(|c| matches!(c, '/' | '-' | '\\' | '.'))
            .collect();
        let year = if self.pattern.starts_with("%Y") {
            parts.first()
        } else {
            parts.last()
        };
        year.map(|y| y.len() == self.year_digits).unwrap_or(false)
    }
}

/// Label of the first wrong-but-recognisable date format `text` matches
pub fn recognise_wrong_date_format(text: &str) -> Option<&'static str> {
    let text = text.trim();
    WRONG_DATE_FORMATS
        .iter()
        .find(|format| format.matches(text))
        .map(|format| format.label)
}

fn digit_count(value: i64) -> usize {
    value.unsigned_abs().to_string().len()
}

impl PrimitiveKind {
    /// Decide membership of a non-blank value. Blank handling belongs to the
    /// cell checker and happens before this is called.
    pub fn classify(&self, value: &CellValue) -> KindCheck {
        match *self {
            PrimitiveKind::Date => match value {
                CellValue::Date(_) => KindCheck::Valid,
                CellValue::Text(text) => match recognise_wrong_date_format(text) {
                    Some(format) => KindCheck::WrongDateFormat { format },
                    None => KindCheck::TypeMismatch,
                },
                _ => KindCheck::TypeMismatch,
            },

            PrimitiveKind::BoundedInteger { max_digits, lenient } => {
                let number = match value {
                    CellValue::Int(i) => Some(*i),
                    other if lenient => other.as_integer(),
                    _ => None,
                };
                match number {
                    None => KindCheck::TypeMismatch,
                    Some(n) if digit_count(n) > max_digits => KindCheck::TooLong {
                        length: digit_count(n),
                        max: max_digits,
                    },
                    Some(_) => KindCheck::Valid,
                }
            }

            PrimitiveKind::BoundedDecimal {
                total,
                before,
                after,
            } => match value {
                CellValue::Float(f) if f.is_finite() => {
                    let text = value.to_string();
                    if text.len() > total {
                        return KindCheck::TooLong {
                            length: text.len(),
                            max: total,
                        };
                    }
                    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
                    let whole_digits = whole.trim_start_matches('-').len();
                    if whole_digits > before {
                        return KindCheck::BeforeDecimalTooLong {
                            length: whole_digits,
                            max: before,
                        };
                    }
                    if fraction.len() > after {
                        return KindCheck::AfterDecimalTooLong {
                            length: fraction.len(),
                            max: after,
                        };
                    }
                    KindCheck::Valid
                }
                CellValue::Int(i) => {
                    if digit_count(*i) > before {
                        KindCheck::BeforeDecimalTooLong {
                            length: digit_count(*i),
                            max: before,
                        }
                    } else {
                        KindCheck::PossibleIssue
                    }
                }
                _ => KindCheck::TypeMismatch,
            },

            PrimitiveKind::BoundedString { max_length } => match value {
                CellValue::Text(text) => {
                    let length = text.chars().count();
                    if length > max_length {
                        KindCheck::TooLong {
                            length,
                            max: max_length,
                        }
                    } else {
                        KindCheck::Valid
                    }
                }
                _ => KindCheck::TypeMismatch,
            },
        }
    }
}

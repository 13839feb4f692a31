use chrono::NaiveDate;
use std::fmt;

/// One decoded row of a sheet, in column order
pub type Row = Vec<CellValue>;

/// A cell value as handed over by the spreadsheet decoder.
///
/// The decoder has already turned the raw document into native values, so the
/// engine only ever inspects strings inside rule logic (`"yes"`/`"no"`, codes
/// typed as text and so on).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
}

impl CellValue {
    /// A cell is blank when its string form is empty.
    ///
    /// Whitespace-only text is *not* blank: it is data the submitter typed.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Loose integer conversion used by numeric-choice columns.
    ///
    /// Accepts integers, whole floats and text holding an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            CellValue::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Whether the cell answers a yes/no question with "yes" (any case)
    pub fn is_yes(&self) -> bool {
        self.as_text()
            .map(|s| s.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }

    /// Whether the cell answers a yes/no question with "no" (any case)
    pub fn is_no(&self) -> bool {
        self.as_text()
            .map(|s| s.trim().eq_ignore_ascii_case("no"))
            .unwrap_or(false)
    }

    /// Human readable name of the runtime type, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "string",
            CellValue::Int(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Date(_) => "date",
        }
    }

    /// Quoted form for messages: text is wrapped in single quotes so leading
    /// or trailing whitespace stays visible.
    pub fn repr(&self) -> String {
        match self {
            CellValue::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            // Whole floats keep their fractional marker ("100.0"), otherwise the
            // shortest round-trip representation is used.
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

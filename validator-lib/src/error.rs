use thiserror::Error;

/// Problems found while building or loading a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Column position {position} is defined more than once in sheet \"{sheet}\"")]
    DuplicatePosition { sheet: String, position: usize },

    #[error("Sheet \"{0}\" is defined more than once")]
    DuplicateSheet(String),

    #[error("Sheet \"{0}\" has no columns")]
    EmptySheet(String),

    #[error("Sheet \"{sheet}\" expects column positions 0..{count} but position {missing} is not defined")]
    MissingPosition {
        sheet: String,
        count: usize,
        missing: usize,
    },

    #[error(
        "Column {position} in sheet \"{sheet}\" has a rule referring to column {reference}, which is not in the sheet"
    )]
    InvalidReference {
        sheet: String,
        position: usize,
        reference: usize,
    },

    #[error("The schema could not be parsed: {0}")]
    Malformed(String),
}

/// Failure while evaluating a conditional rule for one cell.
///
/// These never escape the sheet validator: each one is turned into a
/// generic error diagnostic for the cell that triggered it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("column {column} is not present in a row of {width} cells")]
    MissingColumn { column: usize, width: usize },

    #[error("the gate of column {column} must refer to an earlier column")]
    NoPredecessor { column: usize },
}

/// Failure while decoding a spreadsheet into a document
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Unsupported file type \"{0}\", expected one of .ods, .xlsx, .xlsm, .xlsb or .xls")]
    UnsupportedFormat(String),

    #[error("Unable to open the workbook \"{path}\": {message}")]
    Open { path: String, message: String },

    #[error("Error reading sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },
}

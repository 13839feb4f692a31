//! Schema model: which sheets a submission must contain, in which order, and
//! what each column of each sheet must hold.
//!
//! The model is plain data. The built-in schema lives in [`ers_v3`]; a
//! replacement can be loaded from JSON without touching the engine.

mod ers_v3;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::SchemaError;
use crate::rules::{Gate, Rule};
use crate::types::DataType;

/// The header is the 9th row of every template sheet
pub const DEFAULT_HEADER_ROW_INDEX: usize = 8;

/// Every template sheet ends with one summary row that is not data
pub const DEFAULT_FOOTER_ROWS: usize = 1;

fn default_header_row_index() -> usize {
    DEFAULT_HEADER_ROW_INDEX
}

fn default_footer_rows() -> usize {
    DEFAULT_FOOTER_ROWS
}

/// Specification of one column of one sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Zero-based offset of the column in the header row and every data row
    pub position: usize,
    /// Header text expected at `position` in the header row
    pub header: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default)]
    pub warn_if_blank: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl ColumnSpec {
    pub fn new(
        position: usize,
        header: impl Into<String>,
        required: bool,
        data_type: DataType,
        warn_if_blank: bool,
    ) -> Self {
        ColumnSpec {
            position,
            header: header.into(),
            required,
            data_type,
            warn_if_blank,
            rule: None,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// 1-based question number on the business form
    pub fn entry(&self) -> usize {
        self.position + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSheetSpec {
    name: String,
    #[serde(default = "default_header_row_index")]
    header_row_index: usize,
    #[serde(default = "default_footer_rows")]
    footer_rows: usize,
    columns: Vec<ColumnSpec>,
}

/// Specification of one required sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSheetSpec", into = "RawSheetSpec")]
pub struct SheetSpec {
    pub name: String,
    /// Position the sheet must occupy among the document's sheets
    pub expected_index: usize,
    pub header_row_index: usize,
    /// Trailing rows after the data that are never validated
    pub footer_rows: usize,
    columns: BTreeMap<usize, ColumnSpec>,
}

impl SheetSpec {
    /// Build a sheet from its columns.
    ///
    /// Positions must be unique and cover `0..n` without gaps, and every
    /// rule must only read columns that exist in the sheet.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSpec>) -> Result<Self, SchemaError> {
        let name = name.into();
        if columns.is_empty() {
            return Err(SchemaError::EmptySheet(name));
        }

        let mut by_position = BTreeMap::new();
        for column in columns {
            let position = column.position;
            if by_position.insert(position, column).is_some() {
                return Err(SchemaError::DuplicatePosition {
                    sheet: name,
                    position,
                });
            }
        }

        let count = by_position.len();
        if let Some(missing) = (0..count).find(|p| !by_position.contains_key(p)) {
            return Err(SchemaError::MissingPosition {
                sheet: name,
                count,
                missing,
            });
        }

        for column in by_position.values() {
            let Some(gate) = column.rule.as_ref().and_then(|rule| rule.gate.as_ref()) else {
                continue;
            };
            let reference = gate.referenced_column(column.position);
            let valid = match (gate, reference) {
                (_, None) => false,
                (Gate::PreviousYes { .. }, Some(from)) => from < column.position,
                (_, Some(other)) => other < count && other != column.position,
            };
            if !valid {
                return Err(SchemaError::InvalidReference {
                    sheet: name,
                    position: column.position,
                    reference: reference.unwrap_or(column.position),
                });
            }
        }

        Ok(SheetSpec {
            name,
            expected_index: 0,
            header_row_index: DEFAULT_HEADER_ROW_INDEX,
            footer_rows: DEFAULT_FOOTER_ROWS,
            columns: by_position,
        })
    }

    pub fn with_header_row_index(mut self, header_row_index: usize) -> Self {
        self.header_row_index = header_row_index;
        self
    }

    pub fn with_footer_rows(mut self, footer_rows: usize) -> Self {
        self.footer_rows = footer_rows;
        self
    }

    /// Columns in position order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.values()
    }

    pub fn column(&self, position: usize) -> Option<&ColumnSpec> {
        self.columns.get(&position)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl TryFrom<RawSheetSpec> for SheetSpec {
    type Error = SchemaError;

    fn try_from(raw: RawSheetSpec) -> Result<Self, Self::Error> {
        Ok(SheetSpec::new(raw.name, raw.columns)?
            .with_header_row_index(raw.header_row_index)
            .with_footer_rows(raw.footer_rows))
    }
}

impl From<SheetSpec> for RawSheetSpec {
    fn from(sheet: SheetSpec) -> Self {
        RawSheetSpec {
            name: sheet.name,
            header_row_index: sheet.header_row_index,
            footer_rows: sheet.footer_rows,
            columns: sheet.columns.into_values().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDocumentSpec {
    name: String,
    #[serde(default)]
    version: String,
    sheets: Vec<SheetSpec>,
}

/// The full submission schema: required sheets in required order.
///
/// Immutable once built, so one instance can be shared by any number of
/// concurrent validations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocumentSpec", into = "RawDocumentSpec")]
pub struct DocumentSpec {
    pub name: String,
    pub version: String,
    sheets: Vec<SheetSpec>,
}

impl DocumentSpec {
    /// Build a document schema. Each sheet's `expected_index` is its
    /// position in `sheets`.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        sheets: Vec<SheetSpec>,
    ) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        let mut indexed = Vec::with_capacity(sheets.len());
        for (index, mut sheet) in sheets.into_iter().enumerate() {
            if !seen.insert(sheet.name.clone()) {
                return Err(SchemaError::DuplicateSheet(sheet.name));
            }
            sheet.expected_index = index;
            indexed.push(sheet);
        }
        return Ok(DocumentSpec {
            name: name.into(),
            version: version.into(),
            sheets: indexed,
        });
    }

    /// The built-in schema for the "Other" employment-related securities
    /// return, template version 3.
    pub fn ers_other_v3() -> Result<Self, SchemaError> {
        ers_v3::document_spec()
    }

    /// Sheets in required order
    pub fn sheets(&self) -> &[SheetSpec] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetSpec> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::Malformed(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file {}", path.display()))?;
        let spec = Self::from_json_str(&json)
            .with_context(|| format!("Invalid schema in {}", path.display()))?;
        return Ok(spec);
    }

    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Malformed(e.to_string()))
    }
}

impl TryFrom<RawDocumentSpec> for DocumentSpec {
    type Error = SchemaError;

    fn try_from(raw: RawDocumentSpec) -> Result<Self, Self::Error> {
        DocumentSpec::new(raw.name, raw.version, raw.sheets)
    }
}

impl From<DocumentSpec> for RawDocumentSpec {
    fn from(spec: DocumentSpec) -> Self {
        RawDocumentSpec {
            name: spec.name,
            version: spec.version,
            sheets: spec.sheets,
        }
    }
}

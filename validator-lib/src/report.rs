use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::diagnostic::ValidationResult;
use crate::utils::get_utc_iso_datetime;

pub const CSV_HEADER: [&str; 5] = ["sheet_name", "entry", "row", "column", "message"];

/// One line per diagnostic, errors first
pub fn format_text(result: &ValidationResult) -> String {
    result
        .diagnostics()
        .map(|diagnostic| format!("{diagnostic}\n"))
        .collect()
}

/// Text block appended to the errors log: timestamp, source, counts and
/// every diagnostic line.
pub fn format_report(source: &str, result: &ValidationResult) -> String {
    let mut report = format!(
        "Validation of {} at {}\nErrors: {}, Warnings: {}\n",
        source,
        get_utc_iso_datetime(),
        result.errors.len(),
        result.warnings.len()
    );
    report.push_str(&format_text(result));
    report
}

/// Write every diagnostic as a CSV record, errors first
pub fn write_csv<W: Write>(result: &ValidationResult, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for diagnostic in result.diagnostics() {
        wtr.write_record([
            diagnostic.sheet_name.clone(),
            diagnostic.entry.map(|e| e.to_string()).unwrap_or_default(),
            diagnostic.row.map(|r| r.to_string()).unwrap_or_default(),
            diagnostic.column.clone().unwrap_or_default(),
            diagnostic.message.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(result: &ValidationResult, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    write_csv(result, file)
}

pub fn to_json(result: &ValidationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

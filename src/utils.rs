use anyhow::{Context, Result};
use chrono::Local;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;
use validator_lib::report::{format_text, to_json, write_csv};
use validator_lib::utils::normalize_string;
use validator_lib::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per diagnostic
    Text,
    /// sheet_name,entry,row,column,message
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

pub fn render(result: &ValidationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(result)),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_csv(result, &mut buffer)?;
            Ok(String::from_utf8(buffer)?)
        }
        OutputFormat::Json => to_json(result),
    }
}

/// Report file name derived from the submission name and the current time
pub fn generate_unique_filename(submission: &Path, format: OutputFormat) -> String {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let stem = submission
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("submission");
    let stem = normalize_string(stem).replace(' ', "_");
    let filename = format!("{stem}_validation_{timestamp}.{}", format.extension());
    return filename.to_lowercase();
}

/// Write the report to `path`, or to standard output
pub fn write_output(report: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, report)
            .with_context(|| format!("Failed to write report to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            Ok(stdout.flush()?)
        }
    }
}

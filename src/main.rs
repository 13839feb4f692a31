// reset; cargo run -- ./data/submission.ods
// reset; cargo run -- ./data/submission.ods --format csv --output report.csv
// reset; cargo run -- --export-schema > ers_other_v3.json

mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use validator_lib::{
    DocumentSpec, SubmissionValidator,
    utils::write_error_to_log,
    ERRORS_LOG_FILE,
};

use crate::utils::{generate_unique_filename, render, write_output, OutputFormat};

#[derive(Parser)]
#[command(name = "ers-validator")]
#[command(about = "A tool to validate ERS submission spreadsheets against the template schema")]
#[command(version)]
struct Args {
    /// Path to the spreadsheet to validate (.ods, .xlsx, .xlsm, .xlsb or .xls)
    #[arg(required_unless_present = "export_schema")]
    file: Option<PathBuf>,

    /// JSON file with a replacement schema. The built-in schema is used if not specified
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to this file instead of standard output
    #[arg(short, long, conflicts_with = "save_report")]
    output: Option<PathBuf>,

    /// Write the report to a uniquely named file in the current directory
    #[arg(long)]
    save_report: bool,

    /// Print the active schema as JSON and exit
    #[arg(long)]
    export_schema: bool,
}

fn load_schema(path: Option<&PathBuf>) -> Result<DocumentSpec> {
    match path {
        Some(path) => DocumentSpec::from_json_file(path),
        None => DocumentSpec::ers_other_v3().context("The built-in schema is invalid"),
    }
}

fn run(arguments: Args) -> Result<bool> {
    let spec = load_schema(arguments.schema.as_ref())?;

    if arguments.export_schema {
        println!("{}", spec.to_json_string()?);
        return Ok(true);
    }

    let Some(file) = arguments.file else {
        return Err(anyhow::anyhow!("No spreadsheet to validate was given"));
    };

    info!(
        "Validating {} against schema {} {}",
        file.display(),
        spec.name,
        spec.version
    );
    let validator = SubmissionValidator::builder()
        .schema(spec)
        .log_errors(true)
        .build()?;
    let result = validator
        .validate_file(&file)
        .with_context(|| format!("Failed to validate {}", file.display()))?;

    let report = render(&result, arguments.format)?;
    let output = match arguments.output {
        Some(output) => Some(output),
        None if arguments.save_report => Some(PathBuf::from(generate_unique_filename(
            &file,
            arguments.format,
        ))),
        None => None,
    };
    write_output(&report, output.as_deref())?;
    if let Some(output) = &output {
        println!("✅ Report written to {}", output.display());
    }

    if result.is_valid() {
        println!(
            "✅ Validation completed with {} warnings",
            result.warnings.len()
        );
    } else {
        eprintln!(
            "❌ Validation failed with {} errors and {} warnings",
            result.errors.len(),
            result.warnings.len()
        );
        eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
    }
    Ok(result.is_valid())
}

fn main() {
    env_logger::init();
    let arguments = Args::parse();

    match run(arguments) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            write_error_to_log("Submission Validation Error", &format!("{e:#}"));
            eprintln!("❌ Validation failed with error: {e:#}");
            eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
            std::process::exit(2);
        }
    }
}

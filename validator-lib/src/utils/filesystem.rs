use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::ERRORS_LOG_FILE;
use crate::utils::get_utc_iso_datetime;

/// Append a timestamped entry to the errors log file
///
/// # Arguments
/// * `error_type` - Category of the entry (e.g., "Submission Validation Errors")
/// * `error_message` - The entry content
pub fn write_error_to_log(error_type: &str, error_message: &str) {
    write_error_to_log_file(ERRORS_LOG_FILE, error_type, error_message);
}

/// Same as [`write_error_to_log`] with an explicit log file path.
///
/// Logging must never interrupt validation, so failures to open or write
/// the file are ignored.
pub fn write_error_to_log_file(path: impl AsRef<Path>, error_type: &str, error_message: &str) {
    let timestamp = get_utc_iso_datetime();
    let log_entry = format!("\n[{}] {}:\n{}\n", timestamp, error_type, error_message);

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", log_entry);
    }
}

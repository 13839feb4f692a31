mod datetime;
mod filesystem;
mod string;

pub use datetime::{excel_serial_to_date, get_utc_iso_datetime};
pub use filesystem::{write_error_to_log, write_error_to_log_file};
pub use string::{column_label, normalize_string};

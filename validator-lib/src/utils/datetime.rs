use chrono::{Duration, NaiveDate};

pub fn get_utc_iso_datetime() -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    return timestamp;
}

/// Convert a spreadsheet serial day number to a calendar date.
///
/// Serial 1 is 1900-01-01 in the 1900 date system. Serials from 61 onwards
/// are shifted by one day to account for the phantom 1900-02-29 that
/// spreadsheet applications keep for compatibility.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let days = serial.trunc() as i64;
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let offset = if days < 61 { days + 1 } else { days };
    return base.checked_add_signed(Duration::try_days(offset)?);
}

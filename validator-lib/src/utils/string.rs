/// Normalize text by replacing control characters with spaces and collapsing whitespace
///
/// Header cells are typed by hand, so line breaks and doubled spaces are not
/// significant when comparing them with the expected titles.
pub fn normalize_string(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

fn letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Spreadsheet column label for a zero-based column index: 0 is "A", 25 is
/// "Z", 26 is "AA", 701 is "ZZ", 702 is "AAA".
pub fn column_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        remaining -= 1;
        label.push(letter(remaining));
        remaining /= 26;
    }
    label.iter().rev().collect()
}

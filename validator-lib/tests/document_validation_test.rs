use proptest::prelude::*;
use std::io::Write;
use validator_lib::{CellValue, Document, Row, SubmissionValidator, validate_document};

mod common;
use common::{GRANTS, OPTIONS};

fn valid_document() -> Document {
    common::document_with(
        &common::ers_spec(),
        vec![
            (GRANTS, vec![common::valid_grants_row(), common::valid_grants_row()]),
            (OPTIONS, vec![common::valid_options_row()]),
        ],
    )
}

#[test]
fn test_valid_document_has_no_diagnostics() {
    let result = validate_document(&common::ers_spec(), &valid_document());
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_every_missing_sheet_is_reported_once() {
    let mut document = valid_document();
    document.sheets.retain(|sheet| sheet.name != "Other_Sold_V3" && sheet.name != "Other_Notional_V3");

    let result = validate_document(&common::ers_spec(), &document);
    assert_eq!(
        common::lines(&result),
        vec![
            "ERROR: Sheet Name: Other_Notional_V3, Message: The sheet \"Other_Notional_V3\" is missing!",
            "ERROR: Sheet Name: Other_Sold_V3, Message: The sheet \"Other_Sold_V3\" is missing!",
        ]
    );
}

#[test]
fn test_empty_document() {
    let result = validate_document(&common::ers_spec(), &Document::default());
    assert_eq!(result.errors.len(), 9);
    assert!(result.errors.iter().all(|d| d.message.ends_with("is missing!")));
}

#[test]
fn test_misordered_sheet_is_still_validated() {
    let mut document = valid_document();
    let mut options_row = common::valid_options_row();
    options_row[0] = CellValue::from("tomorrow");
    let options_spec = common::ers_sheet_spec(OPTIONS);
    document.sheets[1].rows = common::sheet_rows(&options_spec, vec![options_row]);
    document.sheets.swap(0, 1);

    let result = validate_document(&common::ers_spec(), &document);
    let lines = common::lines(&result);
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "ERROR: Sheet Name: Other_Grants_V3, Message: The sheet \"Other_Grants_V3\" is not at the required index 1!"
    );
    assert_eq!(
        lines[1],
        "ERROR: Sheet Name: Other_Options_V3, Message: The sheet \"Other_Options_V3\" is not at the required index 2!"
    );
    assert!(lines[2].starts_with("ERROR: Sheet Name: Other_Options_V3, Row: 10, Column: A, Message:"));
}

#[test]
fn test_unknown_sheets_only_affect_positions() {
    let mut document = valid_document();
    document.sheets.push(validator_lib::Sheet::new("Notes", vec![vec![CellValue::from("anything")]]));
    assert!(validate_document(&common::ers_spec(), &document).is_valid());

    document.sheets.rotate_right(1);
    let result = validate_document(&common::ers_spec(), &document);
    assert_eq!(result.errors.len(), 9);
}

#[test]
fn test_diagnostics_follow_sheet_order() {
    let mut grants = common::valid_grants_row();
    grants[1] = CellValue::Float(1.5);
    let mut options = common::valid_options_row();
    options[3] = CellValue::Empty;
    let document = common::document_with(
        &common::ers_spec(),
        vec![(OPTIONS, vec![options]), (GRANTS, vec![grants])],
    );

    let result = validate_document(&common::ers_spec(), &document);
    let sheets: Vec<&str> = result.errors.iter().map(|d| d.sheet_name.as_str()).collect();
    assert_eq!(sheets, vec![GRANTS, OPTIONS]);
}

#[test]
fn test_validator_is_shared_across_threads() {
    let validator = SubmissionValidator::builder().build().unwrap();
    let valid = valid_document();
    let mut invalid = valid_document();
    invalid.sheets.pop();

    std::thread::scope(|scope| {
        let first = scope.spawn(|| validator.validate(&valid));
        let second = scope.spawn(|| validator.validate(&invalid));
        assert!(first.join().unwrap().is_valid());
        assert_eq!(second.join().unwrap().errors.len(), 1);
    });
}

#[test]
fn test_validate_file_rejects_unsupported_and_unreadable_files() {
    let validator = SubmissionValidator::builder().build().unwrap();

    let csv = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let error = validator.validate_file(csv.path()).unwrap_err();
    assert!(error.to_string().contains("Unsupported file type \".csv\""));

    let mut ods = tempfile::Builder::new().suffix(".ods").tempfile().unwrap();
    ods.write_all(b"not a spreadsheet").unwrap();
    let error = validator.validate_file(ods.path()).unwrap_err();
    assert!(error.to_string().starts_with("Unable to open the workbook"));
}

fn mutation() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        Just(CellValue::from("yes")),
        Just(CellValue::from(" No ")),
        Just(CellValue::from("25/12/2023")),
        Just(CellValue::Int(123456789)),
        Just(CellValue::Float(1234567890123.12345)),
        "[a-z ]{0,40}".prop_map(CellValue::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200, ..ProptestConfig::default()
    })]

    #[test]
    fn test_validation_is_idempotent(
        changes in prop::collection::vec((0usize..42, mutation()), 0..8),
        drop_sheet in prop::option::of(0usize..9)
    ) {
        let spec = common::ers_spec();
        let mut options: Row = common::valid_options_row();
        for (column, value) in changes {
            options[column] = value;
        }
        let mut document = common::document_with(&spec, vec![(OPTIONS, vec![options])]);
        if let Some(index) = drop_sheet {
            document.sheets.remove(index);
        }

        let first = validate_document(&spec, &document);
        let second = validate_document(&spec, &document);
        prop_assert_eq!(first, second);
    }
}

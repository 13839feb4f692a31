use proptest::prelude::*;
use validator_lib::checker::REQUIRED_ERROR;
use validator_lib::rules::most_recent_yes;
use validator_lib::{
    CellValue, Check, ColumnSpec, DataType, Gate, Row, Rule, RuleError, ValidationResult,
    validate_sheet,
};

mod common;
use common::{ACQUISITION, OPTIONS, RESTRICTED, cell_warnings};

const FIRST_DATA_ROW: usize = 10;

fn validate(sheet: &str, row: Row) -> ValidationResult {
    let spec = common::ers_sheet_spec(sheet);
    validate_sheet(&spec, &common::sheet_rows(&spec, vec![row]))
}

fn messages(result: &ValidationResult, column: &str) -> Vec<String> {
    common::cell_errors(result, FIRST_DATA_ROW, column)
        .iter()
        .map(|d| d.message.clone())
        .collect()
}

/// An acquisition of ordinary shares that are neither restricted nor
/// convertible
fn valid_acquisition_row() -> Row {
    let mut row: Row = vec![CellValue::Empty; 40];
    row[0] = common::date(2023, 6, 30);
    row[1] = "no".into();
    row[3] = "Ann".into();
    row[5] = "Smith".into();
    row[6] = "AB123456C".into();
    row[7] = "123/AB456".into();
    row[8] = "Issuer plc".into();
    row[9] = "1 High Street".into();
    row[18] = CellValue::Int(3);
    row[19] = "no".into();
    row[23] = CellValue::Float(100.5);
    row[24] = CellValue::Int(2);
    row[28] = CellValue::Float(10.5);
    row[32] = CellValue::Float(250.75);
    row[33] = "yes".into();
    row[34] = "no".into();
    row[36] = "no".into();
    row[38] = "yes".into();
    row[39] = "no".into();
    row
}

fn valid_restricted_row() -> Row {
    vec![
        common::date(2023, 6, 30),
        "no".into(),
        CellValue::Empty,
        "Ann".into(),
        CellValue::Empty,
        "Smith".into(),
        "AB123456C".into(),
        "123/AB456".into(),
        common::date(2019, 1, 15),
        CellValue::Float(100.5),
        CellValue::Float(1500.25),
        "yes".into(),
        CellValue::Empty,
        CellValue::Empty,
        common::date(2023, 6, 1),
        CellValue::Float(1.5),
        CellValue::Float(2.75),
        "yes".into(),
        "no".into(),
        "no".into(),
    ]
}

#[test]
fn test_valid_rows_have_no_diagnostics() {
    assert_eq!(validate(OPTIONS, common::valid_options_row()), ValidationResult::new());
    assert_eq!(validate(ACQUISITION, valid_acquisition_row()), ValidationResult::new());
    assert_eq!(validate(RESTRICTED, valid_restricted_row()), ValidationResult::new());
}

#[test]
fn test_options_not_exercised_requires_blank_exercise_details() {
    let mut row = common::valid_options_row();
    row[29] = "no".into();
    row[37] = "no".into();
    let result = validate(OPTIONS, row);

    assert_eq!(result.errors.len(), 5);
    assert!(messages(&result, "AE")[0].contains("none of the switch questions 30 to 30"));
    assert!(messages(&result, "AF")[0].contains("none of the switch questions 30 to 31"));
    assert!(messages(&result, "AG")[0].contains("none of the switch questions 30 to 32"));
    assert!(messages(&result, "AH")[0].contains("none of the switch questions 30 to 33"));
    assert!(messages(&result, "AK")[0].contains("Because \"30\" was not answered \"yes\""));
}

#[test]
fn test_options_not_exercised_path_is_valid() {
    let mut row = common::valid_options_row();
    row[29] = "no".into();
    for column in [30, 31, 32, 33, 36] {
        row[column] = CellValue::Empty;
    }
    row[37] = "yes".into();
    row[38] = CellValue::Float(12.5);
    assert!(validate(OPTIONS, row.clone()).is_valid());

    // Q38 is now open and required
    row[37] = CellValue::Empty;
    let result = validate(OPTIONS, row);
    assert_eq!(messages(&result, "AL"), vec![REQUIRED_ERROR]);
    // and Q39 must be blank since Q38 was not "yes"
    assert!(messages(&result, "AM")[0].contains("previous column was not answered \"yes\""));
}

#[test]
fn test_options_unlisted_shares_need_valuation_answer() {
    let mut row = common::valid_options_row();
    row[33] = "no".into();
    let result = validate(OPTIONS, row.clone());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(messages(&result, "AI"), vec![REQUIRED_ERROR]);

    row[34] = "yes".into();
    row[35] = "HMRC123".into();
    assert!(validate(OPTIONS, row).is_valid());
}

#[test]
fn test_scheme_reference_follows_tax_avoidance_answer() {
    let mut row = common::valid_options_row();
    row[1] = "yes".into();
    let result = validate(OPTIONS, row.clone());
    assert_eq!(messages(&result, "C"), vec![REQUIRED_ERROR]);

    row[2] = CellValue::Int(12345678);
    assert!(validate(OPTIONS, row.clone()).is_valid());

    row[1] = "no".into();
    let result = validate(OPTIONS, row);
    assert!(messages(&result, "C")[0].contains("should be blank"));
}

#[test]
fn test_yes_no_answers() {
    let mut row = common::valid_options_row();
    row[1] = "No".into();
    let result = validate(OPTIONS, row.clone());
    assert!(result.errors.is_empty());
    let warnings = cell_warnings(&result, FIRST_DATA_ROW, "B");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("not all lower case"));

    row[1] = " no".into();
    let result = validate(OPTIONS, row.clone());
    assert!(messages(&result, "B")[0].contains("additional whitespace"));

    // longer than CHAR3 once padded, still reported as whitespace
    row[1] = "no  ".into();
    let result = validate(OPTIONS, row.clone());
    assert_eq!(
        messages(&result, "B"),
        vec!["The cell contains 'no  ', which has additional whitespace around \"yes\"/\"no\"!".to_string()]
    );

    row[1] = "n/a".into();
    let result = validate(OPTIONS, row);
    assert!(messages(&result, "B")[0].contains("must be \"yes\" or \"no\""));
}

#[test]
fn test_identifier_formats() {
    let mut row = common::valid_options_row();
    row[6] = "AB 12345C".into();
    row[7] = "12X456".into();
    row[16] = "SC 12345".into();
    let result = validate(OPTIONS, row);

    assert!(messages(&result, "G")[0].contains("contains a space character"));
    let paye = &messages(&result, "H")[0];
    assert!(paye.contains("does not start with three digits"));
    assert!(paye.contains("missing a forward slash"));
    assert!(messages(&result, "Q")[0].contains("should not contain spaces"));
}

#[test]
fn test_company_reference_accepts_numbers_and_text() {
    let mut row = common::valid_options_row();
    row[16] = "SC123456".into();
    assert!(validate(OPTIONS, row.clone()).is_valid());

    row[16] = CellValue::Int(123456789);
    let result = validate(OPTIONS, row);
    assert!(messages(&result, "Q")[0].contains("number of up to 8 digits"));
}

#[test]
fn test_acquisition_restricted_branch_requires_restriction_details() {
    let mut row = valid_acquisition_row();
    row[24] = CellValue::Int(1);
    let result = validate(ACQUISITION, row.clone());

    for column in ["Z", "AA", "AB", "AD", "AF"] {
        assert_eq!(messages(&result, column), vec![REQUIRED_ERROR], "column {column}");
    }
    assert_eq!(result.errors.len(), 5);

    row[25] = CellValue::Int(2);
    row[26] = CellValue::Float(0.6);
    row[27] = CellValue::Float(8.25);
    row[29] = "yes".into();
    row[30] = "All".into();
    row[31] = CellValue::Float(9.5);
    assert!(validate(ACQUISITION, row.clone()).is_valid());

    row[30] = "none".into();
    let result = validate(ACQUISITION, row);
    assert!(messages(&result, "AE")[0].contains("should be \"all\" or \"some\""));
}

#[test]
fn test_acquisition_other_branches_reject_restriction_details() {
    let mut row = valid_acquisition_row();
    row[25] = CellValue::Int(2);
    let result = validate(ACQUISITION, row);
    let message = &messages(&result, "Z")[0];
    assert!(message.contains("answer to \"25\" selected a different branch"));
    assert!(message.contains("applies to \"1\""));

    let mut row = valid_acquisition_row();
    row[24] = CellValue::Int(3);
    let result = validate(ACQUISITION, row);
    assert!(messages(&result, "AC")[0].contains("applies to \"1\" or \"2\""));
    assert_eq!(messages(&result, "AF"), vec![REQUIRED_ERROR]);
}

#[test]
fn test_acquisition_number_ranges() {
    let mut row = valid_acquisition_row();
    row[18] = CellValue::Int(12);
    row[24] = "4".into();
    let result = validate(ACQUISITION, row);

    assert!(messages(&result, "S")[0].ends_with("Provided value was 12"));
    assert!(messages(&result, "Y")[0].contains("less than or equal to 3"));
}

#[test]
fn test_acquisition_employee_shareholder_follow_up() {
    let mut row = valid_acquisition_row();
    row[36] = "yes".into();
    let result = validate(ACQUISITION, row.clone());
    assert_eq!(messages(&result, "AL"), vec![REQUIRED_ERROR]);

    row[37] = "no".into();
    assert!(validate(ACQUISITION, row).is_valid());
}

#[test]
fn test_restricted_securities_questions_17_and_18() {
    let mut row = valid_restricted_row();
    row[16] = "yes".into();
    row[17] = CellValue::Float(1.5);
    let result = validate(RESTRICTED, row);

    assert!(messages(&result, "Q")[0].contains("expected type is (NUM13V4)"));
    assert!(messages(&result, "R")[0].contains("expected type is (CHAR3)"));
}

#[test]
fn test_restricted_securities_valuation_chain() {
    let mut row = valid_restricted_row();
    row[11] = "no".into();
    row[12] = "yes".into();
    let result = validate(RESTRICTED, row.clone());
    assert_eq!(messages(&result, "N"), vec![REQUIRED_ERROR]);

    row[13] = "HMRC42".into();
    assert!(validate(RESTRICTED, row).is_valid());
}

#[test]
fn test_rule_reading_past_row_end_is_an_error() {
    let column = ColumnSpec::new(1, "2. Detail", false, DataType::Char35, false)
        .with_rule(Rule::gated(Gate::ColumnYes { column: 3 }, Check::Type));
    let rule = column.rule.clone().unwrap();

    let error = rule
        .evaluate(1, &["yes".into(), "detail".into()], &column)
        .unwrap_err();
    assert_eq!(error, RuleError::MissingColumn { column: 3, width: 2 });
    assert_eq!(error.to_string(), "column 3 is not present in a row of 2 cells");
}

fn answer() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::from("yes")),
        Just(CellValue::from("YES")),
        Just(CellValue::from("no")),
        Just(CellValue::Empty),
        Just(CellValue::Int(1)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000, ..ProptestConfig::default()
    })]

    #[test]
    fn test_most_recent_yes_is_last_yes_before_column(
        row in prop::collection::vec(answer(), 1..12),
        from in 0usize..6,
        to in 0usize..14
    ) {
        let expected = (from..to.min(row.len())).filter(|&i| row[i].is_yes()).max();
        prop_assert_eq!(most_recent_yes(&row, from, to), expected);
    }

    #[test]
    fn test_previous_yes_gate_controls_options_exercise_columns(
        switch in answer(),
        value in prop_oneof![Just(CellValue::Empty), Just(CellValue::Float(10.25))]
    ) {
        let mut row = common::valid_options_row();
        row[29] = switch.clone();
        row[30] = value.clone();
        let result = validate(OPTIONS, row);
        let errors = messages(&result, "AE");

        match (switch.is_yes(), value.is_blank()) {
            (true, true) => prop_assert_eq!(errors, vec![REQUIRED_ERROR.to_string()]),
            (true, false) => prop_assert!(errors.is_empty()),
            (false, true) => prop_assert!(errors.is_empty()),
            (false, false) => {
                prop_assert_eq!(errors.len(), 1);
                prop_assert!(errors[0].contains("should be blank"));
            }
        }
    }
}

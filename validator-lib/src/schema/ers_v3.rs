//! Built-in schema for the "Other" employment-related securities return,
//! template version 3.
//!
//! Header texts are the exact titles printed in row 9 of each template
//! sheet, including their line breaks.

use super::{ColumnSpec, DocumentSpec, SheetSpec};
use crate::error::SchemaError;
use crate::rules::{Check, Gate, Rule};
use crate::types::DataType::*;

pub const SCHEMA_NAME: &str = "ERS Other";
pub const SCHEMA_VERSION: &str = "V3";

/// Column 25 of the acquisition sheet: 1 restricted (or both restricted and
/// convertible), 2 neither, 3 convertible
const SECURITY_TYPE_COLUMN: usize = 24;

fn yes_no() -> Rule {
    Rule::check(Check::YesNo)
}

fn company_reference(digits: usize) -> Rule {
    Rule::check(Check::CompanyReference {
        digits,
        max_length: 10,
    })
}

fn restriction_type(codes: &[i64]) -> Gate {
    Gate::Discriminator {
        column: SECURITY_TYPE_COLUMN,
        codes: codes.to_vec(),
    }
}

pub(super) fn document_spec() -> Result<DocumentSpec, SchemaError> {
    let sheets = vec![
        SheetSpec::new("Other_Grants_V3", grants())?,
        SheetSpec::new("Other_Options_V3", options())?,
        SheetSpec::new("Other_Acquisition_V3", acquisition())?,
        SheetSpec::new("Other_RestrictedSecurities_V3", restricted_securities())?,
        SheetSpec::new("Other_OtherBenefits_V3", other_benefits())?,
        SheetSpec::new("Other_Convertible_V3", convertible())?,
        SheetSpec::new("Other_Notional_V3", notional())?,
        SheetSpec::new("Other_Enhancement_V3", enhancement())?,
        SheetSpec::new("Other_Sold_V3", sold())?,
    ];
    DocumentSpec::new(SCHEMA_NAME, SCHEMA_VERSION, sheets)
}

fn grants() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of grant\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nNumber of employees granted options", false, Num6, true),
        ColumnSpec::new(2, "3.\nUnrestricted market value of a security at date of grant\n£\ne.g. 10.1234", false, Num13v4, true),
        ColumnSpec::new(3, "4.\nNumber of securities over which options granted\ne.g. 100.00", false, Num11v2, true),
    ]
}

fn options() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\nyyyy-mm-dd", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes, enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance Number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", false, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nDate of grant of option subject to the reportable event\nyyyy-mm-dd", true, Date, true),
        ColumnSpec::new(9, "10.\nGrantor company name", true, Char120, true),
        ColumnSpec::new(10, "11.\nGrantor company address line 1", true, Char27, false),
        ColumnSpec::new(11, "12.\nGrantor company address line 2", false, Char27, false),
        ColumnSpec::new(12, "13.\nGrantor company address line 3", false, Char27, false),
        ColumnSpec::new(13, "14.\nGrantor company address line 4", false, Char18, false),
        ColumnSpec::new(14, "15.\nGrantor company country", false, Char18, false),
        ColumnSpec::new(15, "16.\nGrantor company postcode", false, Char8, false),
        ColumnSpec::new(16, "17.\nGrantor Company Registration Number (CRN) , if applicable", false, Char10, true).with_rule(company_reference(8)),
        ColumnSpec::new(17, "18.\nGrantor company Corporation Tax reference, if applicable", false, Char10, false).with_rule(company_reference(10)),
        ColumnSpec::new(18, "19.\nGrantor company PAYE reference", false, Char14, false).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(19, "20.\nName of the company whose securities under option", true, Char120, true),
        ColumnSpec::new(20, "21.\nCompany whose securities under option – Address line 1", true, Char27, true),
        ColumnSpec::new(21, "22.\nCompany whose securities under option – Address line 2", false, Char27, false),
        ColumnSpec::new(22, "23.\nCompany whose securities under option – Address line 3", false, Char27, false),
        ColumnSpec::new(23, "24.\nCompany whose securities under option – Address line 4", false, Char18, false),
        ColumnSpec::new(24, "25.\nCompany whose securities under option – Country", false, Char18, false),
        ColumnSpec::new(25, "26.\nCompany whose securities under option – Postcode", false, Char8, false),
        ColumnSpec::new(26, "27.\nCompany Reference Number (CRN) of company whose securities under option", false, Char10, false).with_rule(company_reference(8)),
        ColumnSpec::new(27, "28.\nCorporation Tax reference of company whose securities under option", false, Char10, false).with_rule(Rule::check(Check::NoSpaces)),
        ColumnSpec::new(28, "29.\nPAYE reference of company whose securities under option", false, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(29, "30.\nWere the options exercised?\n(yes/no).\nIf yes go to next question\nIf no go to question 38", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(30, "31.\nTotal number of securities employee entitled to on exercise of the option before any cashless exercise or other adjustment\ne.g. 100.00", false, Num11v2, false).with_rule(Rule::gated(Gate::PreviousYes { from: 29 }, Check::Type)),
        ColumnSpec::new(31, "32.\nIf consideration was given for the securities, the amount given per security\n£\ne.g. 10.1234", false, Num13v4, false).with_rule(Rule::gated(Gate::PreviousYes { from: 29 }, Check::Type)),
        ColumnSpec::new(32, "33.\nIf securities were acquired, Market Value (see note in guidance) of a security on the date of acquisition\n£\ne.g. 10.1234", false, Num13v4, false).with_rule(Rule::gated(Gate::PreviousYes { from: 29 }, Check::Type)),
        ColumnSpec::new(33, "34.\nIf shares were acquired, are the shares listed on a recognised stock exchange?\n(yes/no).\nIf yes go to question 37\nIf no go to next question", false, Char3, false).with_rule(Rule::gated(Gate::PreviousYes { from: 29 }, Check::YesNo)),
        ColumnSpec::new(34, "35.\nIf shares were not listed on a recognised stock exchange, was valuation agreed with HMRC?\n(yes/no)", false, Char3, false).with_rule(Rule::gated(Gate::ColumnNo { column: 33 }, Check::YesNo)),
        ColumnSpec::new(35, "36.\nIf yes, enter the HMRC reference given", false, Char10, false).with_rule(Rule::gated(Gate::ColumnYes { column: 34 }, Check::Type)),
        ColumnSpec::new(36, "37.\nIf the shares were acquired,\ntotal deductible amount excluding\nany consideration given for the securities\n£\ne.g. 10.1234. Then go to question 40", false, Num13v4, false).with_rule(Rule::gated(Gate::ColumnYes { column: 29 }, Check::Type)),
        ColumnSpec::new(37, "38.\nIf securities were not acquired, was money or value received on the release, assignment, cancellation or lapse of the option?\n(yes/no)\nIf yes go to next question\nIf no, no further information required on this event.", false, Char3, true).with_rule(Rule::gated(Gate::ColumnNo { column: 29 }, Check::YesNo)),
        ColumnSpec::new(38, "39.\nIf yes, amount of money or value received\n£\ne.g. 10.1234", false, Num13v4, false).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(39, "40.\nWas a NICs election or agreement operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(40, "41.\nWas PAYE operated?\n(yes/no)", false, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(41, "42.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn acquisition() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", false, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nName of the company whose securities acquired", true, Char120, true),
        ColumnSpec::new(9, "10.\nCompany whose securities acquired – Address line 1", true, Char27, true),
        ColumnSpec::new(10, "11.\nCompany whose securities acquired – Address line 2", false, Char27, false),
        ColumnSpec::new(11, "12.\nCompany whose securities acquired – Address line 3", false, Char27, false),
        ColumnSpec::new(12, "13.\nCompany whose securities acquired – Address line 4", false, Char18, false),
        ColumnSpec::new(13, "14.\nCompany whose securities acquired – Country", false, Char18, false),
        ColumnSpec::new(14, "15.\nCompany whose securities acquired – Postcode", false, Char8, false),
        ColumnSpec::new(15, "16.\nCompany Reference Number (CRN) of company whose securities acquired", false, Char10, false).with_rule(company_reference(8)),
        ColumnSpec::new(16, "17.\nCorporation Tax reference of company whose securities acquired", false, Char10, false).with_rule(Rule::check(Check::NoSpaces)),
        ColumnSpec::new(17, "18.\nPAYE reference of company whose securities acquired", false, Char14, false).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(18, "19.\nDescription of security. Enter a number from 1 to 9. Follow the link in cell A7 for a list of security types", true, Number, true).with_rule(Rule::check(Check::Range { min: 1, max: 9 })),
        ColumnSpec::new(19, "20.\nIf the securities are not shares enter ' no' and go to question 24\nIf the securities are shares, are they part of the largest class of shares in the company?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(20, "21.\nIf the securities are shares, are they listed on a recognised stock exchange?\n(yes/no)\nIf no go to question 22, If yes go to question 24", false, Char3, true).with_rule(Rule::gated(Gate::PreviousYes { from: 19 }, Check::YesNo)),
        ColumnSpec::new(21, "22.\nIf shares were not listed on a recognised stock exchange, was valuation agreed with HMRC?\n(yes/no)", false, Char3, true).with_rule(Rule::gated(Gate::ColumnNo { column: 20 }, Check::YesNo)),
        ColumnSpec::new(22, "23.\nIf yes, enter the HMRC reference given", false, Char10, true).with_rule(Rule::gated(Gate::ColumnYes { column: 21 }, Check::Type)),
        ColumnSpec::new(23, "24.\nNumber of securities acquired\ne.g. 100.00", true, Num11v2, true),
        ColumnSpec::new(24, "25.\nSecurity type. Enter a number from 1 to 3, (follow the link at cell A7 for a list of security types).\nIf restricted go to next question.\nIf convertible go to question 32.\nIf both restricted and convertible enter 1 and answer all questions 26 to 32.\nIf neither restricted nor convertible go to question 29.", true, Number, true).with_rule(Rule::check(Check::Range { min: 1, max: 3 })),
        ColumnSpec::new(25, "26.\nIf restricted, nature of restriction. Enter a number from 1-3, follow the link at cell A7 for a list of restrictions", false, Number, true).with_rule(Rule::gated(restriction_type(&[1]), Check::Range { min: 1, max: 3 })),
        ColumnSpec::new(26, "27.\nIf restricted, length of time of restriction in years (if less than a whole year, enter as a decimal fraction, for example 0.6)", false, Num6v2, true).with_rule(Rule::gated(restriction_type(&[1]), Check::Type)),
        ColumnSpec::new(27, "28.\nIf restricted, actual market value per security at date of acquisition\n£\ne.g. 10.1234\n(no entry should be made if an election to disregard ALL restrictions is operated)", false, Num13v4, true).with_rule(Rule::gated(restriction_type(&[1]), Check::Type)),
        ColumnSpec::new(28, "29.\nUnrestricted market value per security at date of acquisition\n£\ne.g. 10.1234", false, Num13v4, true).with_rule(Rule::gated(restriction_type(&[1, 2]), Check::Type)),
        ColumnSpec::new(29, "30.\nIf restricted, has an election been operated to disregard restrictions?\n(yes/no)", false, Char3, true).with_rule(Rule::gated(restriction_type(&[1]), Check::YesNo)),
        ColumnSpec::new(30, "31.\nIf an election has been operated to disregard restrictions, have all or some been disregarded?\n(enter all or some)", false, Char4, true).with_rule(Rule::gated(Gate::ColumnYes { column: 29 }, Check::OneOf { tokens: vec!["all".to_string(), "some".to_string()] })),
        ColumnSpec::new(31, "32.\nIf convertible, market value per security ignoring conversion rights\n£\ne.g. 10.1234", false, Num13v4, true).with_rule(Rule::gated(restriction_type(&[1, 3]), Check::Type)),
        ColumnSpec::new(32, "33.\nTotal price paid for the securities\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(33, "34.\nWas the price paid in pounds sterling?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(34, "35.\nWas there an artificial reduction in value on acquisition?\n(yes/no)\nIf 'yes' go to question 36, if 'No' go to question 37", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(35, "36.\nIf there was an artificial reduction in value, nature of the artificial reduction\nEnter a number from 1 to 3. Follow the link in cell A7 for a list of types of artificial restriction", false, Number, true).with_rule(Rule::gated(Gate::ColumnYes { column: 34 }, Check::Range { min: 1, max: 3 })),
        ColumnSpec::new(36, "37.\nWere shares acquired under an employee shareholder arrangement?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(37, "38.\nIf shares were acquired under an employee shareholder arrangement, was the total actual market value (AMV) of shares £2,000 or more?\n(yes/no)", false, Char3, true).with_rule(Rule::gated(Gate::ColumnYes { column: 36 }, Check::YesNo)),
        ColumnSpec::new(38, "39.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(39, "40.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn restricted_securities() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes, enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance Number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", true, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nDate securities originally acquired\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(9, "10.\nNumber of securities originally acquired\ne.g. 100.00", true, Num11v2, true),
        ColumnSpec::new(10, "11.\nFor disposals or lifting of restrictions, total chargeable amount\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(11, "12.\nFor lifting of restrictions, are the shares listed on a recognised stock exchange?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(12, "13.\nIf shares were not listed on a recognised stock exchange, was valuation agreed with HMRC?\n(yes/no)", false, Char3, true).with_rule(Rule::gated(Gate::ColumnNo { column: 11 }, Check::YesNo)),
        ColumnSpec::new(13, "14.\nIf yes, enter the HMRC reference given", false, Char10, true).with_rule(Rule::gated(Gate::ColumnYes { column: 12 }, Check::Type)),
        ColumnSpec::new(14, "15.\nFor variations, date of variation\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(15, "16.\nFor variations, Actual Market Value (AMV) per security directly before variation\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(16, "17.\nFor variations, Actual Market Value (AMV) per security directly after variation\n£\ne.g. 10.1234\n", true, Num13v4, true),
        ColumnSpec::new(17, "18.\nHas a National Insurance Contribution election or agreement been operated (yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(18, "19.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(19, "20.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn other_benefits() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", true, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nDate securities originally acquired\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(9, "10.\nNumber of securities originally acquired\ne.g. 100.00", true, Num11v2, true),
        ColumnSpec::new(10, "11.\nAmount or market value of the benefit\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(11, "12.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(12, "13.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn convertible() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes, enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", true, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nDate securities originally acquired\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(9, "10.\nNumber of securities originally acquired\ne.g. 100.00", true, Num11v2, true),
        ColumnSpec::new(10, "11.\nFor receipt of money or value, enter amount or market value of the benefit\n£\ne.g. 10.1234\nThen go to question 14", true, Num13v4, true),
        ColumnSpec::new(11, "12.\nFor conversion, disposal or release of entitlement to convert, total chargeable amount\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(12, "13.\nHas a National Insurance Contribution election or agreement been operated (yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(13, "14.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(14, "15.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK? (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn notional() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes, enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", true, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nDate securities originally acquired\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(9, "10.\nNumber of securities originally acquired\ne.g 100.00", true, Num11v2, true),
        ColumnSpec::new(10, "11.\nAmount of notional loan discharged\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(11, "12.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(12, "13.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK? (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn enhancement() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes, enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", true, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nDate securities originally acquired\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(9, "10.\nNumber of securities originally acquired\ne.g. 100.00", true, Num11v2, true),
        ColumnSpec::new(10, "11.\nTotal unrestricted market value (UMV) on 5th April or date of disposal if earlier\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(11, "12.\nTotal UMV ignoring effect of artificial increase on date of taxable event\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(12, "13.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(13, "14.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK? (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}

fn sold() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(0, "1.\nDate of event\n(yyyy-mm-dd)", true, Date, true),
        ColumnSpec::new(1, "2.\nIs the event in relation to a disclosable tax avoidance scheme?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(2, "3.\nIf yes, enter the eight-digit scheme reference number (SRN)", false, Num8, true).with_rule(Rule::gated(Gate::Predecessor, Check::Type)),
        ColumnSpec::new(3, "4.\nEmployee first name", true, Char35, true),
        ColumnSpec::new(4, "5.\nEmployee second name\n(if applicable)", false, Char35, false),
        ColumnSpec::new(5, "6.\nEmployee last name", true, Char35, true),
        ColumnSpec::new(6, "7.\nNational Insurance number\n(if applicable)", false, Char9, true).with_rule(Rule::check(Check::NationalInsurance)),
        ColumnSpec::new(7, "8.\nPAYE reference of employing company", true, Char14, true).with_rule(Rule::check(Check::PayeReference)),
        ColumnSpec::new(8, "9.\nNumber of securities originally acquired\ne.g. 100.00", true, Num11v2, true),
        ColumnSpec::new(9, "10.\nAmount received on disposal\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(10, "11.\nTotal market value on disposal\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(11, "12.\nExpenses incurred\n£\ne.g. 10.1234", true, Num13v4, true),
        ColumnSpec::new(12, "13.\nWas PAYE operated?\n(yes/no)", true, Char3, true).with_rule(yes_no()),
        ColumnSpec::new(13, "14.\nWas any adjustment made for amounts subject to apportionment for residence or duties outside the UK? (yes/no)", true, Char3, true).with_rule(yes_no()),
    ]
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_sheets_in_template_order() {
        let spec = document_spec().unwrap();
        assert_eq!(
            spec.sheet_names(),
            vec![
                "Other_Grants_V3",
                "Other_Options_V3",
                "Other_Acquisition_V3",
                "Other_RestrictedSecurities_V3",
                "Other_OtherBenefits_V3",
                "Other_Convertible_V3",
                "Other_Notional_V3",
                "Other_Enhancement_V3",
                "Other_Sold_V3",
            ]
        );
        for (index, sheet) in spec.sheets().iter().enumerate() {
            assert_eq!(sheet.expected_index, index);
            assert_eq!(sheet.header_row_index, 8);
        }
    }

    #[test]
    fn test_column_counts() {
        let spec = document_spec().unwrap();
        let counts: Vec<usize> = spec.sheets().iter().map(|s| s.column_count()).collect();
        assert_eq!(counts, vec![4, 42, 40, 20, 13, 15, 13, 14, 14]);
    }

    #[test]
    fn test_headers_start_with_question_number() {
        let spec = document_spec().unwrap();
        for sheet in spec.sheets() {
            for column in sheet.columns() {
                let prefix = format!("{}.", column.entry());
                assert!(
                    column.header.starts_with(&prefix),
                    "{} column {} has header {:?}",
                    sheet.name,
                    column.position,
                    column.header
                );
            }
        }
    }

    #[test]
    fn test_restricted_securities_questions_17_and_18_are_distinct() {
        let spec = document_spec().unwrap();
        let sheet = spec.sheet("Other_RestrictedSecurities_V3").unwrap();
        assert_eq!(sheet.column(16).unwrap().data_type, Num13v4);
        assert!(sheet.column(17).unwrap().header.starts_with("18."));
        assert_eq!(sheet.column(17).unwrap().rule, Some(yes_no()));
    }

    #[test]
    fn test_gated_columns_are_not_required_on_their_own() {
        let spec = document_spec().unwrap();
        for sheet in spec.sheets() {
            for column in sheet.columns() {
                if column.rule.as_ref().is_some_and(|rule| rule.gate.is_some()) {
                    assert!(!column.required, "{} column {}", sheet.name, column.position);
                }
            }
        }
    }
}

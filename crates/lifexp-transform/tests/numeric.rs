//! Tests for field-level normalization helpers.

use lifexp_transform::{TransformError, clean_value, clean_year, format_numeric, parse_f64};

#[test]
fn clean_value_parses_plain_numbers() {
    assert_eq!(clean_value("80.1"), Some(80.1));
    assert_eq!(clean_value(" 21.5 "), Some(21.5));
    assert_eq!(clean_value("-3.2"), Some(-3.2));
}

#[test]
fn clean_value_drops_annotation_flags() {
    assert_eq!(clean_value("81.2 e"), Some(81.2));
    assert_eq!(clean_value("79.9 ep"), Some(79.9));
    assert_eq!(clean_value("80.1e"), Some(80.1));
}

#[test]
fn clean_value_treats_sentinel_as_missing() {
    assert_eq!(clean_value(":"), None);
    assert_eq!(clean_value(": "), None);
    assert_eq!(clean_value(":e"), None);
    assert_eq!(clean_value(": e"), None);
}

#[test]
fn clean_value_rejects_unparseable_remainders() {
    // A lone dash survives the character strip but is not a number.
    assert_eq!(clean_value("-"), None);
    assert_eq!(clean_value(""), None);
    assert_eq!(clean_value("   "), None);
    assert_eq!(clean_value("n/a"), None);
    assert_eq!(clean_value("1.2.3"), None);
}

#[test]
fn clean_year_trims_and_parses() {
    assert_eq!(clean_year("2019").expect("plain year"), 2019);
    assert_eq!(clean_year(" 2020 ").expect("padded year"), 2020);
}

#[test]
fn clean_year_fails_hard_on_garbage() {
    let error = clean_year("20x9").expect_err("not a year");
    match error {
        TransformError::MalformedYear { header } => assert_eq!(header, "20x9"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(clean_year("").is_err());
}

#[test]
fn parse_f64_handles_empty_and_invalid() {
    assert_eq!(parse_f64("80.1"), Some(80.1));
    assert_eq!(parse_f64(" 74.2 "), Some(74.2));
    assert_eq!(parse_f64(""), None);
    assert_eq!(parse_f64("  "), None);
    assert_eq!(parse_f64("abc"), None);
}

#[test]
fn format_numeric_strips_trailing_zeros() {
    assert_eq!(format_numeric(10.5), "10.5");
    assert_eq!(format_numeric(10.0), "10");
    assert_eq!(format_numeric(80.1), "80.1");
    assert_eq!(format_numeric(-3.0), "-3");
}

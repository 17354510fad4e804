use super::*;

#[test]
fn test_compat_extracts_signed_single_digit_decimals() {
    assert_eq!(
        NumberPattern::Compat.extract("text -0.5foo1.2bar"),
        vec!["-0.5", "1.2"]
    );
}

#[test]
fn test_compat_does_not_match_multi_digit_integer_part() {
    assert_eq!(NumberPattern::Compat.extract("12.34"), vec!["2.34"]);
    assert_eq!(NumberPattern::Compat.extract("-10.5"), vec!["0.5"]);
}

#[test]
fn test_compat_ignores_integers_and_bare_points() {
    assert!(NumberPattern::Compat.extract("1 2 3 .5 7.").is_empty());
}

#[test]
fn test_decimal_keeps_whole_integer_part() {
    assert_eq!(
        NumberPattern::Decimal.extract("12.34 -100.5 0.25"),
        vec!["12.34", "-100.5", "0.25"]
    );
}

#[test]
fn test_default_pattern_is_compat() {
    assert_eq!(NumberPattern::default(), NumberPattern::Compat);
    assert_eq!(NumberPattern::Compat.name(), "compat");
}

#[test]
fn test_vector_record_len() {
    let record = VectorRecord {
        cui: "C1234567".to_string(),
        values: vec!["0.1".to_string(), "0.2".to_string()],
    };
    assert_eq!(record.len(), 2);
    assert!(!record.is_empty());
}

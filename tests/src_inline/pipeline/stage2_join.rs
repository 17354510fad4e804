use super::*;
use crate::pipeline::stage1_scores::build_score_table;

fn table() -> ScoreTable {
    build_score_table(&[
        "42\t0.913\tC1234567\tacute myocardial infarction",
        "3\t0.400\tC7654321\tfever",
    ])
    .table
}

#[test]
fn test_parse_vector_line_known_cui() {
    let outcome = parse_vector_line("C1234567 0.1 0.2 -0.3 rest", &table(), NumberPattern::Compat);
    assert_eq!(
        outcome,
        LineParse::Record(VectorRecord {
            cui: "C1234567".to_string(),
            values: vec!["0.1".to_string(), "0.2".to_string(), "-0.3".to_string()],
        })
    );
}

#[test]
fn test_parse_vector_line_unknown_cui() {
    let outcome = parse_vector_line("C9999999 0.1 0.2", &table(), NumberPattern::Compat);
    assert_eq!(outcome, LineParse::UnknownCui);
}

#[test]
fn test_parse_vector_line_malformed() {
    let t = table();
    assert_eq!(
        parse_vector_line("C1234567", &t, NumberPattern::Compat),
        LineParse::Malformed
    );
    assert_eq!(
        parse_vector_line(" C1234567 0.1", &t, NumberPattern::Compat),
        LineParse::Malformed
    );
    assert_eq!(
        parse_vector_line("word 0.1 0.2", &t, NumberPattern::Compat),
        LineParse::Malformed
    );
}

#[test]
fn test_parse_vector_line_without_separator() {
    let LineParse::Record(record) =
        parse_vector_line("C7654321-0.5foo1.2bar", &table(), NumberPattern::Compat)
    else {
        panic!("expected record");
    };
    assert_eq!(record.values, vec!["-0.5", "1.2"]);
}

#[test]
fn test_parse_vector_line_without_numbers_is_empty_record() {
    let LineParse::Record(record) =
        parse_vector_line("C1234567 nothing here", &table(), NumberPattern::Compat)
    else {
        panic!("expected record");
    };
    assert!(record.is_empty());
}

#[test]
fn test_parse_vector_line_pattern_choice() {
    let t = table();
    let line = "C1234567 12.34 0.5";
    let LineParse::Record(compat) = parse_vector_line(line, &t, NumberPattern::Compat) else {
        panic!("expected record");
    };
    let LineParse::Record(decimal) = parse_vector_line(line, &t, NumberPattern::Decimal) else {
        panic!("expected record");
    };
    assert_eq!(compat.values, vec!["2.34", "0.5"]);
    assert_eq!(decimal.values, vec!["12.34", "0.5"]);
}

#[test]
fn test_join_vectors_preserves_file_order() {
    let lines = [
        "C7654321 0.9 0.8",
        "C9999999 0.1 0.1",
        "garbage",
        "C1234567 0.1 0.2",
    ];
    let out = join_vectors(&lines, &table(), NumberPattern::Compat);
    let cuis: Vec<&str> = out.vectors.iter().map(|v| v.cui.as_str()).collect();
    assert_eq!(cuis, vec!["C7654321", "C1234567"]);
    assert_eq!(out.stats.lines_read, 4);
    assert_eq!(out.stats.parsed, 2);
    assert_eq!(out.stats.skipped_unknown_cui, 1);
    assert_eq!(out.stats.skipped_malformed, 1);
}

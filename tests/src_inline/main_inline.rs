use super::*;

#[test]
fn test_parse_args_defaults_to_matrix_compat() {
    let args = Args::try_parse_from(["kira-vcluster", "ltc.txt", "vectors.txt"]).unwrap();
    let config = build_config(args);
    assert_eq!(config.end, PipelineEnd::Matrix);
    assert_eq!(config.number_pattern, NumberPattern::Compat);
    assert_eq!(config.scores_path, PathBuf::from("ltc.txt"));
    assert_eq!(config.vectors_path, PathBuf::from("vectors.txt"));
}

#[test]
fn test_parse_args_table_only_and_decimal() {
    let args = Args::try_parse_from([
        "kira-vcluster",
        "ltc.txt",
        "vectors.txt",
        "--table-only",
        "--number-pattern",
        "decimal",
        "--summary",
        "run.json",
    ])
    .unwrap();
    assert_eq!(args.summary, Some(PathBuf::from("run.json")));
    let config = build_config(args);
    assert_eq!(config.end, PipelineEnd::TableOnly);
    assert_eq!(config.number_pattern, NumberPattern::Decimal);
}

#[test]
fn test_parse_args_missing_vectors_file() {
    let err = Args::try_parse_from(["kira-vcluster", "ltc.txt"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_parse_args_rejects_unknown_pattern() {
    assert!(
        Args::try_parse_from([
            "kira-vcluster",
            "ltc.txt",
            "vectors.txt",
            "--number-pattern",
            "float",
        ])
        .is_err()
    );
}

#[test]
fn test_usage_names_both_inputs() {
    let text = usage();
    assert!(text.contains("LTC_FILE"));
    assert!(text.contains("CUI_VECTORS_FILE"));
}

#[test]
fn test_run_reports_missing_paths() {
    let args = Args::try_parse_from([
        "kira-vcluster",
        "/nonexistent/kira_vcluster/ltc.txt",
        "/nonexistent/kira_vcluster/vectors.txt",
    ])
    .unwrap();
    let err = run(args).unwrap_err();
    assert!(err.contains("/nonexistent/kira_vcluster/ltc.txt not found."));
    assert!(err.contains("/nonexistent/kira_vcluster/vectors.txt not found."));
    assert!(err.find("not found.").unwrap() < err.find("Usage").unwrap());
}

use pretty_assertions::assert_eq;

use prql::{compile, compile_with, CompileConfig, ErrorKind};

#[test]
fn test_compile_reports_unsupported_until_parser_lands() {
    let err = compile("from employees | take 5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn test_compile_rejects_oversized_source() {
    let config = CompileConfig {
        max_source_len: 16,
        ..CompileConfig::default()
    };

    let err = compile_with("from a_table_name_well_beyond_the_limit", &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimit);
    assert!(err.to_string().contains("16"));
}

#[test]
fn test_compile_accepts_source_at_the_limit() {
    let source = "from x";
    let config = CompileConfig {
        max_source_len: source.len(),
        ..CompileConfig::default()
    };

    // In-limit input gets past the guard and fails later, in the stub
    // parser.
    let err = compile_with(source, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn test_limit_counts_characters_not_bytes() {
    let source = "from caffè";
    assert_eq!(source.chars().count(), 10);

    let config = CompileConfig {
        max_source_len: 10,
        ..CompileConfig::default()
    };
    let err = compile_with(source, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn test_empty_source_is_not_an_error_at_the_lexer_boundary() {
    let err = compile("").unwrap_err();
    // Totality: the failure comes from the unimplemented parser, never from
    // tokenization.
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

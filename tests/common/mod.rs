#![allow(dead_code)]

use lox_scanner::{Scan, scan};

/// Scan `source` and render each token as its output line.
pub fn token_lines(source: &str) -> Vec<String> {
    scan(source).tokens.iter().map(ToString::to_string).collect()
}

/// Scan `source` and render each diagnostic as its output line.
pub fn error_lines(source: &str) -> Vec<String> {
    scan(source).errors.iter().map(ToString::to_string).collect()
}

/// Assert the structural guarantees every scan result must hold.
pub fn assert_well_formed(source: &str, result: &Scan) {
    let (last, rest) = result
        .tokens
        .split_last()
        .expect("scan always yields at least the EOF token");

    assert_eq!(last.kind, lox_scanner::TokenKind::Eof, "source: {source:?}");
    assert!(last.lexeme.is_empty());
    assert!(last.literal.is_none());
    assert!(
        rest.iter().all(|t| t.kind != lox_scanner::TokenKind::Eof),
        "EOF must only appear last\nsource: {source:?}"
    );
    assert!(
        result.tokens.windows(2).all(|w| w[0].line <= w[1].line),
        "lines must be non-decreasing\nsource: {source:?}"
    );
}

#![allow(dead_code)]

use calc_rs::{Expr, format, parse_str};

pub fn roundtrip(input: &str) {
    let expr = parse_str(input).expect("parse failed");
    let output = format(&expr);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format an AST, parse it back, assert structural equality.
pub fn assert_ast_roundtrip(original: &Expr) {
    let formatted = format(original);
    let parsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert_eq!(
        &parsed, original,
        "tree mismatch\n--- formatted ---\n{formatted}"
    );
}

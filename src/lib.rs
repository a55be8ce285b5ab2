//! Arithmetic expression lexer, parser, evaluator, and formatter.
//!
//! A typed AST for four-operator integer arithmetic with tools to
//! parse expressions from text, evaluate them with true division,
//! and format them back to canonical syntax.
//!
//! # Quick start
//!
//! ## Evaluate an expression
//!
//! ```
//! use calc_rs::eval_str;
//!
//! let result = eval_str("3 + 4 * (2 - 1)").unwrap();
//! assert_eq!(result, 7.0);
//! ```
//!
//! ## Parse and re-format an expression
//!
//! ```
//! use calc_rs::{format, parse_str};
//!
//! let expr = parse_str("(2+3) * 4").unwrap();
//! assert_eq!(format(&expr), "(2 + 3) * 4");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate. The evaluator widens i64 literals to
// f64 and compares against exact zero, so the two float
// lints are off crate-wide.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]

pub mod ast;
pub mod evaluator;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{BinOp, Expr};
pub use evaluator::{EvalError, evaluate};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, Lexer, tokenize};
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering lexing, parsing, and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// An evaluation error.
    #[error("{0}")]
    Eval(#[from] EvalError),
}

/// Parse an expression source string into its AST in one step.
pub fn parse_str(input: &str) -> Result<Expr, Error> {
    Parser::new(Lexer::new(input))?.parse_expression()
}

/// Parse and evaluate an expression source string in one step.
pub fn eval_str(input: &str) -> Result<f64, Error> {
    let expr = parse_str(input)?;
    Ok(evaluate(&expr)?)
}

use std::fmt;

use crate::Error;
use crate::ast::{BinOp, Expr};
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected a specific token, found something else or end of input.
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// Expected the start of an operand (an integer or `(`).
    ExpectedOperand { found: TokenKind },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                expected,
                found: TokenKind::EndOfInput,
            } => {
                write!(f, "expected '{expected}', got end of input")
            }
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected '{expected}', got '{found}'")
            }
            Self::ExpectedOperand {
                found: TokenKind::EndOfInput,
            } => {
                write!(f, "expected a number or '(', got end of input")
            }
            Self::ExpectedOperand { found } => {
                write!(f, "expected a number or '(', got '{found}'")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Recursive-descent parser with one token of lookahead.
///
/// Pulls tokens from the lexer on demand, so the input is never
/// tokenized further than the grammar requires.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Construct a parser primed with the first token from `lexer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse one complete expression.
    ///
    /// Tokens after the expression are neither consumed nor rejected,
    /// so trailing well-formed input is silently ignored. Trailing
    /// text that cannot be lexed still errors, because the lookahead
    /// past the expression has already been pulled.
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed expression or on input the
    /// lexer rejects.
    pub fn parse_expression(mut self) -> Result<Expr, Error> {
        self.expr()
    }

    fn advance(&mut self) -> Result<(), Error> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn eat(&mut self, expected: TokenKind) -> Result<(), Error> {
        if self.current.kind == expected {
            self.advance()
        } else {
            Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    expected,
                    found: self.current.kind,
                },
                span: self.current.span,
            }
            .into())
        }
    }

    /// `expr := term (('+' | '-') term)*`
    fn expr(&mut self) -> Result<Expr, Error> {
        let mut node = self.term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance()?;
            let right = self.term()?;
            node = Expr::binary(op, node, right);
        }

        Ok(node)
    }

    /// `term := factor (('*' | '/') factor)*`
    fn term(&mut self) -> Result<Expr, Error> {
        let mut node = self.factor()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance()?;
            let right = self.factor()?;
            node = Expr::binary(op, node, right);
        }

        Ok(node)
    }

    /// `factor := INTEGER | '(' expr ')'`
    fn factor(&mut self) -> Result<Expr, Error> {
        match self.current.kind {
            TokenKind::Integer(value) => {
                self.advance()?;
                Ok(Expr::literal(value))
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(inner)
            }
            found => Err(ParseError {
                kind: ParseErrorKind::ExpectedOperand { found },
                span: self.current.span,
            }
            .into()),
        }
    }
}

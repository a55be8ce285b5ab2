use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Integer literal that does not fit in an `i64`.
    IntegerTooLarge { literal: String },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::IntegerTooLarge { literal } => {
                write!(f, "integer literal too large: {literal}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize an expression string into its full token sequence.
///
/// Drains a [`Lexer`] eagerly; the trailing [`TokenKind::EndOfInput`]
/// token is not included.
///
/// # Errors
///
/// Returns `LexError` on a character that cannot start a token or an
/// integer literal that overflows.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::EndOfInput {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

/// On-demand lexer over an expression string.
///
/// Produces one token per [`next_token`](Self::next_token) call and
/// never scans past the token being read. Once the input is exhausted
/// every further call yields [`TokenKind::EndOfInput`].
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Read the next token, skipping any whitespace before it.
    ///
    /// On an error the cursor stays on the offending character, so a
    /// failed lexer reports the same error again rather than resuming
    /// mid-input.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on a character that cannot start a token or
    /// an integer literal that overflows.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Ok(self.make_token(TokenKind::EndOfInput));
        };

        match ch {
            b'0'..=b'9' => self.read_integer(),
            b'+' => Ok(self.single_char(TokenKind::Plus)),
            b'-' => Ok(self.single_char(TokenKind::Minus)),
            b'*' => Ok(self.single_char(TokenKind::Star)),
            b'/' => Ok(self.single_char(TokenKind::Slash)),
            b'(' => Ok(self.single_char(TokenKind::LParen)),
            b')' => Ok(self.single_char(TokenKind::RParen)),
            _ => Err(LexError {
                kind: LexErrorKind::UnexpectedCharacter(self.current_char()),
                span: self.span(),
            }),
        }
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    const fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            span: self.span(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            if self.input[self.pos] == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let token = self.make_token(kind);
        self.advance();
        token
    }

    fn read_integer(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }

        let digits = String::from_utf8_lossy(&self.input[start..self.pos]);
        match digits.parse::<i64>() {
            Ok(value) => Ok(Token {
                kind: TokenKind::Integer(value),
                span,
            }),
            Err(_) => Err(LexError {
                kind: LexErrorKind::IntegerTooLarge {
                    literal: digits.into_owned(),
                },
                span,
            }),
        }
    }

    /// Decode the character at the cursor. The cursor only ever
    /// advances over ASCII bytes, so it always sits on a character
    /// boundary.
    fn current_char(&self) -> char {
        String::from_utf8_lossy(&self.input[self.pos..])
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_expression() {
        let tokens = tokenize("3 + 4").expect("should tokenize");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer(3),
                TokenKind::Plus,
                TokenKind::Integer(4),
            ]
        );
    }

    #[test]
    fn all_operators() {
        let tokens = tokenize("1 + 2 - 3 * 4 / 5").expect("should tokenize");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer(1),
                TokenKind::Plus,
                TokenKind::Integer(2),
                TokenKind::Minus,
                TokenKind::Integer(3),
                TokenKind::Star,
                TokenKind::Integer(4),
                TokenKind::Slash,
                TokenKind::Integer(5),
            ]
        );
    }

    #[test]
    fn parentheses() {
        let tokens = tokenize("(1)").expect("should tokenize");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::Integer(1),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn multi_digit_integer() {
        let tokens = tokenize("12345").expect("should tokenize");
        assert_eq!(tokens[0].kind, TokenKind::Integer(12345));
    }

    #[test]
    fn no_whitespace_between_tokens() {
        let tokens = tokenize("1+2*3").expect("should tokenize");
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn whitespace_skipped() {
        let tokens = tokenize("  1\t+\n 2  ").expect("should tokenize");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer(1),
                TokenKind::Plus,
                TokenKind::Integer(2),
            ]
        );
    }

    #[test]
    fn empty_input() {
        let tokens = tokenize("").expect("should tokenize");
        assert!(tokens.is_empty());
    }

    #[test]
    fn only_whitespace() {
        let tokens = tokenize("   \t  ").expect("should tokenize");
        assert!(tokens.is_empty());
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("7");
        assert_eq!(
            lexer.next_token().expect("first token").kind,
            TokenKind::Integer(7)
        );
        for _ in 0..3 {
            assert_eq!(
                lexer.next_token().expect("end of input").kind,
                TokenKind::EndOfInput
            );
        }
    }

    #[test]
    fn tokens_produced_on_demand() {
        let mut lexer = Lexer::new("12 34");
        assert_eq!(
            lexer.next_token().expect("first token").kind,
            TokenKind::Integer(12)
        );
        assert_eq!(
            lexer.next_token().expect("second token").kind,
            TokenKind::Integer(34)
        );
    }

    #[test]
    fn span_tracking() {
        let tokens = tokenize("1 +\n 23").expect("should tokenize");
        assert_eq!(tokens[0].span, Span { line: 1, column: 1 });
        assert_eq!(tokens[1].span, Span { line: 1, column: 3 });
        assert_eq!(tokens[2].span, Span { line: 2, column: 2 });
    }

    #[test]
    fn unexpected_character() {
        let err = tokenize("3 + @").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.span, Span { line: 1, column: 5 });
    }

    #[test]
    fn unexpected_character_multibyte() {
        let err = tokenize("1 + \u{2665}").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('\u{2665}'));
    }

    #[test]
    fn letters_rejected() {
        let err = tokenize("x + 1").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('x'));
    }

    #[test]
    fn decimal_point_rejected() {
        let err = tokenize("3.14").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('.'));
        assert_eq!(err.span, Span { line: 1, column: 2 });
    }

    #[test]
    fn integer_at_i64_max() {
        let tokens = tokenize("9223372036854775807").expect("should tokenize");
        assert_eq!(tokens[0].kind, TokenKind::Integer(i64::MAX));
    }

    #[test]
    fn integer_too_large() {
        let err = tokenize("9223372036854775808").unwrap_err();
        assert!(matches!(
            err.kind,
            LexErrorKind::IntegerTooLarge { ref literal }
            if literal == "9223372036854775808"
        ));
    }

    #[test]
    fn error_leaves_cursor_in_place() {
        let mut lexer = Lexer::new("@");
        let first = lexer.next_token().unwrap_err();
        let second = lexer.next_token().unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn error_message_includes_span() {
        let err = tokenize("1 + $").unwrap_err();
        assert_eq!(err.to_string(), "unexpected character: $ at line 1, column 5");
    }
}

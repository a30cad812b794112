//! Lexer (tokenizer) for Trilang source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. The scan is a single forward pass with one character of
//! lookahead, so two-character operators are matched greedily before their
//! one-character prefixes.

use super::ast::SourceLocation;
use super::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error(
        "Lexer error at line {}, column {}: unexpected character '{character}' at offset {}",
        .location.line, .location.column, .location.offset
    )]
    UnexpectedCharacter {
        character: char,
        location: SourceLocation,
    },

    #[error(
        "Lexer error at line {}, column {}: integer literal {literal} does not fit in 32 bits",
        .location.line, .location.column
    )]
    IntegerOverflow {
        literal: String,
        location: SourceLocation,
    },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnexpectedCharacter { location, .. }
            | LexError::IntegerOverflow { location, .. } => *location,
        }
    }
}

/// Lexer for Trilang source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, TokenKind>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords: TokenKind::KEYWORDS.iter().copied().collect(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned sequence always ends with exactly one `EndOfFile` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::end_of_file(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        tracing::debug!(tokens = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(Token::end_of_file(loc));
        };

        let kind = match ch {
            c if c.is_ascii_digit() => return self.number_literal(c, loc),
            c if c.is_alphabetic() => return Ok(self.identifier_or_keyword(c, loc)),

            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,

            '=' => self.either('=', TokenKind::EqualsEquals, TokenKind::Equals),
            '<' => self.either('=', TokenKind::LessThanOrEqual, TokenKind::LessThan),
            '>' => self.either('=', TokenKind::GreaterThanOrEqual, TokenKind::GreaterThan),
            '&' => self.either('&', TokenKind::AmpersandAmpersand, TokenKind::Ampersand),
            '|' => self.either('|', TokenKind::PipePipe, TokenKind::Pipe),
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEquals
            }

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    location: loc,
                })
            }
        };

        Ok(Token::new(kind, loc))
    }

    /// Consume `second` if it comes next and return `long`, otherwise `short`.
    fn either(&mut self, second: char, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            long
        } else {
            short
        }
    }

    /// Parse numeric literal (decimal integers only)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Only digits were collected, so the parse can fail on overflow alone.
        let value = num_str.parse::<i32>().map_err(|_| LexError::IntegerOverflow {
            literal: num_str.clone(),
            location: loc,
        })?;

        Ok(Token::number(value, loc))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match self.keywords.get(ident.as_str()) {
            Some(&kind) => Token::new(kind, loc),
            None => Token::identifier(ident, loc),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.position, self.line, self.column)
    }
}

//! Forward-only cursor over a token sequence
//!
//! The cursor never moves past the `EndOfFile` sentinel, so [`TokenCursor::current`]
//! is always valid and the parser can look ahead without bounds checks.

use super::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenCursor {
    /// Wrap a token sequence, appending the sentinel if it is missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfFile)) {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::end_of_file(location));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// True when the current token has the given kind. Never consumes.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    /// Consume the current token if it has the given kind.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        self.check_token(kind).is_some()
    }

    /// Consume and return the current token if it has the given kind.
    pub fn check_token(&mut self, kind: TokenKind) -> Option<&Token> {
        if !self.peek_is(kind) {
            return None;
        }
        let index = self.position;
        self.advance();
        Some(&self.tokens[index])
    }

    pub fn has_ended(&self) -> bool {
        self.position >= self.tokens.len() || self.current().is(TokenKind::EndOfFile)
    }

    fn advance(&mut self) {
        if !self.has_ended() {
            self.position += 1;
        }
    }
}

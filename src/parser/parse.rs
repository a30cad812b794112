//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function definitions, parameters and return types
//! - `statements`: blocks, variable declarations and return statements
//! - `expressions`: table-driven precedence climbing for binary operators
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Failure policy
//!
//! The first missing token or sub-production aborts the whole parse with a
//! [`ParseError`]. There is no recovery and no partial tree.

use crate::parser::ast::*;
use crate::parser::cursor::TokenCursor;
use crate::parser::expressions::{OperatorInfo, BINARY_OPERATORS};
use crate::parser::lexer::{LexError, Lexer};
use crate::parser::token::{Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Parse error at line {}, column {}: {message}, found {found}",
    .location.line, .location.column
)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
    /// The token the parser was looking at when it gave up.
    pub found: Token,
}

/// Recursive descent parser for Trilang
pub struct Parser {
    pub(crate) cursor: TokenCursor,
    pub(crate) operators: &'static [OperatorInfo],
    /// Expression productions currently being parsed.
    pub(crate) depth: usize,
}

impl Parser {
    /// Tokenize `source` and prepare to parse it.
    pub fn new(source: &str) -> Result<Self, LexError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            operators: BINARY_OPERATORS,
            depth: 0,
        }
    }

    /// Parse the entire program: a sequence of function definitions.
    pub fn parse(&mut self) -> Result<SyntaxTree, ParseError> {
        let mut functions = Vec::new();

        while !self.cursor.has_ended() {
            match self.parse_function_definition()? {
                Some(function) => functions.push(function),
                None => return Err(self.error("expected a function definition")),
            }
        }

        tracing::debug!(functions = functions.len(), "parsed syntax tree");
        Ok(SyntaxTree::new(functions))
    }

    // ===== Helper methods =====

    pub(crate) fn error(&self, message: &str) -> ParseError {
        let found = self.cursor.current().clone();
        ParseError {
            message: message.to_string(),
            location: found.location,
            found,
        }
    }

    pub(crate) fn expect_token(&mut self, kind: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.cursor.check(kind) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    pub(crate) fn expect_colon(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Colon, "expected a colon")
    }

    pub(crate) fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Semicolon, "expected a semicolon")
    }

    /// Consume an identifier if one is next. A token without its name is
    /// reported where it stands.
    pub(crate) fn try_parse_identifier(&mut self) -> Result<Option<Identifier>, ParseError> {
        if !self.cursor.peek_is(TokenKind::Identifier) {
            return Ok(None);
        }
        let Some(name) = self.cursor.current().as_str().map(Identifier::new) else {
            return Err(self.error("identifier token has no name"));
        };
        self.cursor.check(TokenKind::Identifier);
        Ok(Some(name))
    }

    pub(crate) fn expect_identifier(&mut self, message: &str) -> Result<Identifier, ParseError> {
        match self.try_parse_identifier()? {
            Some(identifier) => Ok(identifier),
            None => Err(self.error(message)),
        }
    }
}

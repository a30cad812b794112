//! Statement parsing implementation
//!
//! This module handles parsing of blocks and the statements they contain:
//!
//! - Variable declarations: `var x: int = 42;`
//! - Return statements: `return x + 1;`
//!
//! # Grammar
//!
//! ```text
//! block     ::= "{" statement* "}"
//! statement ::= var_decl | return_stmt
//! var_decl  ::= "var" identifier ":" identifier "=" expression ";"
//! return    ::= "return" expression ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a block including its braces
    pub(crate) fn parse_block(&mut self) -> Result<BlockStatement, ParseError> {
        self.expect_token(TokenKind::OpenBrace, "expected an open brace")?;

        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::CloseBrace) {
            if self.cursor.has_ended() {
                return Err(self.error("expected a close brace"));
            }
            statements.push(self.parse_statement()?);
        }

        Ok(BlockStatement::new(statements))
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if let Some(statement) = self.try_parse_variable_declaration()? {
            return Ok(statement);
        }

        if let Some(statement) = self.try_parse_return_statement()? {
            return Ok(statement);
        }

        Err(self.error("expected a statement"))
    }

    fn try_parse_variable_declaration(&mut self) -> Result<Option<Statement>, ParseError> {
        if !self.cursor.check(TokenKind::Var) {
            return Ok(None);
        }

        let name = self.expect_identifier("expected a variable name")?;
        self.expect_colon()?;
        let ty = self.expect_identifier("expected a type")?;
        self.expect_token(TokenKind::Equals, "expected an equals sign")?;
        let initializer = self.parse_expression("expected an expression")?;
        self.expect_semicolon()?;

        Ok(Some(Statement::VariableDeclaration {
            name,
            ty,
            initializer: Some(initializer),
        }))
    }

    fn try_parse_return_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        if !self.cursor.check(TokenKind::Return) {
            return Ok(None);
        }

        let value = self.parse_expression("expected an expression")?;
        self.expect_semicolon()?;

        Ok(Some(Statement::Return { value }))
    }
}

//! Declaration parsing implementation
//!
//! This module handles parsing of top-level function definitions:
//!
//! - Function definitions: `function name(params): type { ... }`
//! - Parameter lists: `(name: type, name: type, ...)`
//! - Return types: `: type`
//!
//! # Grammar
//!
//! ```text
//! function_def ::= "function" identifier "(" params ")" ":" identifier block
//! params       ::= ( param ( "," param )* )?
//! param        ::= identifier ":" identifier
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse function definition, or return `None` if the next token is not `function`.
    pub(crate) fn parse_function_definition(
        &mut self,
    ) -> Result<Option<FunctionDefinition>, ParseError> {
        if !self.cursor.check(TokenKind::Function) {
            return Ok(None);
        }

        let name = self.expect_identifier("expected a function name")?;
        let parameters = self.parse_function_parameters()?;
        let return_type = self.parse_function_return_type()?;
        let body = self.parse_block()?;

        tracing::trace!(
            function = %name,
            parameters = parameters.len(),
            statements = body.statements.len(),
            "parsed function"
        );

        Ok(Some(FunctionDefinition {
            name,
            parameters,
            return_type,
            body,
        }))
    }

    /// Parse parameter list including the surrounding parentheses
    fn parse_function_parameters(&mut self) -> Result<Vec<FunctionParameter>, ParseError> {
        self.expect_token(TokenKind::OpenParen, "expected an open parenthesis")?;

        let mut parameters = Vec::new();

        if let Some(first) = self.try_parse_function_parameter()? {
            parameters.push(first);

            while self.cursor.check(TokenKind::Comma) {
                match self.try_parse_function_parameter()? {
                    Some(parameter) => parameters.push(parameter),
                    None => return Err(self.error("expected a parameter")),
                }
            }
        }

        self.expect_token(TokenKind::CloseParen, "expected a close parenthesis")?;

        Ok(parameters)
    }

    /// Parse `name: type`, or `None` when no parameter name is present.
    fn try_parse_function_parameter(&mut self) -> Result<Option<FunctionParameter>, ParseError> {
        let Some(name) = self.try_parse_identifier()? else {
            return Ok(None);
        };

        self.expect_colon()?;
        let ty = self.expect_identifier("expected a type")?;

        Ok(Some(FunctionParameter { name, ty }))
    }

    fn parse_function_return_type(&mut self) -> Result<Identifier, ParseError> {
        self.expect_colon()?;
        self.expect_identifier("expected a return type")
    }
}

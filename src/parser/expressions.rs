//! Expression parsing implementation
//!
//! Operands are integer literals, identifiers and parenthesized expressions.
//! Parentheses only group; they leave no node in the tree. Binary operators are folded
//! with precedence climbing driven by [`BINARY_OPERATORS`], so adding an
//! operator means adding a row to the table.
//!
//! # Precedence
//!
//! | Operators | Precedence | Associativity |
//! |-----------|------------|---------------|
//! | `*` `/`   | 2          | left          |
//! | `+` `-`   | 1          | left          |
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

/// Tallest expression tree the parser builds, counted in binary operators
/// from the root to the deepest operand.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// Nested expression productions (parentheses and pending right operands).
/// Formatted output of a tree at the height limit needs at most two per level.
const MAX_NESTING: usize = 2 * MAX_EXPRESSION_DEPTH + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// One row of the binary operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub token: TokenKind,
    pub operator: BinaryOperator,
    pub precedence: u8,
    pub associativity: Associativity,
}

pub const BINARY_OPERATORS: &[OperatorInfo] = &[
    OperatorInfo {
        token: TokenKind::Plus,
        operator: BinaryOperator::Add,
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        token: TokenKind::Minus,
        operator: BinaryOperator::Subtract,
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        token: TokenKind::Asterisk,
        operator: BinaryOperator::Multiply,
        precedence: 2,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        token: TokenKind::Slash,
        operator: BinaryOperator::Divide,
        precedence: 2,
        associativity: Associativity::Left,
    },
];

/// A parsed expression and the height of its tree (0 for a single operand).
type Measured = (Expression, usize);

impl Parser {
    /// Parse an expression that must be present, failing with `message` otherwise.
    pub(crate) fn parse_expression(&mut self, message: &str) -> Result<Expression, ParseError> {
        match self.try_parse_expression()? {
            Some(expression) => Ok(expression),
            None => Err(self.error(message)),
        }
    }

    /// Parse an expression, or `None` if no operand starts here.
    pub(crate) fn try_parse_expression(&mut self) -> Result<Option<Expression>, ParseError> {
        Ok(self
            .parse_binary_expression(0)?
            .map(|(expression, _)| expression))
    }

    fn binary_operator(&self, kind: TokenKind) -> Option<OperatorInfo> {
        self.operators.iter().find(|info| info.token == kind).copied()
    }

    fn parse_binary_expression(
        &mut self,
        min_precedence: u8,
    ) -> Result<Option<Measured>, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error("expression nested too deeply"));
        }
        self.depth += 1;
        let result = self.climb(min_precedence);
        self.depth -= 1;
        result
    }

    /// Precedence climbing: fold operators binding tighter than `min_precedence`.
    fn climb(&mut self, min_precedence: u8) -> Result<Option<Measured>, ParseError> {
        let Some((mut left, mut height)) = self.try_parse_operand()? else {
            return Ok(None);
        };

        while let Some(info) = self.binary_operator(self.cursor.current().kind) {
            if info.precedence <= min_precedence {
                break;
            }
            self.cursor.check(info.token);

            let next_min = match info.associativity {
                Associativity::Left => info.precedence,
                Associativity::Right => info.precedence.saturating_sub(1),
            };

            let (right, right_height) = match self.parse_binary_expression(next_min)? {
                Some(right) => right,
                None => return Err(self.error("expected right operand")),
            };

            height = height.max(right_height) + 1;
            if height > MAX_EXPRESSION_DEPTH {
                return Err(self.error("expression nested too deeply"));
            }
            left = Expression::binary(left, right, info.operator);
        }

        Ok(Some((left, height)))
    }

    /// Parse a literal, identifier or parenthesized expression
    fn try_parse_operand(&mut self) -> Result<Option<Measured>, ParseError> {
        if self.cursor.check(TokenKind::OpenParen) {
            let Some(inner) = self.parse_binary_expression(0)? else {
                return Err(self.error("expected an expression"));
            };
            self.expect_token(TokenKind::CloseParen, "expected a close parenthesis")?;
            return Ok(Some(inner));
        }

        if self.cursor.peek_is(TokenKind::Number) {
            let Some(value) = self.cursor.current().as_number() else {
                return Err(self.error("number token has no value"));
            };
            self.cursor.check(TokenKind::Number);
            return Ok(Some((Expression::Literal(value), 0)));
        }

        Ok(self
            .try_parse_identifier()?
            .map(|identifier| (Expression::Identifier(identifier.name), 0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BinaryOperator::*;

    fn expr(source: &str) -> Result<Expression, ParseError> {
        let source = format!("function main(): int {{ return {}; }}", source);
        let mut tree = Parser::new(&source).unwrap().parse()?;
        let mut statements = tree.functions.remove(0).body.statements;
        match statements.remove(0) {
            Statement::Return { value } => Ok(value),
            other => panic!("Expected return statement, got {:?}", other),
        }
    }

    fn id(name: &str) -> Expression {
        Expression::identifier(name)
    }

    fn bin(left: Expression, right: Expression, operator: BinaryOperator) -> Expression {
        Expression::binary(left, right, operator)
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(expr("42").unwrap(), Expression::literal(42));
        assert_eq!(expr("x").unwrap(), id("x"));
    }

    #[test]
    fn test_left_associative_addition() {
        assert_eq!(
            expr("a + b + c").unwrap(),
            bin(bin(id("a"), id("b"), Add), id("c"), Add)
        );
        assert_eq!(
            expr("a - b - c").unwrap(),
            bin(bin(id("a"), id("b"), Subtract), id("c"), Subtract)
        );
    }

    #[test]
    fn test_mixed_precedence() {
        assert_eq!(
            expr("a - b + c / d * e").unwrap(),
            bin(
                bin(id("a"), id("b"), Subtract),
                bin(bin(id("c"), id("d"), Divide), id("e"), Multiply),
                Add
            )
        );
    }

    #[test]
    fn test_long_additive_chain() {
        assert_eq!(
            expr("a + b - c - d + e").unwrap(),
            bin(
                bin(
                    bin(bin(id("a"), id("b"), Add), id("c"), Subtract),
                    id("d"),
                    Subtract
                ),
                id("e"),
                Add
            )
        );
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            expr("1 + 2 * 3").unwrap(),
            bin(
                Expression::literal(1),
                bin(Expression::literal(2), Expression::literal(3), Multiply),
                Add
            )
        );
        assert_eq!(
            expr("1 * 2 + 3").unwrap(),
            bin(
                bin(Expression::literal(1), Expression::literal(2), Multiply),
                Expression::literal(3),
                Add
            )
        );
    }

    #[test]
    fn test_parentheses_group() {
        assert_eq!(
            expr("a - (b - c)").unwrap(),
            bin(id("a"), bin(id("b"), id("c"), Subtract), Subtract)
        );
        assert_eq!(
            expr("(1 + 2) * 3").unwrap(),
            bin(
                bin(Expression::literal(1), Expression::literal(2), Add),
                Expression::literal(3),
                Multiply
            )
        );
        assert_eq!(expr("((x))").unwrap(), id("x"));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(expr("(a + b").unwrap_err().message, "expected a close parenthesis");
        assert_eq!(expr("()").unwrap_err().message, "expected an expression");
    }

    #[test]
    fn test_missing_right_operand() {
        let err = expr("a +").unwrap_err();
        assert_eq!(err.message, "expected right operand");
        assert!(err.found.is(TokenKind::Semicolon));
    }

    #[test]
    fn test_operator_table() {
        let parser = Parser::from_tokens(Vec::new());
        assert_eq!(
            parser.binary_operator(TokenKind::Asterisk).map(|i| i.operator),
            Some(Multiply)
        );
        assert!(parser.binary_operator(TokenKind::EqualsEquals).is_none());
        for info in BINARY_OPERATORS {
            assert_eq!(info.token.lexeme(), Some(info.operator.symbol()));
        }
    }

    #[test]
    fn test_right_associative_row() {
        const RIGHT_SUBTRACT: &[OperatorInfo] = &[OperatorInfo {
            token: TokenKind::Minus,
            operator: Subtract,
            precedence: 1,
            associativity: Associativity::Right,
        }];

        let mut parser = Parser::new("a - b - c").unwrap();
        parser.operators = RIGHT_SUBTRACT;
        assert_eq!(
            parser.try_parse_expression().unwrap(),
            Some(bin(id("a"), bin(id("b"), id("c"), Subtract), Subtract))
        );
    }

    fn nested(levels: usize) -> String {
        format!("{}x{}", "(".repeat(levels), ")".repeat(levels))
    }

    fn chain(terms: usize) -> String {
        vec!["a"; terms].join(" + ")
    }

    #[test]
    fn test_nesting_within_limit() {
        assert_eq!(expr(&nested(200)).unwrap(), id("x"));
        assert!(expr(&chain(MAX_EXPRESSION_DEPTH + 1)).unwrap().is_binary());
    }

    #[test]
    fn test_deep_parentheses_are_rejected() {
        let err = expr(&nested(1000)).unwrap_err();
        assert_eq!(err.message, "expression nested too deeply");
        assert!(err.found.is(TokenKind::OpenParen));
    }

    #[test]
    fn test_long_chain_is_rejected() {
        let err = expr(&chain(MAX_EXPRESSION_DEPTH + 2)).unwrap_err();
        assert_eq!(err.message, "expression nested too deeply");

        let err = expr(&chain(20_000)).unwrap_err();
        assert_eq!(err.message, "expression nested too deeply");
    }

    #[test]
    fn test_number_token_without_value() {
        use crate::parser::token::Token;

        let location = SourceLocation::new(7, 1, 8);
        let tokens = vec![Token::new(TokenKind::Number, location)];
        let mut parser = Parser::from_tokens(tokens);
        let err = parser.try_parse_expression().unwrap_err();
        assert_eq!(err.message, "number token has no value");
        assert_eq!(err.location, location);
    }
}

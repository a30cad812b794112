// AST (Abstract Syntax Tree) definitions for Trilang

use std::fmt;

/// Source location information for error reporting
///
/// `offset` counts characters from the start of the source; `line` and
/// `column` are 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// A bare name: function names, parameter names and type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Literal(i32),
    Identifier(String),
    Binary {
        left: Box<Expression>,
        right: Box<Expression>,
        operator: BinaryOperator,
    },
}

impl Expression {
    pub fn literal(value: i32) -> Self {
        Expression::Literal(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn binary(left: Expression, right: Expression, operator: BinaryOperator) -> Self {
        Expression::Binary {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Expression::Binary { .. })
    }
}

/// Statements that may appear inside a block
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    VariableDeclaration {
        name: Identifier,
        ty: Identifier,
        // Always present when produced by the parser.
        initializer: Option<Expression>,
    },
    Return {
        value: Expression,
    },
}

impl Statement {
    pub fn variable(name: &str, ty: &str, initializer: Expression) -> Self {
        Statement::VariableDeclaration {
            name: Identifier::new(name),
            ty: Identifier::new(ty),
            initializer: Some(initializer),
        }
    }

    pub fn ret(value: Expression) -> Self {
        Statement::Return { value }
    }
}

/// `{ statement* }`; the braces themselves are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// Function parameter: `name: type`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionParameter {
    pub name: Identifier,
    pub ty: Identifier,
}

impl FunctionParameter {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: Identifier::new(name),
            ty: Identifier::new(ty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionDefinition {
    pub name: Identifier,
    pub parameters: Vec<FunctionParameter>,
    pub return_type: Identifier,
    pub body: BlockStatement,
}

impl FunctionDefinition {
    pub fn new(
        name: &str,
        parameters: Vec<FunctionParameter>,
        return_type: &str,
        body: BlockStatement,
    ) -> Self {
        Self {
            name: Identifier::new(name),
            parameters,
            return_type: Identifier::new(return_type),
            body,
        }
    }
}

/// Top-level program structure
///
/// Functions are kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    pub functions: Vec<FunctionDefinition>,
}

impl SyntaxTree {
    pub fn new(functions: Vec<FunctionDefinition>) -> Self {
        SyntaxTree { functions }
    }
}

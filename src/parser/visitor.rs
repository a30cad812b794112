//! Traversal over the syntax tree
//!
//! The set of node kinds is closed, so operations over the tree are written as
//! [`Visitor`] implementations instead of methods on the nodes. Every node has
//! an `accept` method that calls the matching `visit_*` method; the enums
//! dispatch with an exhaustive `match`, so adding a node kind is a compile
//! error in every visitor until it is handled.
//!
//! [`Node`] is a borrowed view over any node kind, for passes that want to
//! walk the tree generically (see [`Node::children`]).

use crate::parser::ast::*;

/// One operation per concrete node kind.
pub trait Visitor {
    type Output;

    fn visit_syntax_tree(&mut self, tree: &SyntaxTree) -> Self::Output;
    fn visit_function_definition(&mut self, function: &FunctionDefinition) -> Self::Output;
    fn visit_function_parameter(&mut self, parameter: &FunctionParameter) -> Self::Output;
    fn visit_identifier(&mut self, identifier: &Identifier) -> Self::Output;
    fn visit_block(&mut self, block: &BlockStatement) -> Self::Output;
    fn visit_variable_declaration(
        &mut self,
        name: &Identifier,
        ty: &Identifier,
        initializer: Option<&Expression>,
    ) -> Self::Output;
    fn visit_return(&mut self, value: &Expression) -> Self::Output;
    fn visit_literal(&mut self, value: i32) -> Self::Output;
    fn visit_identifier_expression(&mut self, name: &str) -> Self::Output;
    fn visit_binary(
        &mut self,
        left: &Expression,
        right: &Expression,
        operator: BinaryOperator,
    ) -> Self::Output;
}

impl SyntaxTree {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_syntax_tree(self)
    }
}

impl FunctionDefinition {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function_definition(self)
    }
}

impl FunctionParameter {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function_parameter(self)
    }
}

impl Identifier {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_identifier(self)
    }
}

impl BlockStatement {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_block(self)
    }
}

impl Statement {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Statement::VariableDeclaration {
                name,
                ty,
                initializer,
            } => visitor.visit_variable_declaration(name, ty, initializer.as_ref()),
            Statement::Return { value } => visitor.visit_return(value),
        }
    }
}

impl Expression {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expression::Literal(value) => visitor.visit_literal(*value),
            Expression::Identifier(name) => visitor.visit_identifier_expression(name),
            Expression::Binary {
                left,
                right,
                operator,
            } => visitor.visit_binary(left, right, *operator),
        }
    }
}

/// Borrowed reference to any node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    SyntaxTree(&'a SyntaxTree),
    FunctionDefinition(&'a FunctionDefinition),
    FunctionParameter(&'a FunctionParameter),
    Identifier(&'a Identifier),
    Block(&'a BlockStatement),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> Node<'a> {
    pub fn accept<V: Visitor>(self, visitor: &mut V) -> V::Output {
        match self {
            Node::SyntaxTree(tree) => tree.accept(visitor),
            Node::FunctionDefinition(function) => function.accept(visitor),
            Node::FunctionParameter(parameter) => parameter.accept(visitor),
            Node::Identifier(identifier) => identifier.accept(visitor),
            Node::Block(block) => block.accept(visitor),
            Node::Statement(statement) => statement.accept(visitor),
            Node::Expression(expression) => expression.accept(visitor),
        }
    }

    /// Direct children in source order.
    pub fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::SyntaxTree(tree) => tree.functions.iter().map(Node::FunctionDefinition).collect(),
            Node::FunctionDefinition(function) => {
                let mut children = vec![Node::Identifier(&function.name)];
                children.extend(function.parameters.iter().map(Node::FunctionParameter));
                children.push(Node::Identifier(&function.return_type));
                children.push(Node::Block(&function.body));
                children
            }
            Node::FunctionParameter(parameter) => {
                vec![Node::Identifier(&parameter.name), Node::Identifier(&parameter.ty)]
            }
            Node::Identifier(_) => Vec::new(),
            Node::Block(block) => block.statements.iter().map(Node::Statement).collect(),
            Node::Statement(Statement::VariableDeclaration {
                name,
                ty,
                initializer,
            }) => {
                let mut children = vec![Node::Identifier(name), Node::Identifier(ty)];
                children.extend(initializer.iter().map(Node::Expression));
                children
            }
            Node::Statement(Statement::Return { value }) => vec![Node::Expression(value)],
            Node::Expression(Expression::Binary { left, right, .. }) => {
                vec![Node::Expression(left.as_ref()), Node::Expression(right.as_ref())]
            }
            Node::Expression(Expression::Literal(_) | Expression::Identifier(_)) => Vec::new(),
        }
    }

    /// Pre-order walk of this node and everything below it.
    pub fn descendants(self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        out
    }
}

impl<'a> From<&'a SyntaxTree> for Node<'a> {
    fn from(tree: &'a SyntaxTree) -> Self {
        Node::SyntaxTree(tree)
    }
}

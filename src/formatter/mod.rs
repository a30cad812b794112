//! Canonical text rendering of a [`SyntaxTree`]
//!
//! [`Formatter`] is a [`Visitor`] that prints a tree back as Trilang source.
//! The output is stable rather than minimal: every binary operand that is
//! itself a binary expression is wrapped in parentheses, whether or not
//! precedence requires it. Reparsing the output yields the same tree.
//!
//! ```text
//! function main(a: int): int {
//!     var x: int = (a * 2) + 1;
//!     return x;
//! }
//! ```

mod builder;

use crate::parser::ast::*;
use crate::parser::visitor::Visitor;
use builder::TextBuilder;

/// Formatter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indentation level inside blocks.
    pub indent_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl FormatOptions {
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}

/// Renders a tree to program text
pub struct Formatter {
    options: FormatOptions,
    builder: TextBuilder,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            builder: TextBuilder::new(options.indent_width),
        }
    }

    /// Render `tree`, leaving the formatter ready for another tree.
    pub fn format(&mut self, tree: &SyntaxTree) -> String {
        tree.accept(self);
        std::mem::replace(&mut self.builder, TextBuilder::new(self.options.indent_width)).finish()
    }

    fn operand(&mut self, expression: &Expression) {
        if expression.is_binary() {
            self.builder.push_str("(");
            expression.accept(self);
            self.builder.push_str(")");
        } else {
            expression.accept(self);
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl Visitor for Formatter {
    type Output = ();

    fn visit_syntax_tree(&mut self, tree: &SyntaxTree) {
        for (i, function) in tree.functions.iter().enumerate() {
            if i > 0 {
                self.builder.newline();
            }
            function.accept(self);
        }
    }

    fn visit_function_definition(&mut self, function: &FunctionDefinition) {
        self.builder.push_str("function ");
        function.name.accept(self);

        self.builder.push_str("(");
        for (i, parameter) in function.parameters.iter().enumerate() {
            if i > 0 {
                self.builder.push_str(", ");
            }
            parameter.accept(self);
        }
        self.builder.push_str("): ");

        function.return_type.accept(self);
        self.builder.push_str(" ");
        function.body.accept(self);
    }

    fn visit_function_parameter(&mut self, parameter: &FunctionParameter) {
        parameter.name.accept(self);
        self.builder.push_str(": ");
        parameter.ty.accept(self);
    }

    fn visit_identifier(&mut self, identifier: &Identifier) {
        self.builder.push_str(&identifier.name);
    }

    fn visit_block(&mut self, block: &BlockStatement) {
        self.builder.line("{");
        self.builder.indent();
        for statement in &block.statements {
            statement.accept(self);
        }
        self.builder.unindent();
        self.builder.line("}");
    }

    fn visit_variable_declaration(
        &mut self,
        name: &Identifier,
        ty: &Identifier,
        initializer: Option<&Expression>,
    ) {
        self.builder.push_str("var ");
        name.accept(self);
        self.builder.push_str(": ");
        ty.accept(self);
        if let Some(initializer) = initializer {
            self.builder.push_str(" = ");
            initializer.accept(self);
        }
        self.builder.line(";");
    }

    fn visit_return(&mut self, value: &Expression) {
        self.builder.push_str("return ");
        value.accept(self);
        self.builder.line(";");
    }

    fn visit_literal(&mut self, value: i32) {
        self.builder.push_str(&value.to_string());
    }

    fn visit_identifier_expression(&mut self, name: &str) {
        self.builder.push_str(name);
    }

    fn visit_binary(&mut self, left: &Expression, right: &Expression, operator: BinaryOperator) {
        self.operand(left);
        self.builder.push_str(" ");
        self.builder.push_str(operator.symbol());
        self.builder.push_str(" ");
        self.operand(right);
    }
}

/// Render `tree` with default options.
pub fn format(tree: &SyntaxTree) -> String {
    Formatter::default().format(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_function() {
        let tree = SyntaxTree::new(vec![FunctionDefinition::new(
            "main",
            vec![
                FunctionParameter::new("a", "int"),
                FunctionParameter::new("b", "int"),
            ],
            "int",
            BlockStatement::new(vec![
                Statement::variable("x", "int", Expression::literal(0)),
                Statement::ret(Expression::identifier("x")),
            ]),
        )]);

        assert_eq!(
            format(&tree),
            "function main(a: int, b: int): int {\n    var x: int = 0;\n    return x;\n}\n"
        );
    }

    #[test]
    fn test_nested_binaries_are_parenthesized() {
        use BinaryOperator::*;
        let a = || Expression::identifier("a");
        let expression = Expression::binary(
            Expression::binary(a(), a(), Multiply),
            Expression::binary(a(), Expression::binary(a(), a(), Subtract), Add),
            Add,
        );
        let tree = SyntaxTree::new(vec![FunctionDefinition::new(
            "f",
            Vec::new(),
            "int",
            BlockStatement::new(vec![Statement::ret(expression)]),
        )]);

        assert_eq!(
            format(&tree),
            "function f(): int {\n    return (a * a) + (a + (a - a));\n}\n"
        );
    }

    #[test]
    fn test_declaration_without_initializer() {
        let tree = SyntaxTree::new(vec![FunctionDefinition::new(
            "f",
            Vec::new(),
            "int",
            BlockStatement::new(vec![Statement::VariableDeclaration {
                name: Identifier::new("x"),
                ty: Identifier::new("int"),
                initializer: None,
            }]),
        )]);

        assert_eq!(format(&tree), "function f(): int {\n    var x: int;\n}\n");
    }

    #[test]
    fn test_empty_body_and_blank_line_between_functions() {
        let f = |name: &str| FunctionDefinition::new(name, Vec::new(), "int", BlockStatement::default());
        let tree = SyntaxTree::new(vec![f("a"), f("b")]);
        assert_eq!(
            format(&tree),
            "function a(): int {\n}\n\nfunction b(): int {\n}\n"
        );
    }

    #[test]
    fn test_indent_width_option() {
        let tree = SyntaxTree::new(vec![FunctionDefinition::new(
            "f",
            Vec::new(),
            "int",
            BlockStatement::new(vec![Statement::ret(Expression::literal(3))]),
        )]);
        let mut formatter = Formatter::new(FormatOptions::default().with_indent_width(2));
        assert_eq!(formatter.format(&tree), "function f(): int {\n  return 3;\n}\n");
        // reusable
        assert_eq!(formatter.format(&tree), "function f(): int {\n  return 3;\n}\n");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(format(&SyntaxTree::default()), "");
    }
}

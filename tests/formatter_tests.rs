// Formatter integration tests: rendering and render/reparse stability

use proptest::prelude::*;
use trilang::parser::ast::*;
use trilang::{format, FormatOptions, Formatter, TokenKind};

fn reformat(source: &str) -> String {
    format(&trilang::parse(source).expect("Parsing failed"))
}

#[test]
fn test_canonical_layout() {
    let source = "function main(a:int,b:int):int{var x:int=a+b*2;return x;}";
    assert_eq!(
        reformat(source),
        "function main(a: int, b: int): int {\n    var x: int = a + (b * 2);\n    return x;\n}\n"
    );
}

#[test]
fn test_parentheses_are_not_minimal() {
    assert_eq!(
        reformat("function f(): int { return a - b + c / d * e; }"),
        "function f(): int {\n    return (a - b) + ((c / d) * e);\n}\n"
    );
}

#[test]
fn test_multiple_functions() {
    let source = "function a(): int { return 1; } function b(x: int): int { return x; }";
    assert_eq!(
        reformat(source),
        "function a(): int {\n    return 1;\n}\n\nfunction b(x: int): int {\n    return x;\n}\n"
    );
}

#[test]
fn test_format_then_reparse_is_stable() {
    let source = r#"
        function main(a: int, b: int): int {
            var x: int = a + b - 3 * a / b;
            var y: int = x;
            return x * y + 1;
        }

        function id(v: int): int { return v; }
    "#;

    let once = reformat(source);
    let twice = reformat(&once);
    assert_eq!(once, twice);
    assert_eq!(trilang::parse(&once).unwrap(), trilang::parse(source).unwrap());
}

#[test]
fn test_custom_indent() {
    let tree = trilang::parse("function f(): int { return 1; }").unwrap();
    let mut formatter = Formatter::new(FormatOptions::default().with_indent_width(8));
    assert_eq!(formatter.format(&tree), "function f(): int {\n        return 1;\n}\n");
}

#[test]
fn test_longest_accepted_chain_formats_and_reparses() {
    let terms = vec!["a"; trilang::parser::expressions::MAX_EXPRESSION_DEPTH + 1];
    let source = format!("function f(): int {{ return {}; }}", terms.join(" - "));
    let once = reformat(&source);
    assert_eq!(reformat(&once), once);
}

#[test]
fn test_tallest_right_nested_tree_reparses() {
    let mut expression = Expression::identifier("a");
    for _ in 0..trilang::parser::expressions::MAX_EXPRESSION_DEPTH {
        let left = Expression::identifier("a");
        expression = Expression::binary(left, expression, BinaryOperator::Subtract);
    }
    let tree = SyntaxTree::new(vec![FunctionDefinition::new(
        "f",
        Vec::new(),
        "int",
        BlockStatement::new(vec![Statement::ret(expression)]),
    )]);

    let text = format(&tree);
    assert_eq!(trilang::parse(&text).unwrap(), tree);
}

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("keywords are reserved", |s| {
        !TokenKind::KEYWORDS.iter().any(|(k, _)| *k == s.as_str())
    })
}

fn expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        (0..=i32::MAX).prop_map(Expression::Literal),
        name().prop_map(Expression::Identifier),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            inner.clone(),
            inner,
            prop_oneof![
                Just(BinaryOperator::Add),
                Just(BinaryOperator::Subtract),
                Just(BinaryOperator::Multiply),
                Just(BinaryOperator::Divide),
            ],
        )
            .prop_map(|(left, right, operator)| Expression::binary(left, right, operator))
    })
}

fn statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        (name(), name(), expression()).prop_map(|(n, t, e)| Statement::variable(&n, &t, e)),
        expression().prop_map(Statement::ret),
    ]
}

fn function() -> impl Strategy<Value = FunctionDefinition> {
    (
        name(),
        prop::collection::vec((name(), name()), 0..4),
        name(),
        prop::collection::vec(statement(), 0..5),
    )
        .prop_map(|(n, params, ret, body)| {
            FunctionDefinition::new(
                &n,
                params
                    .iter()
                    .map(|(p, t)| FunctionParameter::new(p, t))
                    .collect(),
                &ret,
                BlockStatement::new(body),
            )
        })
}

proptest! {
    #[test]
    fn prop_format_output_reparses_to_same_tree(
        functions in prop::collection::vec(function(), 0..4),
    ) {
        let tree = SyntaxTree::new(functions);
        let text = format(&tree);
        let reparsed = trilang::parse(&text).unwrap();
        prop_assert_eq!(&reparsed, &tree);
        prop_assert_eq!(format(&reparsed), text);
    }
}

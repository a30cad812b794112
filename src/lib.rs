//! # Introduction
//!
//! Trilang is a small imperative language. This crate is its front end: it
//! tokenizes source text, parses the tokens into an immutable syntax tree,
//! and renders trees back to canonical source text.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → TokenCursor → Parser → SyntaxTree → Visitor (Formatter)
//! ```
//!
//! 1. [`parser`] — token model, lexer, token cursor, parser, AST and the
//!    [`parser::visitor::Visitor`] trait for passes over the tree.
//! 2. [`formatter`] — the reference visitor, printing a tree as source.
//! 3. [`error`] — the joined lex/parse error returned by [`parse`].
//!
//! Every call owns its input and output; nothing is shared between calls.
//! Errors are fail-fast: the first problem ends the call and no partial
//! token list or tree is returned.
//!
//! ## Example
//!
//! ```
//! let tree = trilang::parse("function main(): int { return 1 + 2 * 3; }").unwrap();
//! assert_eq!(
//!     trilang::format(&tree),
//!     "function main(): int {\n    return 1 + (2 * 3);\n}\n"
//! );
//! ```

pub mod error;
pub mod formatter;
pub mod parser;

pub use error::Error;
pub use formatter::{format, FormatOptions, Formatter};
pub use parser::ast::SyntaxTree;
pub use parser::lexer::{LexError, Lexer};
pub use parser::parse::{ParseError, Parser};
pub use parser::token::{Token, TokenKind, TokenValue};
pub use parser::visitor::Visitor;

/// Tokenize `source`. The result always ends with one `EndOfFile` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Tokenize and parse `source` into a syntax tree.
pub fn parse(source: &str) -> Result<SyntaxTree, Error> {
    let mut parser = Parser::new(source)?;
    Ok(parser.parse()?)
}

//! Trilang source code parser
//!
//! This module transforms Trilang source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and values
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`cursor`]: Forward cursor over the token sequence
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`visitor`]: Operations over the closed set of node kinds
//!
//! # Language
//!
//! A program is a sequence of function definitions. Function bodies hold
//! variable declarations and return statements; expressions are integer
//! literals, identifiers and the four arithmetic operators.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
pub mod cursor;
mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;
pub mod visitor;

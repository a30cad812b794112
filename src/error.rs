//! Crate-level error type
//!
//! Lexing and parsing each have their own error; [`Error`] joins them for the
//! entry points that run the whole pipeline.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use crate::parser::parse::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Where in the source the error was detected.
    pub fn location(&self) -> SourceLocation {
        match self {
            Error::Lex(err) => err.location(),
            Error::Parse(err) => err.location,
        }
    }
}

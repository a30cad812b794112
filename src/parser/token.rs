//! Token model shared by the lexer, the token cursor and the parser
//!
//! A [`Token`] is a [`TokenKind`] plus an optional [`TokenValue`]. Only
//! `Number` and `Identifier` tokens carry a value. Every token also remembers
//! where it started in the source so that parse errors can point at it, but
//! the location takes no part in token equality.

use super::ast::SourceLocation;
use std::fmt;

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    EndOfFile,

    // Structural
    OpenParen,    // (
    CloseParen,   // )
    OpenBrace,    // {
    CloseBrace,   // }
    OpenBracket,  // [
    CloseBracket, // ]
    Colon,        // :
    Semicolon,    // ;
    Comma,        // ,
    Dot,          // .

    // Arithmetic
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /

    // Assignment and comparison
    Equals,             // =
    EqualsEquals,       // ==
    NotEquals,          // !=
    LessThan,           // <
    LessThanOrEqual,    // <=
    GreaterThan,        // >
    GreaterThanOrEqual, // >=

    // Logical and bitwise
    Ampersand,          // &
    Pipe,               // |
    AmpersandAmpersand, // &&
    PipePipe,           // ||

    // Keywords
    Function,
    Var,
    If,
    Else,
    For,
    Return,
}

impl TokenKind {
    /// Source spelling of keywords, in the order they are looked up.
    pub const KEYWORDS: [(&'static str, TokenKind); 6] = [
        ("function", TokenKind::Function),
        ("var", TokenKind::Var),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("for", TokenKind::For),
        ("return", TokenKind::Return),
    ];

    /// The fixed source text of this kind, if it has one.
    ///
    /// `Identifier`, `Number` and `EndOfFile` have no fixed spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Identifier | TokenKind::Number | TokenKind::EndOfFile => return None,
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Equals => "=",
            TokenKind::EqualsEquals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::LessThan => "<",
            TokenKind::LessThanOrEqual => "<=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanOrEqual => ">=",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Function => "function",
            TokenKind::Var => "var",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::Return => "return",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::EndOfFile => write!(f, "end of file"),
            other => match other.lexeme() {
                Some(text) => write!(f, "'{}'", text),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

/// Payload carried by `Number` and `Identifier` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    Number(i32),
    Identifier(String),
}

/// A single lexical token.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self {
            kind,
            value: None,
            location,
        }
    }

    pub fn number(value: i32, location: SourceLocation) -> Self {
        Self {
            kind: TokenKind::Number,
            value: Some(TokenValue::Number(value)),
            location,
        }
    }

    pub fn identifier(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind: TokenKind::Identifier,
            value: Some(TokenValue::Identifier(name.into())),
            location,
        }
    }

    pub fn end_of_file(location: SourceLocation) -> Self {
        Self::new(TokenKind::EndOfFile, location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Integer payload of a `Number` token.
    pub fn as_number(&self) -> Option<i32> {
        match self.value {
            Some(TokenValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Text payload of an `Identifier` token.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Identifier(name)) => Some(name),
            _ => None,
        }
    }
}

// Location is deliberately left out: two tokens are the same token when
// their kind and value agree, wherever they appear.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(TokenValue::Number(n)) => write!(f, "number {}", n),
            Some(TokenValue::Identifier(name)) => write!(f, "identifier '{}'", name),
            None => write!(f, "{}", self.kind),
        }
    }
}

use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingOpenParen,
    MissingCloseParen,
    MissingComma,
    MissingOpenBracket,
    MissingCloseBracket,
    ExpectedProperty,
    ExpectedValue,
    UnknownOperation,
    UnexpectedEndOfInput,
    /// `limit()` with no integer argument
    MissingLimit,
    /// Tokens left over after the root operation
    TrailingInput,
}

/// A parse failure at a byte offset of the input.
///
/// Parsing stops at the first error; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: usize) -> Self {
        SyntaxError {
            kind,
            message: message.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

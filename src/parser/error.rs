use crate::lexer::{LexerError, Token};
use std::{error, fmt};

/// Result type used by the parser's internal grammar procedures.
pub type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// An error raised while parsing a token stream into an AST.
///
/// When parsing is started through the public entry points these are converted into
/// the crate's [`Error`](crate::error::Error) with the offending source location and a
/// rendered snippet attached.
#[derive(Debug, PartialEq, Clone)]
pub enum SyntaxError {
    /// A token that doesn't match any alternative of the current grammar rule
    UnexpectedToken(String),
    /// A name in keyword position that isn't part of the language
    UnknownKeyword(String),
    /// A keyword that exists but doesn't belong at the current position
    UnexpectedKeyword(String),
    /// A name at document level that doesn't begin any kind of definition
    UnknownDefinition(String),
    /// A directive location that isn't one of the locations the language knows
    UnknownDirectiveLocation(String),
    /// An enum value named `true`, `false`, or `null`
    ReservedEnumValueName(String),
    /// A fragment definition named `on`
    UnexpectedFragmentName,
    /// A variable in a position where only constant values are allowed
    UnexpectedVariable(String),
    /// A failure in the underlying lexer, including an exceeded token limit
    Lexer(LexerError),
}

impl SyntaxError {
    /// Creates a [`SyntaxError::UnexpectedToken`] describing the given token.
    pub(crate) fn unexpected_token(token: &Token<'_>) -> Self {
        SyntaxError::UnexpectedToken(token.to_string())
    }
}

impl From<LexerError> for SyntaxError {
    fn from(error: LexerError) -> Self {
        SyntaxError::Lexer(error)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken(token) => write!(f, "Unexpected {token}"),
            SyntaxError::UnknownKeyword(name) => write!(f, "Unknown keyword `{name}`"),
            SyntaxError::UnexpectedKeyword(name) => write!(f, "Unexpected keyword `{name}`"),
            SyntaxError::UnknownDefinition(name) => {
                write!(f, "Name `{name}` does not begin a definition")
            }
            SyntaxError::UnknownDirectiveLocation(name) => {
                write!(f, "Unknown directive location `{name}`")
            }
            SyntaxError::ReservedEnumValueName(name) => {
                write!(f, "Enum value must not be named `{name}`")
            }
            SyntaxError::UnexpectedFragmentName => {
                f.write_str("Fragment must not be named `on`")
            }
            SyntaxError::UnexpectedVariable(name) => {
                write!(f, "Variable `${name}` is not allowed in a constant value")
            }
            SyntaxError::Lexer(inner) => inner.fmt(f),
        }
    }
}

impl error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SyntaxError::Lexer(inner) => Some(inner),
            _ => None,
        }
    }
}

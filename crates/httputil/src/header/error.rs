use std::str::Utf8Error;
use thiserror::Error;

/// Errors produced while splitting a header value into tokens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unexpected control character")]
    UnexpectedControlCharacter,

    #[error("unterminated escape")]
    UnterminatedEscape,

    #[error("unterminated string")]
    UnterminatedString,
}

/// Errors produced while parsing a header value into [`HeaderParts`](super::HeaderParts).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("tokenize error: {source}")]
    Tokenize {
        #[from]
        source: TokenizeError,
    },

    #[error("missing comma")]
    MissingComma,

    #[error("unexpected quoted string")]
    UnexpectedQuotedString,

    #[error("header value is not utf-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: Utf8Error,
    },

    #[error("invalid header value: {reason}")]
    InvalidHeaderValue { reason: String },
}

impl ParseError {
    pub fn invalid_header_value<S: ToString>(str: S) -> Self {
        Self::InvalidHeaderValue { reason: str.to_string() }
    }

    /// Returns the underlying tokenizer error, if parsing failed while tokenizing.
    pub fn as_tokenize_error(&self) -> Option<TokenizeError> {
        match self {
            Self::Tokenize { source } => Some(*source),
            _ => None,
        }
    }
}

//! Error types produced when parsing debug level tokens.

use std::fmt;

use thiserror::Error;

/// Classification of a [`ParseLevelError`].
#[doc(alias = "--debug")]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseLevelErrorKind {
    /// The token was empty.
    EmptyToken,
    /// The token carried a level but no category name.
    EmptyCategory,
    /// The level part was not a valid signed 32-bit integer.
    InvalidLevel,
    /// The configuration source was not valid Unicode.
    InvalidEncoding,
}

impl fmt::Display for ParseLevelErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken => f.write_str("debug token is empty"),
            Self::EmptyCategory => f.write_str("debug token has no category name"),
            Self::InvalidLevel => f.write_str("debug level must be a signed integer"),
            Self::InvalidEncoding => f.write_str("debug setting is not valid unicode"),
        }
    }
}

/// Error returned when a debug configuration token cannot be parsed.
#[doc(alias = "--debug")]
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}: '{token}'")]
pub struct ParseLevelError {
    kind: ParseLevelErrorKind,
    token: String,
}

impl ParseLevelError {
    pub(crate) fn new(kind: ParseLevelErrorKind, token: &str) -> Self {
        Self {
            kind,
            token: token.to_owned(),
        }
    }

    /// Returns the classification describing why parsing failed.
    #[must_use]
    pub const fn kind(&self) -> ParseLevelErrorKind {
        self.kind
    }

    /// Returns the offending token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

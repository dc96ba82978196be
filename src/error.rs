//! Error type shared by the parser, the rewriting engine and the semantics.

use std::fmt;

/// Errors produced while building, parsing or rewriting formulas.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Malformed formula text.
    Syntax {
        /// Byte offset in the input where parsing failed.
        position: usize,
        message: String,
    },
    /// Unknown symbol text, or a symbol not covered by a checked rewrite.
    UnsupportedOperator(String),
    /// Variable name violating the naming rule, or missing from a model.
    InvalidVariable(String),
    /// The same symbol given two templates.
    DuplicateTemplate(String),
}

impl Error {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { position, message } => write!(f, "Syntax error at {}: {}", position, message),
            Error::UnsupportedOperator(op) => write!(f, "Unsupported operator: '{}'", op),
            Error::InvalidVariable(name) => write!(f, "Invalid variable: '{}'", name),
            Error::DuplicateTemplate(op) => write!(f, "Duplicate template for '{}'", op),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

//! Custom error types for ledgerkeep
//!
//! Every failure surfaced to a caller is one of the taxonomy kinds below,
//! carrying a stable kind string plus a human-readable message.

use thiserror::Error;

/// The main error type for ledgerkeep operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed or missing input per an operation's schema
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced id does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An unparseable timestamp string
    #[error("Date parse error: {0}")]
    DateParse(String),

    /// The backing store file does not contain a well-formed document
    #[error("Store parse error: {0}")]
    Parse(String),

    /// An unrecognized operation name reached the dispatcher
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl LedgerError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// The stable kind string carried across the transport boundary
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::NotFound { .. } => "NotFoundError",
            Self::DateParse(_) => "DateParseError",
            Self::Parse(_) => "ParseError",
            Self::UnknownOperation(_) => "UnknownOperationError",
            Self::Io(_) => "IoError",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledgerkeep operations
pub type LedgerResult<T> = Result<T, LedgerError>;

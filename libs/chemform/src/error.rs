//! Error types for chemical formula parsing

use serde::Serialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Formula parsing errors
///
/// Every variant terminates the whole parse; no partial counts are returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid chemical formula")]
    InvalidFormula,

    #[error("Formula cannot start with a hydrate separator")]
    LeadingSeparator,

    #[error("Formula cannot end with a hydrate separator")]
    TrailingSeparator,

    #[error("Consecutive hydrate separators in formula")]
    ConsecutiveSeparators,

    #[error("Unmatched parentheses in formula")]
    UnmatchedParenthesis,

    #[error("Empty parentheses in formula")]
    EmptyParenthesis,

    #[error("Empty hydrate formula after dot")]
    EmptyHydrateSegment,

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Invalid subscript: {0}")]
    InvalidSubscript(String),

    #[error("Invalid hydrate multiplier: {0}")]
    InvalidHydrateMultiplier(String),

    #[error("Invalid character in formula: '{0}'")]
    InvalidCharacter(char),

    #[error("Atom count overflow")]
    Overflow,

    #[error("Formula too deeply nested (max depth: {max_depth})")]
    TooDeeplyNested { max_depth: usize },
}

/// Machine-readable error classification, one per [`Error`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFormula,
    LeadingSeparator,
    TrailingSeparator,
    ConsecutiveSeparators,
    UnmatchedParenthesis,
    EmptyParenthesis,
    EmptyHydrateSegment,
    UnknownElement,
    InvalidSubscript,
    InvalidHydrateMultiplier,
    InvalidCharacter,
    Overflow,
    TooDeeplyNested,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidFormula => ErrorKind::InvalidFormula,
            Error::LeadingSeparator => ErrorKind::LeadingSeparator,
            Error::TrailingSeparator => ErrorKind::TrailingSeparator,
            Error::ConsecutiveSeparators => ErrorKind::ConsecutiveSeparators,
            Error::UnmatchedParenthesis => ErrorKind::UnmatchedParenthesis,
            Error::EmptyParenthesis => ErrorKind::EmptyParenthesis,
            Error::EmptyHydrateSegment => ErrorKind::EmptyHydrateSegment,
            Error::UnknownElement(_) => ErrorKind::UnknownElement,
            Error::InvalidSubscript(_) => ErrorKind::InvalidSubscript,
            Error::InvalidHydrateMultiplier(_) => ErrorKind::InvalidHydrateMultiplier,
            Error::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            Error::Overflow => ErrorKind::Overflow,
            Error::TooDeeplyNested { .. } => ErrorKind::TooDeeplyNested,
        }
    }
}

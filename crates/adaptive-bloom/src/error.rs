//! Error types for the membership filter

use thiserror::Error;

/// Construction-time precondition violations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Filter size must be greater than 0 bits")]
    ZeroSize,

    #[error("Hash count must be greater than 0")]
    ZeroHashCount,

    #[error("Expected item count must be greater than 0")]
    ZeroExpectedItems,

    #[error("Invalid false positive rate: {fpr} (must be in (0, 1))")]
    InvalidFpr { fpr: f64 },

    #[error("Invalid growth factor: {factor} (must be in (1, {max}])")]
    InvalidGrowthFactor { factor: f64, max: f64 },

    #[error("Filter of {bits} bits exceeds the maximum of {max}")]
    FilterTooLarge { bits: usize, max: usize },

    #[error("Bit array length mismatch: expected {expected} bytes, got {actual}")]
    BitArrayLength { expected: usize, actual: usize },

    #[error("Adaptive filter requires at least one filter")]
    EmptyFilterSet,
}

/// Errors from encoding or decoding a filter snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot is empty")]
    Empty,

    #[error("Snapshot truncated at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Field {field} value {value} does not fit in 32 bits")]
    FieldOverflow { field: &'static str, value: usize },

    #[error("Invalid filter in snapshot: {0}")]
    Filter(#[from] FilterError),
}

/// Errors from the authoritative user directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Directory unavailable: {0}")]
    Unavailable(String),

    #[error("Write conflict: {0}")]
    Conflict(String),

    #[error("Query error: {0}")]
    Query(String),
}

/// Identifier validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier is required")]
    Empty,

    #[error("Identifier must be at least {min} characters long (got {len})")]
    TooShort { len: usize, min: usize },

    #[error("Identifier must be at most {max} characters long (got {len})")]
    TooLong { len: usize, max: usize },

    #[error("Invalid character {ch:?}: only letters, numbers and underscores are allowed")]
    InvalidCharacter { ch: char },
}

/// Errors surfaced by the membership service
#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Identifier already registered: {0}")]
    AlreadyRegistered(String),
}

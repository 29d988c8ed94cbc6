use std::fmt;

// === ValidationError ===

/// Errors produced while validating create and update payloads.
///
/// The `Display` output is the client-facing message, so the exact wording
/// here is part of the HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field (`title`, `url` or `rating`) is absent or null.
    MissingField(&'static str),
    /// The supplied `url` is shorter than 5 characters.
    InvalidUrl,
    /// The supplied `rating` floors outside the 0..=5 range.
    InvalidRating,
    /// An update payload carries none of the recognized fields.
    EmptyUpdate,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "missing {} in request body", field)
            }
            ValidationError::InvalidUrl => {
                write!(f, "url length must be at least 5 characters in length")
            }
            ValidationError::InvalidRating => write!(f, "number must be between 1-5"),
            ValidationError::EmptyUpdate => write!(
                f,
                "request body must contain either 'title', 'url', or 'rating'"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

// === StoreError ===

/// Errors produced by the persistence adapter.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "bookmark database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

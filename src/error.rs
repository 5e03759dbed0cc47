//! Error types for building requests and reading responses.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by encode, decode and configuration helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// A params object broke one of its rules and was not serialized.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A response body did not match the expected entity shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Serializing a params object failed.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Client configuration is missing or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// A params object violates one of its construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("percentage_discount and amount_discount are mutually exclusive")]
    ConflictingDiscounts,

    #[error("percentage_discount must be between 0 and 100, got {0}")]
    PercentageOutOfRange(i64),

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("checkout needs either items or an amount")]
    MissingItemsOrAmount,

    #[error("checkout cannot carry both items and an amount")]
    ItemsAndAmount,

    #[error("quantity of item {index} must be at least 1, got {quantity}")]
    InvalidQuantity { index: usize, quantity: i64 },

    #[error("at most {max} images are allowed, got {count}")]
    TooManyImages { max: usize, count: usize },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
}

/// A response body could not be decoded into the requested type.
///
/// `path` points at the offending field, e.g. `data[2].status`; the root of
/// the document is `.`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode response at `{path}`: {message}")]
pub struct DecodeError {
    pub path: String,
    pub message: String,
}

impl DecodeError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        Self::new(path, inner.to_string())
    }
}

use thiserror::Error;

/// Errors raised by the validating entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TruncateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// What exactly was wrong with an argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("character limit must not be negative (got {0})")]
    NegativeLimit(i64),

    #[error("character limit must be greater than zero")]
    ZeroLimit,

    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("separator must be a single character (got {0:?})")]
    MultiCharSeparator(String),
}

impl TruncateError {
    /// The argument problem behind this error
    pub fn kind(&self) -> &InvalidArgument {
        match self {
            TruncateError::InvalidArgument(kind) => kind,
        }
    }
}

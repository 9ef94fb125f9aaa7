use thiserror::Error;

/// Errors produced while acquiring the problem input.
///
/// The computation itself cannot fail once it has a well-formed byte
/// sequence, so this is the crate's only error type.
#[derive(Debug, Error)]
pub enum InputError {
    /// The stream ended before the announced number of characters was read.
    #[error("insufficient input: expected {expected} characters, got {actual}")]
    InsufficientInput { expected: usize, actual: usize },

    /// The announced length exceeds the supported maximum.
    #[error("input length {n} exceeds maximum supported length {max}")]
    LengthLimitExceeded { n: usize, max: usize },

    /// The leading count token was missing or not a non-negative integer.
    #[error("malformed count: {0}")]
    MalformedCount(String),

    /// The underlying stream failed.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    pub fn malformed_count(msg: impl Into<String>) -> Self {
        InputError::MalformedCount(msg.into())
    }
}

/// Result type alias for input acquisition.
pub type Result<T> = std::result::Result<T, InputError>;

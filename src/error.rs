//! Byte Buffer Error Types
//!
//! Core error types for buffer accessors and integer encoding.

use thiserror::Error;

/// Result type for voltage-bytes operations
pub type Result<T> = std::result::Result<T, ByteBufferError>;

/// Byte buffer errors
///
/// All failures are local validation failures: deterministic for the same
/// inputs, never retried, always propagated to the immediate caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ByteBufferError {
    /// A numeric value does not fit the declared bit width or byte length
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A length or value argument is not a valid magnitude
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An offset/width combination exceeds the buffer length
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),
}

// Helper methods for creating errors
impl ByteBufferError {
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        ByteBufferError::OutOfRange(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ByteBufferError::InvalidArgument(msg.into())
    }

    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        ByteBufferError::OutOfBounds(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = ByteBufferError::out_of_range("Value 65536 is out of bounds");
        assert_eq!(err.to_string(), "Out of range: Value 65536 is out of bounds");

        let err = ByteBufferError::invalid_argument("Length must be at least 1");
        assert_eq!(err.to_string(), "Invalid argument: Length must be at least 1");

        let err = ByteBufferError::out_of_bounds("2-byte access at offset 7");
        assert_eq!(err.to_string(), "Out of bounds: 2-byte access at offset 7");
    }
}

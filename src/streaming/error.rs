//! Error types for streaming parsers.

use std::io;

use thiserror::Error;

/// Result type for streaming operations.
pub type StreamingResult<T> = Result<T, StreamingError>;

/// Errors that can occur during streaming parsing.
#[derive(Debug, Error)]
pub enum StreamingError {
    /// IO error while reading file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A single line exceeded the configured maximum
    #[error("Message too large: {actual_size} bytes (max: {max_size})")]
    BufferOverflow { max_size: usize, actual_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let streaming_err: StreamingError = io_err.into();
        assert!(matches!(streaming_err, StreamingError::Io(_)));
        assert!(streaming_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_buffer_overflow_display() {
        let err = StreamingError::BufferOverflow {
            max_size: 1024,
            actual_size: 2048,
        };
        let msg = err.to_string();
        assert!(msg.contains("2048"));
        assert!(msg.contains("1024"));
    }
}

//! Unified error types for chatview.
//!
//! The transcript parser itself never fails: malformed input degrades to
//! fewer records. Errors only come from the layers around it, such as reading
//! files, writing output, and the chat store.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatview operations.
///
/// # Example
///
/// ```rust
/// use chatview::error::Result;
/// use chatview::ChatMessage;
///
/// fn load() -> Result<Vec<ChatMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatviewError>;

/// The error type for all chatview operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatviewError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - The store or output file cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input doesn't match the expected structure.
    ///
    /// Raised for unknown output extensions and corrupt store files, never
    /// for transcripts.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A stored chat with the requested id does not exist.
    #[error("Chat not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: u64,
    },

    /// Input to a store operation was rejected.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable reason
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Streaming parser error.
    #[cfg(feature = "streaming")]
    #[error("Streaming error: {0}")]
    Streaming(#[from] crate::streaming::StreamingError),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatviewError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatviewError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatviewError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatviewError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a not-found error for a stored chat id.
    pub fn not_found(id: u64) -> Self {
        ChatviewError::NotFound { id }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ChatviewError::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatviewError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatviewError::InvalidFormat { .. })
    }

    /// Returns `true` if a stored chat was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatviewError::NotFound { .. })
    }

    /// Returns `true` if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatviewError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatviewError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatviewError::invalid_format("output", "unknown extension '.txt'");
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains(".txt"));
    }

    #[test]
    fn test_not_found_display() {
        let err = ChatviewError::not_found(42);
        assert_eq!(err.to_string(), "Chat not found: 42");
    }

    #[test]
    fn test_validation_display() {
        let err = ChatviewError::validation("title must not be empty");
        assert!(err.to_string().contains("title must not be empty"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatviewError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatviewError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_not_found());
        assert!(!io_err.is_invalid_format());

        let missing = ChatviewError::not_found(7);
        assert!(missing.is_not_found());
        assert!(!missing.is_io());
        assert!(!missing.is_validation());

        let invalid = ChatviewError::validation("bad");
        assert!(invalid.is_validation());
        assert!(!invalid.is_invalid_format());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatviewError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ChatviewError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatviewError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatviewError::not_found(3);
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}

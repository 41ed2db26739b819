//! Core traits for streaming parsers.
//!
//! - [`MessageIterator`] - Iterator with progress tracking
//! - [`StreamingParser`] - Parser that produces iterators
//! - [`StreamingConfig`] - Configuration options

use std::path::Path;

use crate::ChatMessage;
use crate::error::ChatviewError;

use super::StreamingResult;

/// Iterator over records from a streaming parser with progress tracking.
///
/// This trait is object-safe, enabling dynamic dispatch via
/// `Box<dyn MessageIterator>`.
///
/// ```no_run
/// use chatview::streaming::{MessageIterator, StreamingParser, TranscriptStreamingParser};
///
/// let parser = TranscriptStreamingParser::new();
/// let mut iter = parser.stream("chat.txt".as_ref())?;
///
/// while let Some(result) = iter.next() {
///     let msg = result?;
///     if let Some(pct) = iter.progress() {
///         eprintln!("\r{:.1}% {}", pct, msg.id());
///     }
/// }
/// # Ok::<(), chatview::ChatviewError>(())
/// ```
pub trait MessageIterator: Iterator<Item = StreamingResult<ChatMessage>> + Send {
    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// Returns `None` if progress cannot be determined (e.g., unknown size).
    fn progress(&self) -> Option<f64> {
        None
    }

    /// Returns the number of bytes processed so far.
    fn bytes_processed(&self) -> u64;

    /// Returns the total input size in bytes, if known.
    fn total_bytes(&self) -> Option<u64> {
        None
    }
}

/// A parser that streams records without loading the whole file.
pub trait StreamingParser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Opens a file and returns an iterator over records.
    ///
    /// # Errors
    ///
    /// Returns [`ChatviewError::Io`] if the file cannot be opened.
    fn stream(&self, path: &Path) -> Result<Box<dyn MessageIterator>, ChatviewError>;

    /// Returns the recommended buffer size for this parser.
    fn recommended_buffer_size(&self) -> usize {
        64 * 1024 // 64KB default
    }
}

/// Configuration options for streaming parsers.
///
/// ```
/// use chatview::streaming::StreamingConfig;
///
/// let config = StreamingConfig::new()
///     .with_buffer_size(128 * 1024)
///     .with_skip_invalid(false);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StreamingConfig {
    /// Buffer size for file reading.
    ///
    /// Default: 64KB.
    pub buffer_size: usize,

    /// Maximum size of a single line in bytes.
    ///
    /// Default: 10MB. Longer lines are skipped or reported.
    pub max_message_size: usize,

    /// Whether to skip invalid lines or return errors.
    ///
    /// Default: `true` (skip).
    pub skip_invalid: bool,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,             // 64KB
            max_message_size: 10 * 1024 * 1024, // 10MB
            skip_invalid: true,
        }
    }
}

impl StreamingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets the maximum line size.
    #[must_use]
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    /// Sets whether to skip invalid lines.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

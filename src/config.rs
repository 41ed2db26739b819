//! Configuration types for the transcript parser.
//!
//! Configuration structs are plain data with builder methods and no CLI
//! framework dependencies, so they can be embedded in any host application.
//!
//! # Example
//!
//! ```rust
//! use chatview::config::TranscriptConfig;
//! use chatview::parsers::TranscriptParser;
//!
//! let config = TranscriptConfig::new()
//!     .with_streaming(true)
//!     .with_buffer_size(128 * 1024);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatview::config::TranscriptConfig;
///
/// // Keep the whitespace that follows `Sender:` in message bodies
/// let config = TranscriptConfig::new().with_trim_body_start(false);
/// assert!(!config.trim_body_start);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Drop whitespace between the sender's colon and the body (default: true)
    pub trim_body_start: bool,

    /// Use the line-by-line parser for `Parser::stream` (default: false)
    pub streaming: bool,

    /// Buffer size for streaming (default: 64KB)
    pub buffer_size: usize,

    /// Maximum size of a single transcript line in bytes (default: 10MB)
    pub max_message_size: usize,

    /// Skip oversized lines and I/O hiccups while streaming (default: true)
    pub skip_invalid: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            trim_body_start: true,
            streaming: false,
            buffer_size: 64 * 1024,             // 64KB
            max_message_size: 10 * 1024 * 1024, // 10MB
            skip_invalid: true,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a streaming-optimized configuration.
    pub fn streaming() -> Self {
        Self {
            streaming: true,
            buffer_size: 256 * 1024, // 256KB for streaming
            ..Self::default()
        }
    }

    /// Sets whether leading whitespace of authored bodies is dropped.
    #[must_use]
    pub fn with_trim_body_start(mut self, trim: bool) -> Self {
        self.trim_body_start = trim;
        self
    }

    /// Enables or disables streaming mode.
    #[must_use]
    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.streaming = enabled;
        self
    }

    /// Sets the buffer size for streaming.
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

    /// Sets whether to skip invalid lines while streaming.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

//! Parser trait for chat transcripts.
//!
//! [`Parser`] is the seam between transcript sources (files, strings,
//! uploads) and the code that consumes records. Parsing a string never
//! fails; only reading a file can.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatview::parser::Parser;
//! use chatview::parsers::TranscriptParser;
//! use std::path::Path;
//!
//! let parser = TranscriptParser::new();
//!
//! // Parse entire file into memory
//! let messages = parser.parse(Path::new("chat.txt"))?;
//!
//! // Or stream large exports record by record
//! for result in parser.stream(Path::new("chat.txt"))? {
//!     let msg = result?;
//!     println!("{}: {}", msg.sender().unwrap_or("*"), msg.text());
//! }
//! # Ok::<(), chatview::ChatviewError>(())
//! ```

use std::path::Path;

use crate::ChatMessage;
use crate::error::ChatviewError;

/// Boxed iterator returned by [`Parser::stream`].
pub type MessageStream = Box<dyn Iterator<Item = Result<ChatMessage, ChatviewError>> + Send>;

/// Unified trait for parsing chat transcripts.
///
/// Implementors must provide [`name`](Parser::name),
/// [`parse`](Parser::parse) and [`parse_str`](Parser::parse_str).
/// [`stream`](Parser::stream) falls back to an in-memory parse unless
/// overridden.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Parses a transcript file and returns all records.
    ///
    /// # Errors
    ///
    /// Returns [`ChatviewError::Io`] if the file cannot be read.
    fn parse(&self, path: &Path) -> Result<Vec<ChatMessage>, ChatviewError>;

    /// Parses a transcript already held in memory.
    fn parse_str(&self, content: &str) -> Result<Vec<ChatMessage>, ChatviewError>;

    /// Parses a transcript file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<Vec<ChatMessage>, ChatviewError> {
        self.parse(Path::new(path))
    }

    /// Streams records from a file.
    ///
    /// By default this loads the whole file and iterates over the result.
    fn stream(&self, path: &Path) -> Result<MessageStream, ChatviewError> {
        let messages = self.parse(path)?;
        Ok(Box::new(messages.into_iter().map(Ok)))
    }

    /// Returns whether [`stream`](Parser::stream) reads incrementally.
    fn supports_streaming(&self) -> bool {
        false
    }

    /// Returns the recommended buffer size for streaming.
    fn recommended_buffer_size(&self) -> usize {
        64 * 1024 // 64KB default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedParser;

    impl Parser for FixedParser {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn parse(&self, _path: &Path) -> Result<Vec<ChatMessage>, ChatviewError> {
            self.parse_str("")
        }

        fn parse_str(&self, _content: &str) -> Result<Vec<ChatMessage>, ChatviewError> {
            Ok(vec![
                ChatMessage::authored("1", "1/1/24", "9:00", "Alice", "one"),
                ChatMessage::notification("2", "1/1/24", "9:01", "Bob joined"),
            ])
        }
    }

    #[test]
    fn test_default_stream_falls_back_to_parse() {
        let parser = FixedParser;
        let streamed: Vec<_> = parser
            .stream(Path::new("unused"))
            .unwrap()
            .map(Result::unwrap)
            .collect();
        assert_eq!(streamed, parser.parse_str("").unwrap());
        assert!(!parser.supports_streaming());
        assert_eq!(parser.recommended_buffer_size(), 64 * 1024);
    }

    #[test]
    fn test_parse_file_delegates() {
        let parser = FixedParser;
        assert_eq!(parser.parse_file("unused").unwrap().len(), 2);
    }
}

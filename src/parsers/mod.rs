//! Transcript parsers.
//!
//! - [`parse_transcript`] / [`parse_transcript_with`]: infallible functions
//!   over an in-memory string
//! - [`TranscriptParser`]: implements [`Parser`](crate::parser::Parser) for
//!   files and strings
//! - [`Accumulator`]: the line-at-a-time state machine both are built on
//!
//! # Example
//!
//! ```rust
//! use chatview::parsers::parse_transcript;
//!
//! let messages = parse_transcript("1/1/24, 9:00 - Bob: meet at 9:30: confirmed");
//! assert_eq!(messages[0].sender(), Some("Bob"));
//! assert_eq!(messages[0].text(), "meet at 9:30: confirmed");
//! ```

pub mod transcript;

pub use transcript::{Accumulator, TranscriptParser, parse_transcript, parse_transcript_with};

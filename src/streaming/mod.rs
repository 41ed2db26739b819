//! Streaming parser for memory-efficient processing of large transcripts.
//!
//! The in-memory parser reads the whole export into a `String`. For very
//! large exports the streaming parser reads one line at a time and holds only
//! the record being built.
//!
//! # Architecture
//!
//! - [`StreamingParser`] - opens a source and produces an iterator
//! - [`MessageIterator`] - the iterator, with progress reporting
//!
//! # Example
//!
//! ```rust,no_run
//! use chatview::streaming::{StreamingParser, TranscriptStreamingParser};
//! use chatview::ChatMessage;
//!
//! let parser = TranscriptStreamingParser::new();
//!
//! for result in parser.stream("large_export.txt".as_ref())? {
//!     match result {
//!         Ok(message) => println!("{}: {}", message.sender().unwrap_or("*"), message.text()),
//!         Err(e) => eprintln!("Skipped line: {}", e),
//!     }
//! }
//!
//! let messages: Vec<ChatMessage> = parser
//!     .stream("large_export.txt".as_ref())?
//!     .filter_map(Result::ok)
//!     .collect();
//! # Ok::<(), chatview::ChatviewError>(())
//! ```

mod error;
mod traits;
mod transcript;

pub use error::{StreamingError, StreamingResult};
pub use traits::{MessageIterator, StreamingConfig, StreamingParser};
pub use transcript::{TranscriptMessageIterator, TranscriptStreamingParser};

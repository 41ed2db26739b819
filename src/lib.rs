//! # Chatview
//!
//! A Rust library for turning exported chat transcripts into ordered message
//! records ready for display.
//!
//! ## Overview
//!
//! A messaging app's "export chat" feature produces plain text where every
//! message starts with a date/time header and may continue on the following
//! lines. Two header styles are common:
//!
//! ```text
//! [10/02/2026, 3:38:00 PM] Alice: Hi
//! 10/02/2026, 3:38 pm - Alice: Hi
//! ```
//!
//! Chatview recognizes both with one pattern, folds multi-line bodies, and
//! separates service notifications (`Alice left`) from authored messages.
//! Parsing never fails: lines it cannot place degrade into continuations or
//! are dropped when they precede the first header.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatview::prelude::*;
//!
//! let raw = "\
//! [10/02/2026, 3:38:00 PM] Alice: Hi
//! how are you?
//! 10/02/2026, 3:39 pm - Bob: meet at 9:30: ok?
//! 10/02/2026, 3:40 pm - Alice left";
//!
//! let messages = parse_transcript(raw);
//! assert_eq!(messages.len(), 3);
//! assert_eq!(messages[0].text(), "Hi\nhow are you?");
//! assert_eq!(messages[1].text(), "meet at 9:30: ok?");
//! assert!(messages[2].is_notification());
//! ```
//!
//! ## Streaming for Large Files
//!
//! ```rust,no_run
//! # #[cfg(feature = "streaming")]
//! # fn main() -> chatview::Result<()> {
//! use chatview::streaming::{StreamingParser, TranscriptStreamingParser};
//!
//! let parser = TranscriptStreamingParser::new();
//! for result in parser.stream("huge_export.txt".as_ref())? {
//!     let msg = result?;
//!     println!("{}: {}", msg.sender().unwrap_or("*"), msg.text());
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "streaming"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`ChatMessage`], the parsed record
//! - [`parsing`] - header pattern and line classification
//! - [`parsers`] - [`parse_transcript`], the accumulator, [`TranscriptParser`](parsers::TranscriptParser)
//! - [`parser`] - the [`Parser`](parser::Parser) trait
//! - [`streaming`] - line-by-line parser for large files
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig)
//! - [`core`] - filters, participants, grouping, output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and dispatch helpers
//! - [`store`] - chat persistence ([`MemoryStore`](store::MemoryStore), `JsonFileStore`)
//! - [`cli`] - CLI argument types
//! - [`error`] - [`ChatviewError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod store;
#[cfg(feature = "streaming")]
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use error::{ChatviewError, Result};
pub use message::ChatMessage;
pub use parsers::{parse_transcript, parse_transcript_with};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ChatMessage;

    pub use crate::error::{ChatviewError, Result};

    pub use crate::parser::Parser;
    pub use crate::parsers::{TranscriptParser, parse_transcript, parse_transcript_with};

    pub use crate::config::TranscriptConfig;

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::participants::{Perspective, participants};
    pub use crate::core::processor::{MessageGroup, TranscriptStats, group_consecutive};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;

    pub use crate::store::{ChatStore, MemoryStore, NewChat, StoredChat};
    #[cfg(feature = "file-store")]
    pub use crate::store::JsonFileStore;

    #[cfg(feature = "streaming")]
    pub use crate::streaming::{StreamingParser, TranscriptStreamingParser};
}

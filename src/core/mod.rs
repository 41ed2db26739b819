//! Core processing on parsed records.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`filter`] - Record filtering by sender and kind
//! - [`participants`] - Participant list and viewer perspective
//! - [`processor`] - Grouping of consecutive records and statistics
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatview::core::{FilterConfig, Perspective, apply_filters, group_consecutive};
//! use chatview::parse_transcript;
//!
//! let messages = parse_transcript("1/1/24, 9:00 - Alice: Hi\n1/1/24, 9:01 - Alice: again");
//! let view = Perspective::new(&messages, None);
//! assert_eq!(view.viewer(), Some("Alice"));
//! assert_eq!(group_consecutive(&messages).len(), 1);
//!
//! let only_bob = apply_filters(messages, &FilterConfig::new().with_sender("Bob"));
//! assert!(only_bob.is_empty());
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod participants;
pub mod processor;

pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;
pub use participants::{PALETTE_SIZE, Perspective, participants};
pub use processor::{MessageGroup, TranscriptStats, group_consecutive};

pub use crate::ChatMessage;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

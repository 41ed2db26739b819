//! Shared parsing utilities.
//!
//! This module contains the header pattern and line classification used by
//! both the in-memory parser and the streaming parser, so the two can never
//! disagree about where a record starts.

pub mod transcript;

pub use transcript::{
    Content, HEADER_PATTERN, Header, LineKind, classify_line, header_regex, is_header_line,
    match_header, split_content,
};

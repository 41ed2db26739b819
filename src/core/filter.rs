//! Filter records by sender and kind.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Authored records from one participant |
//! | Kind | [`without_notifications`](FilterConfig::without_notifications) | Drop notification records |
//!
//! # Examples
//!
//! ```
//! use chatview::core::filter::{FilterConfig, apply_filters};
//! use chatview::parse_transcript;
//!
//! let messages = parse_transcript(
//!     "1/1/24, 9:00 - Alice: Hello\n1/1/24, 9:01 - Bob: Hi there\n1/1/24, 9:02 - alice: How are you?",
//! );
//!
//! // Case-insensitive sender matching
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[1].id(), "3");
//! ```
//!
//! # Behavior Notes
//!
//! - A sender filter never matches notifications, which have no sender
//! - Sender matching is case-insensitive for ASCII characters
//! - Order and ids of surviving records are unchanged
//! - Multiple filters are combined with AND logic

use crate::ChatMessage;

/// Configuration for filtering records.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only authored records from this sender (case-insensitive).
    pub sender: Option<String>,

    /// Keep notification records (default: true).
    pub include_notifications: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sender: None,
            include_notifications: true,
        }
    }
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender filter.
    ///
    /// ```
    /// use chatview::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_sender("Alice");
    /// assert!(config.is_active());
    /// ```
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Drops notification records.
    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.include_notifications = false;
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.sender.is_some() || !self.include_notifications
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &ChatMessage) -> bool {
        if !self.include_notifications && msg.is_notification() {
            return false;
        }

        match &self.sender {
            Some(wanted) => msg
                .sender()
                .is_some_and(|sender| sender.eq_ignore_ascii_case(wanted)),
            None => true,
        }
    }
}

/// Filters a collection of records based on the provided configuration.
///
/// Returns a new vector containing only records that match all active
/// filters. If no filters are active, returns the input unchanged.
///
/// This function consumes the input vector. For streaming use cases, call
/// [`FilterConfig::matches`] inline during iteration instead.
pub fn apply_filters(messages: Vec<ChatMessage>, config: &FilterConfig) -> Vec<ChatMessage> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}

//! The message record produced by the transcript parser.
//!
//! [`ChatMessage`] is the only entity the parser emits. Each record covers
//! one header line of the transcript plus the continuation lines that follow
//! it. Date and time are kept as the raw tokens that appeared in the export;
//! nothing is normalized.
//!
//! # Examples
//!
//! ```
//! use chatview::ChatMessage;
//!
//! let msg = ChatMessage::authored("1", "10/02/2026", "3:38 pm", "Alice", "Hi");
//! assert_eq!(msg.sender(), Some("Alice"));
//! assert!(!msg.is_notification());
//!
//! let note = ChatMessage::notification("2", "10/02/2026", "3:40 pm", "Alice left");
//! assert!(note.is_notification());
//! assert!(note.sender().is_none());
//! ```
//!
//! ## Serialization
//!
//! Field names follow the camelCase shape the viewer expects, and absent
//! optionals are omitted:
//!
//! ```
//! use chatview::ChatMessage;
//!
//! let note = ChatMessage::notification("1", "1/1/24", "9:00", "Bob joined");
//! let json = serde_json::to_string(&note)?;
//! assert!(json.contains(r#""isNotification":true"#));
//! assert!(!json.contains("sender"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// A single record of a parsed transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `String` | Ordinal assigned at parse time (`"1"`, `"2"`, ...) |
/// | `is_notification` | `bool` | No identifiable author (system/service text) |
/// | `date` | `Option<String>` | Raw date token |
/// | `time` | `Option<String>` | Raw time token |
/// | `sender` | `Option<String>` | Author, present only for authored messages |
/// | `text` | `String` | Body, continuation lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Ordinal identifier, unique within one parse.
    pub id: String,

    /// `true` when the header line carried no `sender:` prefix.
    pub is_notification: bool,

    /// Date token exactly as it appeared in the transcript.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<String>,

    /// Time token exactly as it appeared in the transcript.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub time: Option<String>,

    /// Author name. `None` for notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sender: Option<String>,

    /// Message body.
    ///
    /// Never contains the date/time/sender prefix of the header line.
    pub text: String,
}

impl ChatMessage {
    /// Creates an authored message.
    pub fn authored(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            is_notification: false,
            date: Some(date.into()),
            time: Some(time.into()),
            sender: Some(sender.into()),
            text: text.into(),
        }
    }

    /// Creates a notification (no sender).
    pub fn notification(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            is_notification: true,
            date: Some(date.into()),
            time: Some(time.into()),
            sender: None,
            text: text.into(),
        }
    }

    /// Appends a continuation line, separated by a single newline.
    pub fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the ordinal id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` for notifications.
    pub fn is_notification(&self) -> bool {
        self.is_notification
    }

    /// Returns the raw date token, if any.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Returns the raw time token, if any.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Returns the sender, if this is an authored message.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns the body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

//! Persistence for parsed chats.
//!
//! A chat is created from a title and a raw transcript. The transcript is
//! parsed once, at creation, and the records are stored verbatim next to the
//! title and a creation timestamp.
//!
//! Stores are explicitly owned values handed to whoever needs them; there is
//! no process-wide instance.
//!
//! - [`MemoryStore`] - `RwLock`-guarded vector, lost on drop
//! - [`JsonFileStore`] - single JSON file, replaced atomically on every write
//!   (requires the `file-store` feature)
//!
//! # Example
//!
//! ```rust
//! use chatview::store::{ChatStore, MemoryStore, NewChat};
//!
//! let store = MemoryStore::new();
//! let chat = store.create(NewChat::new("Team", "1/1/24, 9:00 - Ann: hi"))?;
//! assert_eq!(chat.id, 1);
//! assert_eq!(chat.parsed_data.len(), 1);
//!
//! assert_eq!(store.get(1)?.title, "Team");
//! assert!(store.get(2).unwrap_err().is_not_found());
//! # Ok::<(), chatview::ChatviewError>(())
//! ```

#[cfg(feature = "file-store")]
mod file;
mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ChatMessage;
use crate::error::{ChatviewError, Result};
use crate::parse_transcript;

#[cfg(feature = "file-store")]
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Input for [`ChatStore::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChat {
    /// Display title, must not be blank
    pub title: String,
    /// Transcript exactly as exported
    pub raw_text: String,
}

impl NewChat {
    pub fn new(title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Rejects a blank title.
    ///
    /// # Errors
    ///
    /// Returns [`ChatviewError::Validation`] when the title is empty or
    /// whitespace only.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ChatviewError::validation("title must not be empty"));
        }
        Ok(())
    }
}

/// A chat as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredChat {
    pub id: u64,
    pub title: String,
    pub parsed_data: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl StoredChat {
    /// Validates `new`, parses its transcript and stamps the current time.
    pub(crate) fn build(id: u64, new: NewChat) -> Result<Self> {
        new.validate()?;
        Ok(Self {
            id,
            parsed_data: parse_transcript(&new.raw_text),
            title: new.title,
            created_at: Utc::now(),
        })
    }

    /// Number of parsed records.
    pub fn message_count(&self) -> usize {
        self.parsed_data.len()
    }
}

/// Storage contract for chats.
///
/// Implementations are shared across threads and guard their own state.
pub trait ChatStore: Send + Sync {
    /// Parses and stores a new chat, assigning the next id.
    ///
    /// # Errors
    ///
    /// [`ChatviewError::Validation`] for a blank title, or a backend error.
    fn create(&self, new: NewChat) -> Result<StoredChat>;

    /// All chats, newest first.
    ///
    /// # Errors
    ///
    /// Backend errors only.
    fn list(&self) -> Result<Vec<StoredChat>>;

    /// Looks up one chat.
    ///
    /// # Errors
    ///
    /// [`ChatviewError::NotFound`] if no chat has this id.
    fn get(&self, id: u64) -> Result<StoredChat>;
}

/// Orders chats by creation time, newest first; higher id wins ties.
pub(crate) fn sort_newest_first(chats: &mut [StoredChat]) {
    chats.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

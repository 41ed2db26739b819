//! In-memory chat store.

use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::error::{ChatviewError, Result};

use super::{ChatStore, NewChat, StoredChat, sort_newest_first};

#[derive(Debug)]
struct Inner {
    chats: Vec<StoredChat>,
    next_id: u64,
}

/// Chat store held in process memory.
///
/// Ids start at `1` and are never reused.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                chats: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored chats.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .chats
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore for MemoryStore {
    fn create(&self, new: NewChat) -> Result<StoredChat> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let chat = StoredChat::build(inner.next_id, new)?;
        inner.next_id += 1;
        inner.chats.push(chat.clone());

        info!(id = chat.id, records = chat.message_count(), "chat created");
        Ok(chat)
    }

    fn list(&self) -> Result<Vec<StoredChat>> {
        let mut chats = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .chats
            .clone();
        sort_newest_first(&mut chats);
        Ok(chats)
    }

    fn get(&self, id: u64) -> Result<StoredChat> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .chats
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ChatviewError::not_found(id))
    }
}

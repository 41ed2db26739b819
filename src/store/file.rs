//! Chat store persisted to a single JSON file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ChatviewError, Result};

use super::{ChatStore, NewChat, StoredChat, sort_newest_first};

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    next_id: u64,
    chats: Vec<StoredChat>,
}

/// Chat store backed by one JSON file.
///
/// Every mutation rewrites the whole file through a temporary file in the
/// same directory followed by a rename, so readers never observe a partial
/// write. A missing file is an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreFile> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(StoreFile {
                    next_id: 1,
                    chats: Vec::new(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut file: StoreFile = serde_json::from_slice(&data).map_err(|e| {
            ChatviewError::invalid_format("store", format!("{}: {e}", self.path.display()))
        })?;

        let max_id = file.chats.iter().map(|c| c.id).max().unwrap_or(0);
        file.next_id = file.next_id.max(max_id + 1);

        debug!(path = %self.path.display(), chats = file.chats.len(), "store loaded");
        Ok(file)
    }

    fn save(&self, file: &StoreFile) -> Result<()> {
        let json = serde_json::to_vec_pretty(file)?;
        write_atomic(&self.path, &json)
    }
}

/// Writes `data` to a temp file next to `path`, then renames it over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ChatviewError::Io(e.error))?;
    Ok(())
}

impl ChatStore for JsonFileStore {
    fn create(&self, new: NewChat) -> Result<StoredChat> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = self.load()?;
        let chat = StoredChat::build(file.next_id, new)?;
        file.next_id += 1;
        file.chats.push(chat.clone());
        self.save(&file)?;

        info!(id = chat.id, records = chat.message_count(), path = %self.path.display(), "chat created");
        Ok(chat)
    }

    fn list(&self) -> Result<Vec<StoredChat>> {
        let mut chats = self.load()?.chats;
        sort_newest_first(&mut chats);
        Ok(chats)
    }

    fn get(&self, id: u64) -> Result<StoredChat> {
        self.load()?
            .chats
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ChatviewError::not_found(id))
    }
}

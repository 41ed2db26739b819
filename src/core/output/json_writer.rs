//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ChatMessage;
use crate::error::Result;

/// Writes records to a JSON file as a pretty-printed array.
///
/// Records are complete: `id` is always present, `date`, `time` and
/// `sender` whenever the record has them.
///
/// # Format
/// ```json
/// [
///   {"id": "1", "isNotification": false, "date": "1/15/24", "time": "10:30 AM", "sender": "Alice", "text": "Hello"},
///   {"id": "2", "isNotification": true, "date": "1/15/24", "time": "10:31 AM", "text": "Bob joined"}
/// ]
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_json(messages: &[ChatMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Same format as [`write_json`], returned as a `String`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(messages: &[ChatMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools and appending to
//! existing datasets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ChatMessage;
use crate::error::Result;

/// Writes records to a JSONL file.
///
/// Each line is a complete record:
/// ```jsonl
/// {"id":"1","isNotification":false,"date":"1/1/24","time":"9:00","sender":"Alice","text":"Hello"}
/// {"id":"2","isNotification":true,"date":"1/1/24","time":"9:01","text":"Bob joined"}
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_jsonl(messages: &[ChatMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_jsonl_to(messages, BufWriter::new(file))
}

/// Converts records to a JSONL string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_jsonl(messages: &[ChatMessage]) -> Result<String> {
    let mut buffer = Vec::new();
    write_jsonl_to(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_jsonl_to<W: Write>(messages: &[ChatMessage], mut out: W) -> Result<()> {
    for msg in messages {
        serde_json::to_writer(&mut out, msg)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}

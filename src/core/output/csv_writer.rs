//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::ChatMessage;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on [`OutputConfig`]
///   - Always: `Sender`, `Text`, `Notification`
///   - With ids: `ID` first
///   - With dates: `Date`, `Time` before `Sender`
/// - Encoding: UTF-8
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv(
    messages: &[ChatMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(messages, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], returned as a `String`.
///
/// # Errors
///
/// Returns an error if CSV encoding fails.
pub fn to_csv(messages: &[ChatMessage], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_csv_to<W: Write>(messages: &[ChatMessage], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;

    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_ids {
        header.push("ID");
    }
    if config.include_dates {
        header.push("Date");
        header.push("Time");
    }

    header.push("Sender");
    header.push("Text");
    header.push("Notification");

    header
}

/// Build CSV record for a single record.
fn build_record<'a>(msg: &'a ChatMessage, config: &OutputConfig) -> Vec<&'a str> {
    let mut record = Vec::new();

    if config.include_ids {
        record.push(msg.id());
    }
    if config.include_dates {
        record.push(msg.date().unwrap_or_default());
        record.push(msg.time().unwrap_or_default());
    }

    record.push(msg.sender().unwrap_or_default());
    record.push(msg.text());
    record.push(if msg.is_notification() { "true" } else { "false" });

    record
}

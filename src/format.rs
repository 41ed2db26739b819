//! Output format selection.
//!
//! [`OutputFormat`] names the serializations the writers in
//! [`core::output`](crate::core::output) produce, and dispatches to them.
//! It has no CLI framework dependency; the CLI maps its own flag onto it.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatview::Result<()> {
//! use chatview::format::{OutputFormat, to_format_string};
//! use chatview::core::models::OutputConfig;
//! use chatview::parse_transcript;
//!
//! let messages = parse_transcript("1/1/24, 9:00 - Alice: Hello!");
//!
//! let format = OutputFormat::from_path("export.jsonl")?;
//! let text = to_format_string(&messages, format, &OutputConfig::new())?;
//! assert_eq!(text.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ChatMessage;
use crate::core::models::OutputConfig;
use crate::error::ChatviewError;

/// Serialization of parsed records.
///
/// ```rust
/// use chatview::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty JSON array, the same shape stored chats carry
    #[default]
    Json,

    /// One JSON object per line (NDJSON)
    Jsonl,

    /// Semicolon separated values
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    ///
    /// ```rust
    /// use chatview::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jsonl.mime_type(), "application/x-ndjson");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Cargo feature that compiles the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }

    /// Detects format from a file path based on its extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatviewError::InvalidFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatviewError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        Self::from_name(&ext).ok_or_else(|| {
            ChatviewError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv"),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }

    fn unavailable(self) -> ChatviewError {
        ChatviewError::invalid_format(
            "output",
            format!(
                "Output format {self} requires the '{}' feature to be enabled",
                self.required_feature()
            ),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_lowercase()).ok_or_else(|| {
            ChatviewError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{s}'. Expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

/// Writes records to a file in the specified format.
///
/// `config` selects the optional CSV columns; JSON and JSONL records are
/// always complete.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[ChatMessage],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

/// Converts records to a string in the specified format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or serialization
/// fails.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[ChatMessage],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatviewError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

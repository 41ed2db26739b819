//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of complete records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | CSV | Spreadsheets, quick inspection |
//! | JSON | Structured data, APIs |
//! | JSONL | Line-oriented pipelines, appending |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatview::Result<()> {
//! use chatview::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use chatview::core::models::OutputConfig;
//! use chatview::parse_transcript;
//!
//! let messages = parse_transcript("1/1/24, 9:00 - Alice: Hello!\n1/1/24, 9:01 - Bob: Hi there!");
//!
//! let config = OutputConfig::new().with_dates();
//!
//! write_csv(&messages, "output.csv", &config)?;
//! write_json(&messages, "output.json")?;
//! write_jsonl(&messages, "output.jsonl")?;
//!
//! let csv_string = to_csv(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

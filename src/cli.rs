//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - top-level arguments (for use with clap)
//! - [`Command`] - the `parse`, `import`, `list` and `show` subcommands
//! - [`FormatArg`] - output format flag, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::format::OutputFormat;

/// Store file used when `--store` is not given.
pub const DEFAULT_STORE_PATH: &str = "chatview_store.json";

/// Turn exported chat transcripts into structured message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatview")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatview parse chat.txt
    chatview parse chat.txt -o chat.csv --dates --no-notifications
    chatview parse huge_export.txt --stream -f jsonl -o out.jsonl
    chatview import family.txt
    chatview import chat.txt --title \"Family\"
    chatview list
    chatview show 1 --view-as Alice")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a transcript and print or write its records
    Parse(ParseArgs),

    /// Parse a transcript and save it as a new chat
    Import(ImportArgs),

    /// List saved chats, newest first
    List(StoreArgs),

    /// Print a saved chat
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Output format (default: from the output extension, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep only messages from this sender (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Drop notification records
    #[arg(long)]
    pub no_notifications: bool,

    /// Add an ID column to CSV output (JSON always carries ids)
    #[arg(long)]
    pub ids: bool,

    /// Add Date and Time columns to CSV output (JSON always carries them)
    #[arg(long)]
    pub dates: bool,

    /// Read the transcript line by line instead of all at once
    #[arg(long)]
    pub stream: bool,
}

impl ParseArgs {
    /// Resolves the output format: explicit flag, then output extension,
    /// then JSON.
    pub fn resolved_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path to the chat store file
    #[arg(long, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Title of the new chat (default: input file name without extension)
    #[arg(short, long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl ImportArgs {
    /// Title used when none is given and the input has no usable file name.
    pub const FALLBACK_TITLE: &'static str = "Untitled Chat";

    /// `--title`, else the input file stem, else [`Self::FALLBACK_TITLE`].
    pub fn resolved_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.trim().is_empty())
            .map_or_else(|| Self::FALLBACK_TITLE.to_string(), str::to_string)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Id of the chat to print
    pub id: u64,

    /// Participant whose messages are marked as own (default: first sender)
    #[arg(long, value_name = "NAME")]
    pub view_as: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormatArg {
    /// Pretty JSON array
    Json,

    /// One JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// Semicolon separated values
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

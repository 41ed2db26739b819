//! Header pattern and line classification for chat transcripts.
//!
//! Exported transcripts come in two header styles depending on the client
//! platform:
//!
//! - Bracketed: `[10/02/2026, 3:38:00 PM] Alice: Hi`
//! - Dashed: `10/02/2026, 3:38 pm - Alice: Hi`
//!
//! A single pattern accepts both, so a file never has to be sniffed for its
//! platform before parsing. Tokens are captured verbatim: `1/1/24` and
//! `01.01.2024` are both valid dates and neither is normalized.

use std::sync::OnceLock;

use regex::Regex;

/// Pattern matching a header line.
///
/// Groups: `date`, `time`, `content`. Digits are ASCII only.
///
/// - date: 1-2 digit day, `/` or `.`, 1-2 digit month, the same separator,
///   then a 4 or 2 digit year
/// - one or more commas/whitespace
/// - time: `H:MM` or `HH:MM`, optional `:SS`, optional am/pm marker in any
///   case, preceded by at most one space or U+202F (narrow no-break space)
/// - optional `]`, optional whitespace, optional `-` with trailing whitespace
/// - content: the rest of the line
pub const HEADER_PATTERN: &str = r"^\[?(?P<date>[0-9]{1,2}/[0-9]{1,2}/(?:[0-9]{4}|[0-9]{2})|[0-9]{1,2}\.[0-9]{1,2}\.(?:[0-9]{4}|[0-9]{2}))[,\s]+(?P<time>[0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?(?:[\s\x{202F}]?(?i:[ap]m))?)\]?\s*(?:-\s*)?(?P<content>.*)$";

/// Returns the compiled header pattern, built once per process.
pub fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"))
}

/// Tokens extracted from a header line, borrowed from the trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Raw date token, e.g. `10/02/2026`
    pub date: &'a str,
    /// Raw time token, e.g. `3:38:00 PM`
    pub time: &'a str,
    /// Everything after the date/time prefix
    pub content: &'a str,
}

/// Classification of a non-blank transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new record.
    Header(Header<'a>),
    /// Belongs to the record currently being accumulated.
    Continuation(&'a str),
}

/// The remainder of a header line after the date/time prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// `Sender: body`, split on the first colon.
    Authored {
        /// Text before the first colon, trimmed
        sender: &'a str,
        /// Text after the first colon
        body: &'a str,
    },
    /// No colon anywhere: service text such as `Alice left`.
    Notification(&'a str),
}

/// Matches a single already-trimmed line against the header pattern.
pub fn match_header(line: &str) -> Option<Header<'_>> {
    let caps = header_regex().captures(line)?;
    Some(Header {
        date: caps.name("date").map_or("", |m| m.as_str()),
        time: caps.name("time").map_or("", |m| m.as_str()),
        content: caps.name("content").map_or("", |m| m.as_str()),
    })
}

/// Classifies a raw line.
///
/// The line is trimmed first. Blank lines return `None`: they never start a
/// record and are never folded into one.
pub fn classify_line(raw: &str) -> Option<LineKind<'_>> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    Some(match match_header(line) {
        Some(header) => LineKind::Header(header),
        None => LineKind::Continuation(line),
    })
}

/// Returns `true` if the trimmed line starts a new record.
pub fn is_header_line(line: &str) -> bool {
    header_regex().is_match(line.trim())
}

/// Splits header content into sender and body.
///
/// Only the first colon splits, so `Bob: meet at 9:30` yields sender `Bob`
/// and body `meet at 9:30`. With `trim_body_start` off the body keeps the
/// whitespace that followed the colon.
pub fn split_content(content: &str, trim_body_start: bool) -> Content<'_> {
    match content.split_once(':') {
        Some((sender, body)) => Content::Authored {
            sender: sender.trim(),
            body: if trim_body_start {
                body.trim_start()
            } else {
                body
            },
        },
        None => Content::Notification(content),
    }
}

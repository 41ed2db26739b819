//! Transcript parser: the two-state accumulator.
//!
//! The parser makes a single pass over the transcript. Each non-blank line is
//! either a header (it starts a new record) or a continuation (it extends the
//! record being built). The state is explicit:
//!
//! - `Idle`: no record is open. Continuation lines are discarded.
//! - `Accumulating`: a record is open and collects continuation lines until
//!   the next header closes it, or input ends.
//!
//! Ids are assigned when a record is opened, starting at `1`.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::ChatMessage;
use crate::config::TranscriptConfig;
use crate::error::ChatviewError;
use crate::parser::Parser;
use crate::parsing::transcript::{Content, Header, LineKind, classify_line, split_content};

#[cfg(feature = "streaming")]
use crate::parser::MessageStream;
#[cfg(feature = "streaming")]
use crate::streaming::{StreamingConfig, StreamingParser, TranscriptStreamingParser};

/// Byte order mark some exporters put at the start of the file.
const BOM: char = '\u{FEFF}';

/// Parses a transcript with the default configuration.
///
/// Never fails: empty input, or input without a single header line, yields
/// an empty vector.
///
/// # Example
///
/// ```rust
/// use chatview::parse_transcript;
///
/// let raw = "[10/02/2026, 3:38:00 PM] Alice: Hi\nhow are you?\n10/02/2026, 3:40 pm - Alice left";
/// let messages = parse_transcript(raw);
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].text(), "Hi\nhow are you?");
/// assert!(messages[1].is_notification());
/// ```
pub fn parse_transcript(raw: &str) -> Vec<ChatMessage> {
    parse_transcript_with(raw, &TranscriptConfig::default())
}

/// Parses a transcript with a custom configuration.
pub fn parse_transcript_with(raw: &str, config: &TranscriptConfig) -> Vec<ChatMessage> {
    let mut accumulator = Accumulator::new(config);
    let mut messages = Vec::new();
    let raw = raw.strip_prefix(BOM).unwrap_or(raw);

    for line in raw.split('\n') {
        if let Some(closed) = accumulator.feed(line) {
            messages.push(closed);
        }
    }
    messages.extend(accumulator.finish());

    debug!(
        records = messages.len(),
        discarded = accumulator.discarded(),
        "parsed transcript"
    );
    messages
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Accumulating(ChatMessage),
}

/// Line-at-a-time state machine that builds [`ChatMessage`] records.
///
/// Both the in-memory and the streaming parser drive this type, so they
/// produce identical sequences for identical input.
///
/// ```rust
/// use chatview::config::TranscriptConfig;
/// use chatview::parsers::Accumulator;
///
/// let mut acc = Accumulator::new(&TranscriptConfig::default());
/// assert!(acc.feed("1/1/24, 9:00 - Bob: hello").is_none());
/// assert!(acc.feed("second line").is_none());
///
/// let closed = acc.feed("1/1/24, 9:01 - Bob: again").unwrap();
/// assert_eq!(closed.text(), "hello\nsecond line");
///
/// let last = acc.finish().unwrap();
/// assert_eq!(last.id(), "2");
/// ```
#[derive(Debug)]
pub struct Accumulator {
    state: State,
    next_id: u64,
    trim_body_start: bool,
    discarded: usize,
}

impl Accumulator {
    /// Creates an idle accumulator whose first record gets id `1`.
    pub fn new(config: &TranscriptConfig) -> Self {
        Self {
            state: State::Idle,
            next_id: 1,
            trim_body_start: config.trim_body_start,
            discarded: 0,
        }
    }

    /// Feeds one raw line and returns the record it closed, if any.
    ///
    /// - blank line: ignored
    /// - header line: closes the open record (returned) and opens a new one
    /// - other line: appended to the open record, or discarded when idle
    pub fn feed(&mut self, raw: &str) -> Option<ChatMessage> {
        match classify_line(raw)? {
            LineKind::Header(header) => {
                let opened = self.open(header);
                match std::mem::replace(&mut self.state, State::Accumulating(opened)) {
                    State::Accumulating(closed) => Some(closed),
                    State::Idle => None,
                }
            }
            LineKind::Continuation(line) => {
                match &mut self.state {
                    State::Accumulating(current) => current.append_line(line),
                    State::Idle => {
                        self.discarded += 1;
                        trace!(line = line, "discarding line before first header");
                    }
                }
                None
            }
        }
    }

    /// Closes the open record at end of input.
    ///
    /// The accumulator is idle afterwards; ids keep counting if it is fed
    /// again.
    pub fn finish(&mut self) -> Option<ChatMessage> {
        match std::mem::take(&mut self.state) {
            State::Accumulating(message) => Some(message),
            State::Idle => None,
        }
    }

    /// Returns `true` while a record is open.
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, State::Accumulating(_))
    }

    /// Number of records opened so far.
    pub fn opened(&self) -> u64 {
        self.next_id - 1
    }

    /// Number of non-blank lines dropped because no record was open.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    fn open(&mut self, header: Header<'_>) -> ChatMessage {
        let id = self.next_id.to_string();
        self.next_id += 1;

        match split_content(header.content, self.trim_body_start) {
            Content::Authored { sender, body } => {
                ChatMessage::authored(id, header.date, header.time, sender, body)
            }
            Content::Notification(text) => {
                ChatMessage::notification(id, header.date, header.time, text)
            }
        }
    }
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatview::parsers::TranscriptParser;
/// use chatview::parser::Parser;
///
/// let parser = TranscriptParser::new();
/// let messages = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatview::ChatviewError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Creates a parser optimized for streaming large files.
    pub fn with_streaming() -> Self {
        Self {
            config: TranscriptConfig::streaming(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Parses a transcript string. Infallible.
    pub fn parse_text(&self, raw: &str) -> Vec<ChatMessage> {
        parse_transcript_with(raw, &self.config)
    }
}

impl Parser for TranscriptParser {
    fn name(&self) -> &'static str {
        "Transcript"
    }

    fn parse(&self, path: &Path) -> Result<Vec<ChatMessage>, ChatviewError> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_text(&content))
    }

    fn parse_str(&self, content: &str) -> Result<Vec<ChatMessage>, ChatviewError> {
        Ok(self.parse_text(content))
    }

    #[cfg(feature = "streaming")]
    fn stream(&self, path: &Path) -> Result<MessageStream, ChatviewError> {
        if self.config.streaming {
            let streaming_config = StreamingConfig::new()
                .with_buffer_size(self.config.buffer_size)
                .with_max_message_size(self.config.max_message_size)
                .with_skip_invalid(self.config.skip_invalid);

            let streaming_parser = TranscriptStreamingParser::with_config(streaming_config)
                .with_trim_body_start(self.config.trim_body_start);
            let iterator = StreamingParser::stream(&streaming_parser, path)?;

            Ok(Box::new(
                iterator.map(|result| result.map_err(ChatviewError::from)),
            ))
        } else {
            let messages = Parser::parse(self, path)?;
            Ok(Box::new(messages.into_iter().map(Ok)))
        }
    }

    #[cfg(feature = "streaming")]
    fn supports_streaming(&self) -> bool {
        self.config.streaming
    }

    fn recommended_buffer_size(&self) -> usize {
        self.config.buffer_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn senders(messages: &[ChatMessage]) -> Vec<Option<&str>> {
        messages.iter().map(ChatMessage::sender).collect()
    }

    #[test]
    fn test_parser_name() {
        let parser = TranscriptParser::new();
        assert_eq!(Parser::name(&parser), "Transcript");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_transcript("").is_empty());
        assert!(parse_transcript("\n\n   \n").is_empty());
    }

    #[test]
    fn test_garbage_input() {
        assert!(parse_transcript("hello\nworld").is_empty());
    }

    #[test]
    fn test_bracketed_and_dashed_headers_agree() {
        let bracketed = parse_transcript("[10/02/2026, 3:38:00 PM] Alice: Hi");
        let dashed = parse_transcript("10/02/2026, 3:38 pm - Alice: Hi");

        for (messages, time) in [(&bracketed, "3:38:00 PM"), (&dashed, "3:38 pm")] {
            assert_eq!(messages.len(), 1);
            let msg = &messages[0];
            assert_eq!(msg.date(), Some("10/02/2026"));
            assert_eq!(msg.time(), Some(time));
            assert_eq!(msg.sender(), Some("Alice"));
            assert_eq!(msg.text(), "Hi");
            assert!(!msg.is_notification());
        }
    }

    #[test]
    fn test_notification_detection() {
        let messages = parse_transcript("10/02/2026, 3:40 pm - Alice left");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_notification());
        assert_eq!(messages[0].sender(), None);
        assert_eq!(messages[0].text(), "Alice left");
    }

    #[test]
    fn test_first_colon_split() {
        let messages = parse_transcript("1/1/24, 9:00 - Bob: meet at 9:30: confirmed");
        assert_eq!(messages[0].sender(), Some("Bob"));
        assert_eq!(messages[0].text(), "meet at 9:30: confirmed");

        let config = TranscriptConfig::new().with_trim_body_start(false);
        let messages = parse_transcript_with("1/1/24, 9:00 - Bob: meet at 9:30: confirmed", &config);
        assert_eq!(messages[0].text(), " meet at 9:30: confirmed");
    }

    #[test]
    fn test_continuation_folding() {
        let raw = "1/1/24, 9:00 - Bob: first\n  second  \nthird";
        let messages = parse_transcript(raw);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), "first\nsecond\nthird");
    }

    #[test]
    fn test_blank_lines_are_transparent() {
        let dense = "1/1/24, 9:00 - Bob: a\nb\n1/1/24, 9:01 - Ann: c";
        let sparse = "\n\n1/1/24, 9:00 - Bob: a\n\n   \nb\n\n1/1/24, 9:01 - Ann: c\n\n";
        assert_eq!(parse_transcript(dense), parse_transcript(sparse));
    }

    #[test]
    fn test_leading_orphans_discarded() {
        let raw = "exported by app\nsecond orphan\n1/1/24, 9:00 - Bob: hi";
        let messages = parse_transcript(raw);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), "hi");
        assert_eq!(messages[0].id(), "1");
    }

    #[test]
    fn test_trailing_flush() {
        let messages = parse_transcript("1/1/24, 9:00 - Bob: last words");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), "last words");
    }

    #[test]
    fn test_ids_are_sequential() {
        let raw = "1/1/24, 9:00 - Bob: a\n1/1/24, 9:01 - Bob joined\ncont\n1/1/24, 9:02 - Ann: c";
        let ids: Vec<_> = parse_transcript(raw)
            .iter()
            .map(|m| m.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_order_and_kinds() {
        let raw = "\
[1/15/24, 10:30:45 AM] Alice: Hello
1/15/24, 10:31 - Messages and calls are end-to-end encrypted
15.01.2024, 10:32 - Bob: Hi";
        let messages = parse_transcript(raw);
        assert_eq!(senders(&messages), vec![Some("Alice"), None, Some("Bob")]);
    }

    #[test]
    fn test_empty_remainder_opens_empty_notification() {
        let raw = "1/1/24, 9:00 -\nbody line";
        let messages = parse_transcript(raw);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_notification());
        assert_eq!(messages[0].text(), "\nbody line");
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "1/1/24, 9:00 - Bob: a\r\nb\r\n1/1/24, 9:01 - Ann: c\r\n";
        let messages = parse_transcript(raw);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text(), "a\nb");
        assert_eq!(messages[1].text(), "c");
    }

    #[test]
    fn test_accumulator_states() {
        let mut acc = Accumulator::new(&TranscriptConfig::default());
        assert!(!acc.is_accumulating());
        assert!(acc.feed("orphan").is_none());
        assert_eq!(acc.discarded(), 1);

        assert!(acc.feed("1/1/24, 9:00 - Bob: a").is_none());
        assert!(acc.is_accumulating());
        assert_eq!(acc.opened(), 1);

        let closed = acc.feed("1/1/24, 9:01 - Bob: b").unwrap();
        assert_eq!(closed.id(), "1");

        let last = acc.finish().unwrap();
        assert_eq!(last.id(), "2");
        assert!(!acc.is_accumulating());
        assert!(acc.finish().is_none());
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1/1/24, 9:00 - Bob: a\nb").unwrap();

        let parser = TranscriptParser::new();
        let messages = parser.parse(file.path()).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), "a\nb");
    }

    #[test]
    fn test_parse_missing_file_is_io_error() {
        let parser = TranscriptParser::new();
        let err = parser
            .parse(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}

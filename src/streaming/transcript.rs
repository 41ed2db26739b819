//! Streaming parser for exported chat transcripts.
//!
//! Reads the file line by line and drives the same [`Accumulator`] as the
//! in-memory parser, so both produce identical records. Only the record
//! currently being built is held in memory.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::ChatMessage;
use crate::config::TranscriptConfig;
use crate::error::ChatviewError;
use crate::parsers::Accumulator;

use super::{MessageIterator, StreamingConfig, StreamingError, StreamingParser, StreamingResult};

/// UTF-8 encoded byte order mark, dropped from the first line.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Streaming parser for transcript text files.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptStreamingParser {
    config: StreamingConfig,
    trim_body_start: bool,
}

impl TranscriptStreamingParser {
    pub fn new() -> Self {
        Self::with_config(StreamingConfig::default())
    }

    pub fn with_config(config: StreamingConfig) -> Self {
        Self {
            config,
            trim_body_start: true,
        }
    }

    /// Sets whether whitespace after the sender colon is dropped.
    #[must_use]
    pub fn with_trim_body_start(mut self, trim: bool) -> Self {
        self.trim_body_start = trim;
        self
    }
}

impl Default for TranscriptStreamingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingParser for TranscriptStreamingParser {
    fn name(&self) -> &'static str {
        "Transcript (Streaming)"
    }

    fn stream(&self, path: &Path) -> Result<Box<dyn MessageIterator>, ChatviewError> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let iterator = TranscriptMessageIterator::new(reader, file_size, self.config)
            .with_trim_body_start(self.trim_body_start);

        debug!(path = %path.display(), file_size, "streaming transcript");
        Ok(Box::new(iterator))
    }

    fn recommended_buffer_size(&self) -> usize {
        self.config.buffer_size
    }
}

/// Iterator over transcript records read from any [`BufRead`].
pub struct TranscriptMessageIterator<R: BufRead> {
    reader: R,
    file_size: u64,
    bytes_read: u64,
    config: StreamingConfig,
    line_buffer: Vec<u8>,
    accumulator: Accumulator,
    finished: bool,
}

impl<R: BufRead> TranscriptMessageIterator<R> {
    fn new(reader: R, file_size: u64, config: StreamingConfig) -> Self {
        Self {
            reader,
            file_size,
            bytes_read: 0,
            config,
            line_buffer: Vec::with_capacity(4096),
            accumulator: Accumulator::new(&TranscriptConfig::default()),
            finished: false,
        }
    }

    /// Wraps an arbitrary reader. Progress is unknown for such sources.
    pub fn from_reader(reader: R, config: StreamingConfig) -> Self {
        Self::new(reader, 0, config)
    }

    /// Sets whether whitespace after the sender colon is dropped.
    ///
    /// Must be called before the first record is read.
    #[must_use]
    pub fn with_trim_body_start(mut self, trim: bool) -> Self {
        let config = TranscriptConfig::new().with_trim_body_start(trim);
        self.accumulator = Accumulator::new(&config);
        self
    }

    /// Reads the next raw line into `line_buffer`. `Ok(false)` means EOF.
    fn read_line(&mut self) -> io::Result<bool> {
        let first = self.bytes_read == 0;
        self.line_buffer.clear();
        let bytes = self.reader.read_until(b'\n', &mut self.line_buffer)?;
        self.bytes_read += bytes as u64;
        if first && self.line_buffer.starts_with(UTF8_BOM) {
            self.line_buffer.drain(..UTF8_BOM.len());
        }
        Ok(bytes > 0)
    }

    /// Checks the buffered line and feeds it to the accumulator.
    fn feed_buffered(&mut self) -> StreamingResult<Option<ChatMessage>> {
        if self.line_buffer.len() > self.config.max_message_size {
            return Err(StreamingError::BufferOverflow {
                max_size: self.config.max_message_size,
                actual_size: self.line_buffer.len(),
            });
        }

        let line = std::str::from_utf8(&self.line_buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(self.accumulator.feed(line))
    }
}

impl<R: BufRead + Send> MessageIterator for TranscriptMessageIterator<R> {
    fn progress(&self) -> Option<f64> {
        if self.file_size == 0 {
            return None;
        }
        Some((self.bytes_read as f64 / self.file_size as f64) * 100.0)
    }

    fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    fn total_bytes(&self) -> Option<u64> {
        (self.file_size > 0).then_some(self.file_size)
    }
}

impl<R: BufRead + Send> Iterator for TranscriptMessageIterator<R> {
    type Item = StreamingResult<ChatMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.read_line() {
                Ok(true) => match self.feed_buffered() {
                    Ok(Some(closed)) => return Some(Ok(closed)),
                    Ok(None) => {}
                    Err(e) if self.config.skip_invalid => {
                        warn!(error = %e, offset = self.bytes_read, "skipping unreadable line");
                    }
                    Err(e) => return Some(Err(e)),
                },
                Ok(false) => {
                    self.finished = true;
                    debug!(
                        records = self.accumulator.opened(),
                        discarded = self.accumulator.discarded(),
                        "transcript stream finished"
                    );
                    return self.accumulator.finish().map(Ok);
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_transcript;
    use std::io::Cursor;

    const SAMPLE: &str = "exported header line
[1/15/24, 10:30:00 AM] Alice: Hello everyone!
1/15/24, 10:31 - Bob: Hi Alice!

1/15/24, 10:32 - Alice: How is everyone doing?
This is a continuation line
1/15/24, 10:33 - Charlie joined
15.01.2024, 10:34 - Bob: meet at 9:30: confirmed";

    fn iterate(txt: &str, config: StreamingConfig) -> TranscriptMessageIterator<Cursor<Vec<u8>>> {
        TranscriptMessageIterator::new(Cursor::new(txt.as_bytes().to_vec()), txt.len() as u64, config)
    }

    #[test]
    fn test_matches_in_memory_parser() {
        let streamed: Vec<_> = iterate(SAMPLE, StreamingConfig::default())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(streamed, parse_transcript(SAMPLE));
        assert_eq!(streamed.len(), 5);
        assert_eq!(streamed[2].text(), "How is everyone doing?\nThis is a continuation line");
        assert!(streamed[3].is_notification());
    }

    #[test]
    fn test_trim_body_start_off() {
        let txt = "1/1/24, 9:00 - Bob: meet at 9:30";
        let messages: Vec<_> = iterate(txt, StreamingConfig::default())
            .with_trim_body_start(false)
            .filter_map(Result::ok)
            .collect();
        assert_eq!(messages[0].text(), " meet at 9:30");
    }

    #[test]
    fn test_progress_reporting() {
        let mut iterator = iterate(SAMPLE, StreamingConfig::default());
        assert_eq!(iterator.total_bytes(), Some(SAMPLE.len() as u64));

        let _: Vec<_> = iterator.by_ref().collect();

        assert_eq!(iterator.bytes_processed(), SAMPLE.len() as u64);
        let progress = iterator.progress().unwrap();
        assert!(progress > 99.0);
    }

    #[test]
    fn test_from_reader_has_unknown_progress() {
        let iterator = TranscriptMessageIterator::from_reader(
            Cursor::new(b"1/1/24, 9:00 - A: x".to_vec()),
            StreamingConfig::default(),
        );
        assert_eq!(iterator.progress(), None);
        assert_eq!(iterator.total_bytes(), None);
        assert_eq!(iterator.count(), 1);
    }

    #[test]
    fn test_leading_bom_keeps_first_record() {
        let txt = "\u{FEFF}[1/1/24, 9:00:00 AM] Alice: Hi\n1/1/24, 9:01 - Bob: Yo";
        let mut iterator = iterate(txt, StreamingConfig::default());

        let messages: Vec<_> = iterator.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), Some("Alice"));
        assert_eq!(messages[0].date(), Some("1/1/24"));
        assert_eq!(messages, parse_transcript(txt));
        assert_eq!(iterator.bytes_processed(), txt.len() as u64);
    }

    #[test]
    fn test_oversized_line_skipped() {
        let txt = format!("1/1/24, 9:00 - A: x\n{}\n1/1/24, 9:01 - B: y", "z".repeat(200));
        let config = StreamingConfig::new().with_max_message_size(100);
        let messages: Vec<_> = iterate(&txt, config).collect::<Result<_, _>>().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text(), "x");
    }

    #[test]
    fn test_oversized_line_reported() {
        let txt = format!("1/1/24, 9:00 - A: x\n{}\n", "z".repeat(200));
        let config = StreamingConfig::new()
            .with_max_message_size(100)
            .with_skip_invalid(false);
        let results: Vec<_> = iterate(&txt, config).collect();
        assert!(matches!(
            results[0],
            Err(StreamingError::BufferOverflow { max_size: 100, .. })
        ));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_invalid_utf8_line() {
        let mut bytes = b"1/1/24, 9:00 - A: x\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"more\n");

        let skipped: Vec<_> = TranscriptMessageIterator::from_reader(
            Cursor::new(bytes.clone()),
            StreamingConfig::default(),
        )
        .collect::<Result<_, _>>()
        .unwrap();
        assert_eq!(skipped[0].text(), "x\nmore");

        let strict: Vec<_> = TranscriptMessageIterator::from_reader(
            Cursor::new(bytes),
            StreamingConfig::new().with_skip_invalid(false),
        )
        .collect();
        assert!(matches!(strict[0], Err(StreamingError::Io(_))));
    }

    #[test]
    fn test_no_headers_yields_nothing() {
        assert_eq!(iterate("just\nsome\ntext", StreamingConfig::default()).count(), 0);
    }

    #[test]
    fn test_parser_name() {
        let parser = TranscriptStreamingParser::new();
        assert_eq!(parser.name(), "Transcript (Streaming)");
        assert_eq!(parser.recommended_buffer_size(), 64 * 1024);
    }

    #[test]
    fn test_stream_missing_file() {
        let parser = TranscriptStreamingParser::new();
        let result = parser.stream(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(e) if e.is_io()));
    }
}

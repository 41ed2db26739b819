//! Integration tests for the transcript parser with real files

use chatview::core::{PALETTE_SIZE, TranscriptStats};
use chatview::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

const MIXED_EXPORT: &str = "\
Chat export from Weekend group
[10/02/2026, 3:38:00 PM] Alice: Hi
how are you?

10/02/2026, 3:39 pm - Bob: meet at 9:30: confirmed
10/02/2026, 3:40 pm - Alice left
[10/02/2026, 3:41:05\u{202F}PM] Carol: Who's bringing snacks?
I can bring chips
  and dip
26.10.2025, 20:40 - Bob: Я принесу
";

fn write_fixture(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_mixed_export_file() {
    let (_dir, path) = write_fixture("chat.txt", MIXED_EXPORT);
    let parser = TranscriptParser::new();
    let messages = parser.parse(&path).unwrap();

    assert_eq!(messages.len(), 5);

    assert_eq!(messages[0].id(), "1");
    assert_eq!(messages[0].date(), Some("10/02/2026"));
    assert_eq!(messages[0].time(), Some("3:38:00 PM"));
    assert_eq!(messages[0].sender(), Some("Alice"));
    assert_eq!(messages[0].text(), "Hi\nhow are you?");

    assert_eq!(messages[1].sender(), Some("Bob"));
    assert_eq!(messages[1].text(), "meet at 9:30: confirmed");

    assert!(messages[2].is_notification());
    assert_eq!(messages[2].text(), "Alice left");

    assert_eq!(messages[3].time(), Some("3:41:05\u{202F}PM"));
    assert_eq!(messages[3].text(), "Who's bringing snacks?\nI can bring chips\nand dip");

    assert_eq!(messages[4].date(), Some("26.10.2025"));
    assert_eq!(messages[4].time(), Some("20:40"));
    assert_eq!(messages[4].text(), "Я принесу");
}

#[test]
fn test_parse_str_matches_parse_file() {
    let (_dir, path) = write_fixture("chat.txt", MIXED_EXPORT);
    let parser = TranscriptParser::new();
    assert_eq!(parser.parse(&path).unwrap(), parser.parse_str(MIXED_EXPORT).unwrap());
    assert_eq!(parser.parse_file(path.to_str().unwrap()).unwrap(), parse_transcript(MIXED_EXPORT));
}

#[test]
fn test_ids_are_one_to_n() {
    let messages = parse_transcript(MIXED_EXPORT);
    let ids: Vec<&str> = messages.iter().map(ChatMessage::id).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_sender_iff_not_notification() {
    for msg in parse_transcript(MIXED_EXPORT) {
        assert_eq!(msg.sender().is_some(), !msg.is_notification());
    }
}

#[test]
fn test_parse_missing_file() {
    let err = TranscriptParser::new()
        .parse("/no/such/file.txt".as_ref())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_crlf_file() {
    let (_dir, path) = write_fixture("crlf.txt", "1/1/24, 9:00 - Ann: a\r\nb\r\n1/1/24, 9:01 - Ann joined\r\n");
    let messages = TranscriptParser::new().parse(&path).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text(), "a\nb");
    assert_eq!(messages[1].text(), "Ann joined");
}

// ============================================================================
// Processing pipeline
// ============================================================================

#[test]
fn test_filter_then_write_json() {
    let messages = parse_transcript(MIXED_EXPORT);
    let only_bob = apply_filters(messages, &FilterConfig::new().with_sender("bob"));
    assert_eq!(only_bob.len(), 2);
    assert_eq!(only_bob[0].id(), "2");
    assert_eq!(only_bob[1].id(), "5");

    let json = to_json(&only_bob).unwrap();
    let back: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, only_bob);
}

#[test]
fn test_perspective_and_grouping() {
    let raw = "\
1/1/24, 9:00 - Ann: a
1/1/24, 9:01 - Ann: b
1/1/24, 9:02 - Bob joined
1/1/24, 9:03 - Bob: c
1/1/24, 9:04 - Cid: d";
    let messages = parse_transcript(raw);

    assert_eq!(participants(&messages), vec!["Ann", "Bob", "Cid"]);

    let view = Perspective::new(&messages, Some("Bob"));
    assert_eq!(view.viewer(), Some("Bob"));
    assert_eq!(view.color_slot("Ann"), Some(0));
    assert_eq!(view.color_slot("Cid"), Some(1));
    assert!(view.color_slot("Cid").unwrap() < PALETTE_SIZE);
    assert!(view.is_own(&messages[3]));

    let groups = group_consecutive(&messages);
    let sizes: Vec<usize> = groups.iter().map(|g| g.messages.len()).collect();
    assert_eq!(sizes, vec![2, 1, 1, 1]);
    assert!(groups[1].is_notification());

    let stats = TranscriptStats::from_messages(&messages);
    assert_eq!((stats.messages, stats.notifications, stats.participants), (4, 1, 3));
}

#[test]
fn test_store_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json"));

    let first = store.create(NewChat::new("Weekend", MIXED_EXPORT)).unwrap();
    let second = store.create(NewChat::new("Empty", "")).unwrap();

    assert_eq!(first.parsed_data, parse_transcript(MIXED_EXPORT));
    assert!(second.parsed_data.is_empty());

    let listed: Vec<u64> = store.list().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(listed, vec![2, 1]);
    assert_eq!(store.get(1).unwrap(), first);
}

#[test]
fn test_custom_config_keeps_body_whitespace() {
    let parser = TranscriptParser::with_config(TranscriptConfig::new().with_trim_body_start(false));
    let messages = parser.parse_str("1/1/24, 9:00 - Bob:   spaced").unwrap();
    assert_eq!(messages[0].text(), "   spaced");
}

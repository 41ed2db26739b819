//! Participants of a transcript and the viewer's perspective.
//!
//! A chat viewer renders one participant's messages as "own" (right aligned)
//! and gives every other participant a stable color slot. Slots are assigned
//! in first-appearance order, skipping the viewer, and wrap after
//! [`PALETTE_SIZE`].

use crate::ChatMessage;

/// Number of distinct color slots handed out to other participants.
pub const PALETTE_SIZE: usize = 6;

/// Returns distinct senders of authored records in first-appearance order.
///
/// Notifications are ignored.
///
/// ```
/// use chatview::core::participants;
/// use chatview::parse_transcript;
///
/// let messages = parse_transcript(
///     "1/1/24, 9:00 - Bob: a\n1/1/24, 9:01 - Ann joined\n1/1/24, 9:02 - Ann: b\n1/1/24, 9:03 - Bob: c",
/// );
/// assert_eq!(participants(&messages), vec!["Bob", "Ann"]);
/// ```
pub fn participants(messages: &[ChatMessage]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for sender in messages.iter().filter_map(ChatMessage::sender) {
        if !seen.iter().any(|s| s == sender) {
            seen.push(sender.to_string());
        }
    }
    seen
}

/// One participant's view of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perspective {
    participants: Vec<String>,
    viewer: Option<String>,
}

impl Perspective {
    /// Resolves the viewer.
    ///
    /// Falls back to the first participant when `view_as` is `None` or names
    /// nobody in the transcript. A transcript without authored records has
    /// no viewer.
    pub fn new(messages: &[ChatMessage], view_as: Option<&str>) -> Self {
        let participants = participants(messages);
        let viewer = view_as
            .and_then(|name| participants.iter().find(|p| *p == name))
            .or_else(|| participants.first())
            .cloned();

        Self {
            participants,
            viewer,
        }
    }

    /// The participant whose messages are "own".
    pub fn viewer(&self) -> Option<&str> {
        self.viewer.as_deref()
    }

    /// All participants, first-appearance order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Returns `true` for authored records sent by the viewer.
    pub fn is_own(&self, msg: &ChatMessage) -> bool {
        match (msg.sender(), self.viewer()) {
            (Some(sender), Some(viewer)) => sender == viewer,
            _ => false,
        }
    }

    /// Color slot for `sender`, in `0..PALETTE_SIZE`.
    ///
    /// `None` for the viewer and for unknown senders.
    pub fn color_slot(&self, sender: &str) -> Option<usize> {
        if self.viewer() == Some(sender) {
            return None;
        }

        self.participants
            .iter()
            .filter(|p| Some(p.as_str()) != self.viewer())
            .position(|p| p == sender)
            .map(|idx| idx % PALETTE_SIZE)
    }
}

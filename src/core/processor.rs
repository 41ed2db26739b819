//! Grouping of consecutive records and transcript statistics.

use crate::ChatMessage;

use super::participants::participants;

/// A run of consecutive records rendered together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageGroup<'a> {
    /// Sender shared by every record of the run; `None` for a notification.
    pub sender: Option<&'a str>,
    /// Records of the run, in transcript order.
    pub messages: Vec<&'a ChatMessage>,
}

impl MessageGroup<'_> {
    /// Returns `true` if this group holds a single notification.
    pub fn is_notification(&self) -> bool {
        self.sender.is_none()
    }
}

/// Groups consecutive authored records by the same sender.
///
/// A notification always forms its own group and breaks any run.
///
/// # Example
/// Input:  `[Alice: Hi, Alice: How are you?, <Bob joined>, Alice: Hey]`
/// Output: `[[Alice x2], [<Bob joined>], [Alice x1]]`
pub fn group_consecutive(messages: &[ChatMessage]) -> Vec<MessageGroup<'_>> {
    let mut groups: Vec<MessageGroup<'_>> = Vec::new();

    for msg in messages {
        let sender = msg.sender();
        if let Some(last) = groups.last_mut() {
            if sender.is_some() && last.sender == sender {
                last.messages.push(msg);
                continue;
            }
        }

        groups.push(MessageGroup {
            sender,
            messages: vec![msg],
        });
    }

    groups
}

/// Statistics about a parsed transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranscriptStats {
    /// Authored records
    pub messages: usize,
    /// Notification records
    pub notifications: usize,
    /// Distinct senders
    pub participants: usize,
}

impl TranscriptStats {
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        let notifications = messages.iter().filter(|m| m.is_notification()).count();
        Self {
            messages: messages.len() - notifications,
            notifications,
            participants: participants(messages).len(),
        }
    }

    /// Total number of records.
    pub fn total(&self) -> usize {
        self.messages + self.notifications
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Only warning and error notifications are recorded: those are the ones a
//! support report needs to explain what the user ran into.

use crate::notifications::NotificationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest message kept in a record, in characters.
const MAX_MESSAGE_CHARS: usize = 200;

/// A warning notification that was shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub notification: u64,
    pub message: String,
}

impl WarningEvent {
    pub fn new(id: NotificationId, message: impl Into<String>) -> Self {
        Self {
            notification: id.value(),
            message: truncate(message.into()),
        }
    }
}

/// An error notification that was shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub notification: u64,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(id: NotificationId, message: impl Into<String>) -> Self {
        Self {
            notification: id.value(),
            message: truncate(message.into()),
        }
    }
}

/// What was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A recorded event with its wall-clock timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            recorded_at: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Error { .. })
    }
}

fn truncate(message: String) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message;
    }
    let mut short: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_messages_are_truncated() {
        let event = WarningEvent::new(NotificationId::new(), "x".repeat(500));
        assert_eq!(event.message.chars().count(), MAX_MESSAGE_CHARS + 1);
        assert!(event.message.ends_with('…'));
    }

    #[test]
    fn short_messages_are_kept() {
        let event = ErrorEvent::new(NotificationId::new(), "Card declined");
        assert_eq!(event.message, "Card declined");
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: ErrorEvent::new(NotificationId::new(), "Network unreachable"),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("Network unreachable"));
        assert!(event.is_error());
    }
}

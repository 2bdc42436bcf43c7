// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector.
//!
//! The dispatcher records through a [`DiagnosticsHandle`]; the owner of the
//! [`DiagnosticsCollector`] drains the channel into a bounded buffer, usually
//! once per UI tick.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent,
    WarningEvent,
};

/// Events that can wait in the channel before new ones are dropped.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Handle for recording diagnostic events.
///
/// Cheap to clone and safe to share across threads. Recording never blocks:
/// when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, event: WarningEvent) {
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    pub fn log_error(&self, event: ErrorEvent) {
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::Error { event }));
    }
}

/// Stores recorded events in a memory-bounded circular buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of recorded error notifications.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.buffer.iter().filter(|e| e.is_error()).count()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the recorded events as a pretty JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationId;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(NotificationId::new(), "KYC pending"));
        handle.log_error(ErrorEvent::new(NotificationId::new(), "Card declined"));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.error_count(), 1);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(4096));
        let handle = collector.handle();

        for i in 0..(DEFAULT_CHANNEL_CAPACITY + 10) {
            handle.log_warning(WarningEvent::new(NotificationId::new(), format!("w{i}")));
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_keeps_only_latest_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();

        for round in 0..3 {
            for i in 0..10 {
                handle.log_error(ErrorEvent::new(
                    NotificationId::new(),
                    format!("{round}-{i}"),
                ));
            }
            collector.process_pending();
        }
        assert_eq!(collector.len(), 16);
        let last = collector.iter().last().expect("buffer not empty");
        assert!(matches!(
            &last.kind,
            DiagnosticEventKind::Error { event } if event.message == "2-9"
        ));
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_warning(WarningEvent::new(NotificationId::new(), "Rate changed"));
        collector.process_pending();

        let json = collector.export_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("Rate changed"));
    }
}

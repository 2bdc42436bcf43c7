// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle state machine.
//!
//! The `Store` owns the tracked notifications in insertion order and applies
//! phase transitions. It never reads a clock or spawns timers: the dispatcher
//! passes the current instant in and decides when transitions happen. Every
//! transition is guarded, so a late or duplicate request is a no-op.

use super::notification::{Notification, NotificationId, Phase};
use std::time::Duration;
use tokio::time::Instant;

/// Tracked notifications, oldest first.
#[derive(Debug, Default, Clone)]
pub struct Store {
    entries: Vec<Notification>,
}

impl Store {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a notification.
    ///
    /// The notification is appended after every tracked one. An id that is
    /// already tracked is ignored.
    pub fn insert(&mut self, notification: Notification) -> bool {
        if self.contains(notification.id()) {
            return false;
        }
        self.entries.push(notification);
        true
    }

    /// `Entering -> Visible`.
    ///
    /// Returns the display duration to wait before exiting, or `None` if the
    /// notification is unknown or no longer entering.
    pub fn enter_completed(&mut self, id: NotificationId, now: Instant) -> Option<Duration> {
        let notification = self.advance(id, Phase::Visible)?;
        notification.set_phase(Phase::Visible, now);
        Some(notification.duration())
    }

    /// `Entering | Visible -> Exiting`.
    ///
    /// Returns `true` if the transition happened. Exiting or unknown
    /// notifications are left alone.
    pub fn begin_exit(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.advance(id, Phase::Exiting) {
            Some(notification) => {
                notification.set_phase(Phase::Exiting, now);
                true
            }
            None => false,
        }
    }

    /// `Exiting -> Dismissed`: stops tracking the notification.
    pub fn retire(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self
            .entries
            .iter()
            .position(|n| n.id() == id && n.phase().can_advance_to(Phase::Dismissed))?;
        Some(self.entries.remove(pos))
    }

    /// Stops tracking everything, returning the removed ids in insertion order.
    pub fn clear(&mut self) -> Vec<NotificationId> {
        self.entries.drain(..).map(|n| n.id()).collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// Returns the notification if `next` is a legal move from its phase.
    fn advance(&mut self, id: NotificationId, next: Phase) -> Option<&mut Notification> {
        self.entries
            .iter_mut()
            .find(|n| n.id() == id)
            .filter(|n| n.phase().can_advance_to(next))
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the current phase of a tracked notification.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.get(id).map(Notification::phase)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the tracked notifications for publishing.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.clone()
    }
}

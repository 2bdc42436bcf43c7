// SPDX-License-Identifier: MPL-2.0
//! Notification dispatcher.
//!
//! A single actor task owns the [`Store`] and every pending timer. Callers
//! talk to it through a cloneable [`Handle`] whose methods only enqueue a
//! command and return, so they never block the UI thread. The actor
//! publishes a fresh [`Snapshot`] after each mutation and a lifecycle
//! [`Event`] for each transition.
//!
//! Each tracked notification has at most one pending timer (enter animation,
//! display hold, or exit animation). Timers carry a token; a timer firing
//! with a token that is no longer current is ignored, which settles races
//! between a manual dismiss and natural expiry.

use super::notification::{
    Notification, NotificationId, Overrides, Phase, Position, PresentationMode, Request, Severity,
};
use super::store::Store;
use super::timing::Timings;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, WarningEvent};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

/// Lifecycle events buffered per subscriber before the slowest one lags.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Immutable view of the tracked notifications, oldest first.
#[derive(Debug, Clone)]
pub struct Snapshot {
    notifications: Arc<[Notification]>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            notifications: Arc::from(Vec::new()),
        }
    }
}

impl Snapshot {
    fn from_store(store: &Store) -> Self {
        Self {
            notifications: Arc::from(store.snapshot()),
        }
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Iterates the notifications anchored at `position`, in insertion order.
    pub fn at(&self, position: Position) -> impl Iterator<Item = &Notification> {
        self.iter().filter(move |n| n.position() == position)
    }

    /// Returns the banners to stack at `position`, at most `max_visible` of them.
    ///
    /// Older banners come first; newer ones wait until an older one retires.
    pub fn stack(
        &self,
        position: Position,
        max_visible: usize,
    ) -> impl Iterator<Item = &Notification> {
        self.at(position)
            .filter(|n| n.mode() == PresentationMode::Banner)
            .take(max_visible)
    }

    /// Returns the oldest modal notification, which is the one shown.
    #[must_use]
    pub fn front_modal(&self) -> Option<&Notification> {
        self.iter().find(|n| n.mode() == PresentationMode::Modal)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.iter().map(Notification::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns true while any notification is animating in or out.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.iter()
            .any(|n| matches!(n.phase(), Phase::Entering | Phase::Exiting))
    }
}

/// Something that happened to a tracked notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A notification entered a new phase. `Dismissed` means it is gone.
    Phase { id: NotificationId, phase: Phase },
    /// `dismiss_all` removed these notifications without exit animations.
    Cleared { ids: Vec<NotificationId> },
    /// A custom button was activated.
    Activated { id: NotificationId, index: usize },
}

#[derive(Debug)]
enum Command {
    Insert(Box<Notification>),
    Dismiss(NotificationId),
    DismissAll,
    Activate { id: NotificationId, index: usize },
    Shutdown,
}

/// Cheap, cloneable access to a running dispatcher.
#[derive(Debug, Clone)]
pub struct Handle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    events: broadcast::Sender<Event>,
    timings: Timings,
}

impl Handle {
    /// Dispatches a notification and returns its id immediately.
    ///
    /// Never fails: if the dispatcher has stopped the request is dropped with
    /// a warning, and the id simply never shows up.
    pub fn dispatch(&self, request: Request) -> NotificationId {
        let id = NotificationId::new();
        let notification = Notification::from_request(id, request, &self.timings, Instant::now());
        self.send(Command::Insert(Box::new(notification)));
        id
    }

    /// Starts the exit of a notification. Unknown or retired ids are ignored.
    pub fn dismiss(&self, id: NotificationId) {
        self.send(Command::Dismiss(id));
    }

    /// Removes every notification at once, without exit animations.
    pub fn dismiss_all(&self) {
        self.send(Command::DismissAll);
    }

    /// Runs the callback of a notification's button, then dismisses it.
    pub fn activate(&self, id: NotificationId, index: usize) {
        self.send(Command::Activate { id, index });
    }

    pub fn notify_success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.notify(Severity::Success, title, message, overrides)
    }

    pub fn notify_error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.notify(Severity::Error, title, message, overrides)
    }

    pub fn notify_warning(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.notify(Severity::Warning, title, message, overrides)
    }

    pub fn notify_info(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.notify(Severity::Info, title, message, overrides)
    }

    fn notify(
        &self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.dispatch(
            Request::new(severity)
                .title(title)
                .message(message)
                .with_overrides(overrides),
        )
    }

    /// Returns the latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribes to snapshot updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Subscribes to lifecycle events sent from now on.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Timings applied to new notifications.
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    fn send(&self, command: Command) {
        if let Err(err) = self.commands.send(command) {
            warn!(command = ?err.0, "notification dispatcher has stopped, dropping command");
        }
    }
}

/// Owner of the dispatcher task.
///
/// Create it once at startup and call [`Dispatcher::shutdown`] on exit. The
/// task also stops on its own once every [`Handle`] has been dropped.
#[derive(Debug)]
pub struct Dispatcher {
    handle: Handle,
    task: JoinHandle<()>,
}

impl Dispatcher {
    /// Starts a dispatcher on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn spawn(timings: Timings) -> Self {
        Self::spawn_on(&tokio::runtime::Handle::current(), timings, None)
    }

    /// Starts a dispatcher on the given runtime, optionally recording warnings
    /// and errors to diagnostics.
    #[must_use]
    pub fn spawn_on(
        runtime: &tokio::runtime::Handle,
        timings: Timings,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::default());
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let actor = Actor {
            store: Store::new(),
            commands: command_rx,
            fired_tx,
            fired_rx,
            timers: HashMap::new(),
            next_token: 0,
            snapshots: snapshot_tx,
            events: event_tx.clone(),
            diagnostics,
        };
        let task = runtime.spawn(actor.run());

        Self {
            handle: Handle {
                commands: command_tx,
                snapshots: snapshot_rx,
                events: event_tx,
                timings,
            },
            task,
        }
    }

    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }

    /// Returns false once the actor task has ended.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the dispatcher and cancels every pending timer.
    pub async fn shutdown(self) {
        self.handle.send(Command::Shutdown);
        if let Err(err) = self.task.await {
            warn!(%err, "notification dispatcher task ended abnormally");
        }
    }
}

/// Which timer is pending for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Enter,
    Hold,
    Exit,
}

#[derive(Debug)]
struct Fired {
    id: NotificationId,
    token: u64,
}

#[derive(Debug)]
struct PendingTimer {
    token: u64,
    stage: Stage,
    task: JoinHandle<()>,
}

struct Actor {
    store: Store,
    commands: mpsc::UnboundedReceiver<Command>,
    fired_tx: mpsc::UnboundedSender<Fired>,
    fired_rx: mpsc::UnboundedReceiver<Fired>,
    timers: HashMap<NotificationId, PendingTimer>,
    next_token: u64,
    snapshots: watch::Sender<Snapshot>,
    events: broadcast::Sender<Event>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Actor {
    async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                Some(fired) = self.fired_rx.recv() => self.handle_fired(fired),
            }
        }
        self.cancel_all_timers();
        debug!(remaining = self.store.len(), "notification dispatcher stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Insert(notification) => self.insert(*notification),
            Command::Dismiss(id) => {
                if !self.begin_exit(id) {
                    trace!(%id, "dismiss ignored");
                }
            }
            Command::DismissAll => self.clear(),
            Command::Activate { id, index } => self.activate(id, index),
            Command::Shutdown => {}
        }
        self.publish();
    }

    fn handle_fired(&mut self, fired: Fired) {
        let stage = match self.timers.get(&fired.id) {
            Some(pending) if pending.token == fired.token => pending.stage,
            _ => {
                trace!(id = %fired.id, "stale timer ignored");
                return;
            }
        };
        self.timers.remove(&fired.id);

        let id = fired.id;
        match stage {
            Stage::Enter => {
                if let Some(hold) = self.store.enter_completed(id, Instant::now()) {
                    self.emit_phase(id, Phase::Visible);
                    self.schedule(id, Stage::Hold, hold);
                }
            }
            Stage::Hold => {
                self.begin_exit(id);
            }
            Stage::Exit => {
                if self.store.retire(id).is_some() {
                    self.emit_phase(id, Phase::Dismissed);
                }
            }
        }
        self.publish();
    }

    fn insert(&mut self, mut notification: Notification) {
        let id = notification.id();
        notification.set_phase(Phase::Entering, Instant::now());
        let enter = notification.enter_animation().as_duration();
        self.record_diagnostics(&notification);

        if !self.store.insert(notification) {
            warn!(%id, "notification id already tracked, ignoring");
            return;
        }
        self.emit_phase(id, Phase::Entering);
        self.schedule(id, Stage::Enter, enter);
    }

    /// Moves a notification to `Exiting`, replacing whatever timer it had.
    fn begin_exit(&mut self, id: NotificationId) -> bool {
        if !self.store.begin_exit(id, Instant::now()) {
            return false;
        }
        self.cancel_timer(id);
        self.emit_phase(id, Phase::Exiting);
        let exit = self
            .store
            .get(id)
            .map_or(Duration::ZERO, |n| n.exit_animation().as_duration());
        self.schedule(id, Stage::Exit, exit);
        true
    }

    fn activate(&mut self, id: NotificationId, index: usize) {
        let button = self
            .store
            .get(id)
            .filter(|n| n.phase().is_dismissable())
            .and_then(|n| n.buttons().get(index).cloned());
        let Some(button) = button else {
            trace!(%id, index, "activation ignored");
            return;
        };

        debug!(%id, label = button.label(), "button activated");
        if panic::catch_unwind(AssertUnwindSafe(|| button.activate())).is_err() {
            warn!(%id, label = button.label(), "button callback panicked");
        }
        let _ = self.events.send(Event::Activated { id, index });
        self.begin_exit(id);
    }

    fn clear(&mut self) {
        self.cancel_all_timers();
        let ids = self.store.clear();
        if !ids.is_empty() {
            debug!(count = ids.len(), "all notifications cleared");
            let _ = self.events.send(Event::Cleared { ids });
        }
    }

    fn schedule(&mut self, id: NotificationId, stage: Stage, delay: Duration) {
        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);

        let fired_tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = fired_tx.send(Fired { id, token });
        });

        if let Some(previous) = self.timers.insert(id, PendingTimer { token, stage, task }) {
            previous.task.abort();
        }
    }

    fn cancel_timer(&mut self, id: NotificationId) {
        if let Some(pending) = self.timers.remove(&id) {
            pending.task.abort();
        }
    }

    fn cancel_all_timers(&mut self) {
        for (_, pending) in self.timers.drain() {
            pending.task.abort();
        }
    }

    fn emit_phase(&self, id: NotificationId, phase: Phase) {
        debug!(%id, ?phase, "notification phase changed");
        // No subscribers is fine.
        let _ = self.events.send(Event::Phase { id, phase });
    }

    fn publish(&self) {
        self.snapshots.send_replace(Snapshot::from_store(&self.store));
    }

    fn record_diagnostics(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let text = notification
            .title()
            .or(notification.message())
            .unwrap_or_default();
        match notification.severity() {
            Severity::Warning => handle.log_warning(WarningEvent::new(notification.id(), text)),
            Severity::Error => handle.log_error(ErrorEvent::new(notification.id(), text)),
            Severity::Success | Severity::Info => {}
        }
    }
}

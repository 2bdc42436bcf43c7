// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Request` used to create
//! one, and the small enums (severity, position, phase) that drive rendering.

use super::timing::Timings;
use crate::domain::notifications::AnimationDuration;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a notification.
///
/// Identifiers come from a process-wide counter and are never reused, even
/// after the notification they named has been retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity level determines default display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Something failed and the user needs to read why (red, longest duration).
    Error,
    /// Something the user should know before continuing (orange).
    Warning,
    /// Neutral information (blue). Unknown severities fall back to this.
    #[default]
    Info,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name, case-insensitively.
    ///
    /// Anything unrecognised is treated as [`Severity::Info`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Returns the lowercase name used in config files and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the i18n key of the default title for this severity.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Severity::Success => "toast-title-success",
            Severity::Error => "toast-title-error",
            Severity::Warning => "toast-title-warning",
            Severity::Info => "toast-title-info",
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::parse(value)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::parse(&raw))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen anchor for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// Where a notification is in its lifecycle.
///
/// `Dismissed` is never stored: a dismissed notification is simply no longer
/// tracked. It is still reported in lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Dismissed,
}

impl Phase {
    /// Returns whether `next` directly follows `self`.
    ///
    /// `Entering -> Exiting` is allowed so an early dismiss does not have to
    /// wait for the enter animation.
    #[must_use]
    pub fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Entering, Phase::Visible)
                | (Phase::Entering, Phase::Exiting)
                | (Phase::Visible, Phase::Exiting)
                | (Phase::Exiting, Phase::Dismissed)
        )
    }

    /// Returns true while a dismiss request would still have an effect.
    #[must_use]
    pub fn is_dismissable(self) -> bool {
        self.can_advance_to(Phase::Exiting)
    }
}

/// Visual treatment of a custom button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

/// Callback run when a button is activated.
pub type ButtonCallback = Arc<dyn Fn() + Send + Sync>;

/// A custom action shown on a notification.
#[derive(Clone)]
pub struct Button {
    label: String,
    style: ButtonStyle,
    on_activate: Option<ButtonCallback>,
}

impl Button {
    /// Creates a button with the default style and no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::Default,
            on_activate: None,
        }
    }

    /// Creates a cancel-style button.
    pub fn cancel(label: impl Into<String>) -> Self {
        Self::new(label).style(ButtonStyle::Cancel)
    }

    /// Creates a destructive-style button.
    pub fn destructive(label: impl Into<String>) -> Self {
        Self::new(label).style(ButtonStyle::Destructive)
    }

    /// Sets the button style.
    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the callback run when the button is activated.
    ///
    /// The callback runs on the dispatcher task and must not block. A panic
    /// inside it is caught and logged; the notification is still dismissed.
    #[must_use]
    pub fn on_activate(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn button_style(&self) -> ButtonStyle {
        self.style
    }

    /// Runs the callback, if any.
    pub fn activate(&self) {
        if let Some(callback) = &self.on_activate {
            callback();
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("has_callback", &self.on_activate.is_some())
            .finish()
    }
}

/// How a notification is presented.
///
/// Notifications with buttons are shown as modal alerts, the rest as
/// auto-dismissing banners. Both share the same lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    Banner,
    Modal,
}

/// Caller-supplied overrides merged over the severity defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub duration: Option<Duration>,
    pub position: Option<Position>,
    pub buttons: Vec<Button>,
}

impl Overrides {
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

/// Everything needed to dispatch a notification.
///
/// # Example
///
/// ```
/// use iced_toasts::notifications::{Position, Request, Severity};
/// use std::time::Duration;
///
/// let request = Request::new(Severity::Error)
///     .title("Transfer failed")
///     .message("Your card was declined.")
///     .duration(Duration::from_secs(10))
///     .position(Position::Bottom);
/// assert_eq!(request.severity(), Severity::Error);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Request {
    severity: Severity,
    title: Option<String>,
    message: Option<String>,
    duration_ms: Option<i64>,
    position: Option<Position>,
    buttons: Vec<Button>,
}

impl Request {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title. Empty strings leave the notification untitled.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    /// Sets the body text. Empty strings leave the body empty.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = non_empty(message.into());
        self
    }

    /// Overrides the display duration. Zero falls back to the severity default.
    #[must_use]
    pub fn duration(self, duration: Duration) -> Self {
        self.duration_ms(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }

    /// Overrides the display duration in raw milliseconds.
    ///
    /// Zero or negative values fall back to the severity default.
    #[must_use]
    pub fn duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Appends a custom button.
    #[must_use]
    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    /// Merges overrides, keeping any value the request already set.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if self.duration_ms.is_none() {
            if let Some(duration) = overrides.duration {
                self = self.duration(duration);
            }
        }
        if self.position.is_none() {
            self.position = overrides.position;
        }
        self.buttons.extend(overrides.buttons);
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A notification tracked by the dispatcher.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    message: Option<String>,
    duration: Duration,
    position: Position,
    buttons: Vec<Button>,
    phase: Phase,
    phase_started_at: Instant,
    enter_animation: AnimationDuration,
    exit_animation: AnimationDuration,
}

impl Notification {
    /// Builds a notification in the `Entering` phase, resolving defaults from `timings`.
    #[must_use]
    pub fn from_request(
        id: NotificationId,
        request: Request,
        timings: &Timings,
        now: Instant,
    ) -> Self {
        let duration = timings.duration_for(request.severity, request.duration_ms);
        Self {
            id,
            severity: request.severity,
            title: request.title,
            message: request.message,
            duration: duration.as_duration(),
            position: request.position.unwrap_or(timings.position),
            buttons: request.buttons,
            phase: Phase::Entering,
            phase_started_at: now,
            enter_animation: timings.enter_animation,
            exit_animation: timings.exit_animation,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Time spent `visible` before auto-dismiss.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        if self.buttons.is_empty() {
            PresentationMode::Banner
        } else {
            PresentationMode::Modal
        }
    }

    #[must_use]
    pub fn enter_animation(&self) -> AnimationDuration {
        self.enter_animation
    }

    #[must_use]
    pub fn exit_animation(&self) -> AnimationDuration {
        self.exit_animation
    }

    /// Returns the opacity factor (0.0 to 1.0) for the current phase.
    #[must_use]
    pub fn animation_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.phase_started_at);
        match self.phase {
            Phase::Entering => ratio(elapsed, self.enter_animation),
            Phase::Visible => 1.0,
            Phase::Exiting => 1.0 - ratio(elapsed, self.exit_animation),
            Phase::Dismissed => 0.0,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_started_at = now;
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(elapsed: Duration, total: AnimationDuration) -> f32 {
    if total.is_instant() {
        return 1.0;
    }
    let progress = elapsed.as_millis() as f32 / total.as_millis() as f32;
    progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn build(request: Request) -> Notification {
        Notification::from_request(
            NotificationId::new(),
            request,
            &Timings::default(),
            Instant::now(),
        )
    }

    #[test]
    fn notification_ids_are_unique() {
        let a = NotificationId::new();
        let b = NotificationId::new();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::parse("SUCCESS"), Severity::Success);
        assert_eq!(Severity::parse(" warning "), Severity::Warning);
        assert_eq!(Severity::parse("critical"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
        assert_eq!(Severity::from("error"), Severity::Error);
    }

    #[test]
    fn phase_edges_follow_lifecycle() {
        assert!(Phase::Entering.can_advance_to(Phase::Visible));
        assert!(Phase::Entering.can_advance_to(Phase::Exiting));
        assert!(Phase::Visible.can_advance_to(Phase::Exiting));
        assert!(Phase::Exiting.can_advance_to(Phase::Dismissed));

        assert!(!Phase::Entering.can_advance_to(Phase::Dismissed));
        assert!(!Phase::Visible.can_advance_to(Phase::Entering));
        assert!(!Phase::Exiting.can_advance_to(Phase::Visible));
        assert!(!Phase::Dismissed.can_advance_to(Phase::Entering));
    }

    #[test]
    fn empty_title_and_message_are_dropped() {
        let notification = build(Request::new(Severity::Info).title("  ").message(""));
        assert!(notification.title().is_none());
        assert!(notification.message().is_none());
    }

    #[test]
    fn buttons_switch_to_modal_mode() {
        let banner = build(Request::new(Severity::Warning));
        assert_eq!(banner.mode(), PresentationMode::Banner);

        let modal = build(Request::new(Severity::Warning).button(Button::cancel("Cancel")));
        assert_eq!(modal.mode(), PresentationMode::Modal);
        assert_eq!(modal.buttons()[0].button_style(), ButtonStyle::Cancel);
    }

    #[test]
    fn button_callback_runs_on_activate() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let button = Button::destructive("Delete").on_activate(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.activate();
        button.activate();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(format!("{button:?}").contains("has_callback: true"));
    }

    #[test]
    fn overrides_do_not_replace_explicit_request_values() {
        let request = Request::new(Severity::Success)
            .position(Position::Bottom)
            .with_overrides(
                Overrides::default()
                    .position(Position::Top)
                    .duration(Duration::from_secs(7)),
            );
        let notification = build(request);
        assert_eq!(notification.position(), Position::Bottom);
        assert_eq!(notification.duration(), Duration::from_secs(7));
    }

    #[test]
    fn animation_progress_tracks_phase() {
        let start = Instant::now();
        let mut notification = Notification::from_request(
            NotificationId::new(),
            Request::new(Severity::Info),
            &Timings::default(),
            start,
        );

        assert_eq!(notification.animation_progress(start), 0.0);
        let halfway = start + Duration::from_millis(150);
        assert!((notification.animation_progress(halfway) - 0.5).abs() < 0.01);

        notification.set_phase(Phase::Visible, halfway);
        assert_eq!(notification.animation_progress(halfway), 1.0);

        notification.set_phase(Phase::Exiting, halfway);
        let done = halfway + Duration::from_millis(300);
        assert_eq!(notification.animation_progress(done), 0.0);
    }

    #[test]
    fn severity_deserializes_leniently() {
        #[derive(Deserialize)]
        struct Wrapper {
            severity: Severity,
        }
        let parsed: Wrapper = toml::from_str("severity = \"fatal\"").unwrap();
        assert_eq!(parsed.severity, Severity::Info);
    }
}

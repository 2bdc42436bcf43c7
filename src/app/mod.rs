// SPDX-License-Identifier: MPL-2.0
//! Demo application: a mock money-transfer screen that exercises every
//! notification severity, a confirmation modal and dismiss-all.
//!
//! The `App` owns the notification [`Dispatcher`] and redraws from the latest
//! [`Snapshot`], pulled on a tick while anything is on screen.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::notifications::{
    Button, Dispatcher, Handle, Overrides, Position, Request, Severity, Snapshot, Timings,
};
use crate::ui::toast;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tokio::sync::watch;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Amount shown on the mock transfer form.
const DEMO_AMOUNT: &str = "€120.00";

/// Root demo state.
pub struct App {
    i18n: I18n,
    dispatcher: Dispatcher,
    toasts: Handle,
    snapshots: watch::Receiver<Snapshot>,
    snapshot: Snapshot,
    /// Set after a request so the tick runs until the actor has published.
    refresh_pending: bool,
    diagnostics: DiagnosticsCollector,
    position: Position,
    max_visible: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tracked", &self.snapshot.len())
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let app = Self::with_config(flags.lang, &config, &flags.runtime);

        if let Some(key) = config_warning {
            app.toasts
                .notify_warning(app.i18n.tr(&key), "", Overrides::default());
        }
        (app, Task::none())
    }

    fn with_config(lang: Option<String>, config: &Config, runtime: &tokio::runtime::Handle) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity());
        let timings = Timings::from_config(&config.toasts);
        let dispatcher = Dispatcher::spawn_on(runtime, timings, Some(diagnostics.handle()));
        let toasts = dispatcher.handle();

        tracing::info!(?timings, "notification dispatcher started");

        Self {
            i18n: I18n::new(lang, config),
            snapshots: toasts.subscribe(),
            toasts,
            dispatcher,
            snapshot: Snapshot::default(),
            refresh_pending: true,
            diagnostics,
            position: timings.position,
            max_visible: config.toasts.max_visible(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            !self.snapshot.is_empty(),
            self.refresh_pending,
            self.snapshot.is_animating(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SendInvalidTransfer => {
                self.toasts.notify_error(
                    "",
                    self.i18n.tr("demo-transfer-failed"),
                    Overrides::default().position(self.position),
                );
            }
            Message::ConfirmTransfer => {
                self.toasts.dispatch(self.confirmation_request());
            }
            Message::CheckLimits => {
                self.toasts.notify_warning(
                    "",
                    self.i18n.tr("demo-limit-warning"),
                    Overrides::default().position(self.position),
                );
            }
            Message::ShowRate => {
                self.toasts.notify_info(
                    "",
                    self.i18n.tr("demo-rate"),
                    Overrides::default().position(self.position),
                );
            }
            Message::DismissAll => self.toasts.dismiss_all(),
            Message::PositionSelected(position) => {
                self.position = position;
                return Task::none();
            }
            Message::Toast(toast::Message::Dismiss(id)) => self.toasts.dismiss(id),
            Message::Toast(toast::Message::Activate { id, index }) => {
                self.toasts.activate(id, index);
            }
            Message::Tick(_) => {
                self.refresh();
                return Task::none();
            }
        }
        self.refresh_pending = true;
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snapshot: &self.snapshot,
            amount: DEMO_AMOUNT,
            position: self.position,
            max_visible: self.max_visible,
            recorded_diagnostics: self.diagnostics.len(),
        })
    }

    /// Pulls the latest snapshot and drains recorded diagnostics.
    fn refresh(&mut self) {
        if self.snapshots.has_changed().unwrap_or(false) {
            self.snapshot = self.snapshots.borrow_and_update().clone();
            self.refresh_pending = false;
        } else if !self.dispatcher.is_running() {
            self.refresh_pending = false;
        }
        self.diagnostics.process_pending();
    }

    /// Modal asking to confirm the transfer; confirming sends it.
    fn confirmation_request(&self) -> Request {
        let amount = [("amount", DEMO_AMOUNT)];
        let on_confirm = {
            let toasts = self.toasts.clone();
            let sent = self.i18n.tr_with_args("demo-transfer-sent", &amount);
            let position = self.position;
            move || {
                toasts.notify_success("", sent.clone(), Overrides::default().position(position));
            }
        };

        Request::new(Severity::Info)
            .title(self.i18n.tr("demo-confirm-title"))
            .message(self.i18n.tr_with_args("demo-confirm-message", &amount))
            .button(Button::cancel(self.i18n.tr("demo-confirm-cancel")))
            .button(Button::new(self.i18n.tr("demo-confirm-send")).on_activate(on_confirm))
    }
}

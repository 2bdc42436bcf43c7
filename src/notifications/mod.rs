// SPDX-License-Identifier: MPL-2.0
//! Transient user notifications ("toasts") with timed lifecycles.
//!
//! A notification is dispatched with a [`Severity`], optional text, an
//! optional display duration and optional buttons. It then moves through
//! [`Phase::Entering`], [`Phase::Visible`] and [`Phase::Exiting`] before it
//! is dropped, either on its own after its duration or when dismissed.
//!
//! # Architecture
//!
//! - [`Store`]: clock-free state machine over the tracked collection
//! - [`Timings`]: default durations per severity and animation lengths
//! - [`Dispatcher`]: the tokio task owning the store and all timers
//! - [`Handle`]: cheap, cloneable, non-blocking access for callers
//! - [`Snapshot`]: what a renderer draws, published after every change
//!
//! # Example
//!
//! ```no_run
//! use iced_toasts::notifications::{Dispatcher, Overrides, Timings};
//!
//! # async fn run() {
//! let dispatcher = Dispatcher::spawn(Timings::default());
//! let toasts = dispatcher.handle();
//!
//! let id = toasts.notify_success("Transfer sent", "€120.00 to Alice", Overrides::default());
//! toasts.dismiss(id);
//!
//! dispatcher.shutdown().await;
//! # }
//! ```

mod dispatcher;
mod notification;
mod store;
mod timing;

pub use dispatcher::{Dispatcher, Event, Handle, Snapshot};
pub use notification::{
    Button, ButtonCallback, ButtonStyle, Notification, NotificationId, Overrides, Phase,
    Position, PresentationMode, Request, Severity,
};
pub use store::Store;
pub use timing::Timings;

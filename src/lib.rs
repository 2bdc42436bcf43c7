// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` dispatches transient notifications ("toasts") with timed,
//! animated lifecycles and renders them with the Iced GUI framework.
//!
//! The core is [`notifications`]: a single tokio task owns every tracked
//! notification and its timer, and callers talk to it through a cloneable,
//! non-blocking handle. The rest is the surrounding application: sectioned
//! configuration, Fluent localization, a bounded diagnostics history and an
//! iced overlay that draws the published snapshot.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod paths;
pub mod ui;

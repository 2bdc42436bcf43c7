// SPDX-License-Identifier: MPL-2.0
//! User interface for notifications.
//!
//! Rendering follows the Elm-style "state down, messages up" pattern: the
//! widgets draw a [`Snapshot`](crate::notifications::Snapshot) and emit
//! [`toast::Message`]s that the application forwards to the dispatcher.
//!
//! - [`toast`] - Banner and modal widgets, and the overlay that stacks them
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;

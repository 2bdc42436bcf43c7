// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`DisplayDuration`]: how long a notification stays visible
//! - [`AnimationDuration`]: length of the enter/exit transitions

mod newtypes;

pub use newtypes::{
    animation_duration_bounds, display_duration_bounds, AnimationDuration, DisplayDuration,
};

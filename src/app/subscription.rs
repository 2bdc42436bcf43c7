// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick period while a notification is fading in or out.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick period while notifications are merely on screen.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Creates the snapshot refresh tick.
///
/// Nothing is polled when no notification is tracked and none was just
/// requested.
pub fn create_tick_subscription(
    has_notifications: bool,
    refresh_pending: bool,
    is_animating: bool,
) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notifications || refresh_pending {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

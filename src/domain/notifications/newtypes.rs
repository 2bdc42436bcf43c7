// SPDX-License-Identifier: MPL-2.0
//! Notification timing newtypes.
//!
//! These wrappers keep display and animation durations inside the ranges the
//! dispatcher can honour, so no notification can end up stuck on screen.

use std::time::Duration;

// =============================================================================
// Display Duration Bounds
// =============================================================================

/// Display duration bounds (0.5s to 2 minutes).
pub mod display_duration_bounds {
    /// Shortest time a notification stays visible, in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Longest time a notification stays visible, in milliseconds.
    pub const MAX_MS: u64 = 120_000;
}

/// Animation duration bounds (instant to 2 seconds).
pub mod animation_duration_bounds {
    /// Shortest animation, in milliseconds (instant).
    pub const MIN_MS: u64 = 0;
    /// Longest animation, in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default enter/exit animation length, in milliseconds.
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a notification stays `visible` before it starts exiting.
///
/// Always strictly positive. Zero and negative inputs are not representable:
/// [`DisplayDuration::from_millis`] rejects them so the caller falls back to
/// the severity default instead of "never dismiss".
///
/// # Example
///
/// ```
/// use iced_toasts::domain::notifications::DisplayDuration;
///
/// assert_eq!(DisplayDuration::from_millis(4000).unwrap().as_millis(), 4000);
/// assert!(DisplayDuration::from_millis(0).is_none());
/// assert!(DisplayDuration::from_millis(-20).is_none());
///
/// // Out of range values are clamped
/// assert_eq!(DisplayDuration::from_millis(10).unwrap().as_millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a display duration, clamping to the valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(
            display_duration_bounds::MIN_MS,
            display_duration_bounds::MAX_MS,
        ))
    }

    /// Creates a display duration from signed milliseconds, clamping to the valid range.
    ///
    /// Returns `None` for zero or negative values.
    #[must_use]
    pub fn from_millis(ms: i64) -> Option<Self> {
        if ms <= 0 {
            return None;
        }
        Some(Self::new(
            u64::try_from(ms).unwrap_or(display_duration_bounds::MAX_MS),
        ))
    }

    /// Creates a display duration from a [`Duration`], or `None` if it is zero.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Option<Self> {
        let ms = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Self::from_millis(ms)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of an enter or exit transition.
///
/// Zero is allowed and means the transition completes on the next turn of the
/// dispatcher loop; the phase is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates an animation duration, clamping to the valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(
            animation_duration_bounds::MIN_MS,
            animation_duration_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true for an instant transition.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_duration_rejects_non_positive_values() {
        assert!(DisplayDuration::from_millis(0).is_none());
        assert!(DisplayDuration::from_millis(-1).is_none());
        assert!(DisplayDuration::from_millis(i64::MIN).is_none());
        assert!(DisplayDuration::from_duration(Duration::ZERO).is_none());
    }

    #[test]
    fn display_duration_clamps_to_bounds() {
        assert_eq!(
            DisplayDuration::from_millis(1).map(DisplayDuration::as_millis),
            Some(display_duration_bounds::MIN_MS)
        );
        assert_eq!(
            DisplayDuration::from_millis(i64::MAX).map(DisplayDuration::as_millis),
            Some(display_duration_bounds::MAX_MS)
        );
    }

    #[test]
    fn display_duration_keeps_valid_values() {
        let duration = DisplayDuration::from_duration(Duration::from_secs(10)).unwrap();
        assert_eq!(duration.as_millis(), 10_000);
        assert_eq!(duration.as_duration(), Duration::from_secs(10));
    }

    #[test]
    fn animation_duration_clamps_and_defaults() {
        assert_eq!(AnimationDuration::new(10_000).as_millis(), 2_000);
        assert!(AnimationDuration::new(0).is_instant());
        assert_eq!(AnimationDuration::default().as_millis(), 300);
        assert_eq!(
            AnimationDuration::new(250).as_duration(),
            Duration::from_millis(250)
        );
    }
}

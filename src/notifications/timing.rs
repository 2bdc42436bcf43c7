// SPDX-License-Identifier: MPL-2.0
//! Display and animation timings resolved from configuration.

use super::notification::{Position, Severity};
use crate::config::{self, ToastConfig};
use crate::domain::notifications::{AnimationDuration, DisplayDuration};

/// Durations applied to newly dispatched notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub success: DisplayDuration,
    pub error: DisplayDuration,
    pub warning: DisplayDuration,
    pub info: DisplayDuration,
    pub enter_animation: AnimationDuration,
    pub exit_animation: AnimationDuration,
    /// Anchor used when a request does not choose one.
    pub position: Position,
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default())
    }
}

impl Timings {
    /// Builds timings from the `[toasts]` config section.
    ///
    /// Missing or non-positive values fall back to the documented defaults.
    #[must_use]
    pub fn from_config(toasts: &ToastConfig) -> Self {
        Self {
            success: display(toasts.success_ms, config::DEFAULT_SUCCESS_MS),
            error: display(toasts.error_ms, config::DEFAULT_ERROR_MS),
            warning: display(toasts.warning_ms, config::DEFAULT_WARNING_MS),
            info: display(toasts.info_ms, config::DEFAULT_INFO_MS),
            enter_animation: AnimationDuration::new(
                toasts
                    .enter_animation_ms
                    .unwrap_or(config::DEFAULT_ENTER_ANIMATION_MS),
            ),
            exit_animation: AnimationDuration::new(
                toasts
                    .exit_animation_ms
                    .unwrap_or(config::DEFAULT_EXIT_ANIMATION_MS),
            ),
            position: toasts.position.unwrap_or_default(),
        }
    }

    /// Returns the default display duration for a severity.
    #[must_use]
    pub fn default_for(&self, severity: Severity) -> DisplayDuration {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    /// Resolves the display duration of a request.
    ///
    /// A requested zero or negative duration means "use the default", never
    /// "stay forever".
    #[must_use]
    pub fn duration_for(&self, severity: Severity, requested_ms: Option<i64>) -> DisplayDuration {
        requested_ms
            .and_then(DisplayDuration::from_millis)
            .unwrap_or_else(|| self.default_for(severity))
    }
}

fn display(configured: Option<i64>, fallback: u64) -> DisplayDuration {
    configured
        .and_then(DisplayDuration::from_millis)
        .unwrap_or_else(|| DisplayDuration::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let timings = Timings::default();
        assert_eq!(timings.default_for(Severity::Success).as_millis(), 3000);
        assert_eq!(timings.default_for(Severity::Info).as_millis(), 3000);
        assert_eq!(timings.default_for(Severity::Warning).as_millis(), 4000);
        assert_eq!(timings.default_for(Severity::Error).as_millis(), 5000);
        assert_eq!(timings.enter_animation.as_millis(), 300);
        assert_eq!(timings.exit_animation.as_millis(), 300);
        assert_eq!(timings.position, Position::Top);
    }

    #[test]
    fn errors_stay_longest() {
        let timings = Timings::default();
        for severity in Severity::ALL {
            assert!(timings.default_for(Severity::Error) >= timings.default_for(severity));
        }
    }

    #[test]
    fn non_positive_request_uses_severity_default() {
        let timings = Timings::default();
        assert_eq!(
            timings.duration_for(Severity::Warning, Some(0)).as_millis(),
            4000
        );
        assert_eq!(
            timings.duration_for(Severity::Error, Some(-250)).as_millis(),
            5000
        );
        assert_eq!(
            timings.duration_for(Severity::Error, Some(10_000)).as_millis(),
            10_000
        );
    }

    #[test]
    fn config_values_override_defaults() {
        let toasts = ToastConfig {
            success_ms: Some(1500),
            error_ms: Some(-1),
            enter_animation_ms: Some(0),
            position: Some(Position::Bottom),
            ..ToastConfig::default()
        };
        let timings = Timings::from_config(&toasts);
        assert_eq!(timings.success.as_millis(), 1500);
        assert_eq!(timings.error.as_millis(), 5000);
        assert!(timings.enter_animation.is_instant());
        assert_eq!(timings.position, Position::Bottom);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display durations**: How long each severity stays on screen
//! - **Animations**: Enter/exit transition lengths
//! - **Stacking**: How many banners are shown per screen edge
//! - **Diagnostics**: Size of the warning/error history

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::notifications::{animation_duration_bounds, display_duration_bounds};

// ==========================================================================
// Display Duration Defaults (milliseconds)
// ==========================================================================

/// Default display duration for success notifications.
pub const DEFAULT_SUCCESS_MS: u64 = 3000;

/// Default display duration for informational notifications.
pub const DEFAULT_INFO_MS: u64 = 3000;

/// Default display duration for warnings.
pub const DEFAULT_WARNING_MS: u64 = 4000;

/// Default display duration for errors.
pub const DEFAULT_ERROR_MS: u64 = 5000;

/// Shortest display duration accepted from configuration or requests.
pub const MIN_DISPLAY_MS: u64 = display_duration_bounds::MIN_MS;

/// Longest display duration accepted from configuration or requests.
pub const MAX_DISPLAY_MS: u64 = display_duration_bounds::MAX_MS;

// ==========================================================================
// Animation Defaults (milliseconds)
// ==========================================================================

/// Default length of the enter transition.
pub const DEFAULT_ENTER_ANIMATION_MS: u64 = animation_duration_bounds::DEFAULT_MS;

/// Default length of the exit transition.
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = animation_duration_bounds::DEFAULT_MS;

/// Longest accepted transition.
pub const MAX_ANIMATION_MS: u64 = animation_duration_bounds::MAX_MS;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Default number of banners shown at once per screen edge.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum number of banners shown per screen edge.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum number of banners shown per screen edge.
pub const MAX_MAX_VISIBLE: usize = 10;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of recorded warning/error notifications.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostics history size.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostics history size.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Display durations
    assert!(MIN_DISPLAY_MS > 0);
    assert!(MAX_DISPLAY_MS > MIN_DISPLAY_MS);
    assert!(DEFAULT_SUCCESS_MS >= MIN_DISPLAY_MS && DEFAULT_SUCCESS_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_INFO_MS >= MIN_DISPLAY_MS && DEFAULT_INFO_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_WARNING_MS >= MIN_DISPLAY_MS && DEFAULT_WARNING_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_ERROR_MS >= MIN_DISPLAY_MS && DEFAULT_ERROR_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_ERROR_MS >= DEFAULT_WARNING_MS);
    assert!(DEFAULT_WARNING_MS >= DEFAULT_INFO_MS);

    // Animations
    assert!(DEFAULT_ENTER_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_ENTER_ANIMATION_MS < DEFAULT_SUCCESS_MS);

    // Stacking
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    // Diagnostics
    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};

// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! Bounds for the in-memory history of warning and error notifications.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Buffer capacity bounds (16 to 4096 recorded notifications).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 16;
    /// Maximum buffer capacity.
    pub const MAX: usize = 4096;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// How many warning/error notifications the diagnostics history keeps.
///
/// # Example
///
/// ```
/// use iced_toasts::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(64).value(), 64);
/// assert_eq!(BufferCapacity::new(50_000).value(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= buffer_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= buffer_capacity_bounds::MAX
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_capacity_clamps() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn buffer_capacity_default() {
        assert_eq!(
            BufferCapacity::default().value(),
            buffer_capacity_bounds::DEFAULT
        );
    }

    #[test]
    fn buffer_capacity_min_max() {
        assert!(BufferCapacity::new(buffer_capacity_bounds::MIN).is_min());
        assert!(BufferCapacity::new(buffer_capacity_bounds::MAX).is_max());
        assert!(!BufferCapacity::new(256).is_min());
        assert!(!BufferCapacity::new(256).is_max());
    }
}

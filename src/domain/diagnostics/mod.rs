// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: size of the recorded notification history

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};

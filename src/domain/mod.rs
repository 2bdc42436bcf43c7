// SPDX-License-Identifier: MPL-2.0
//! Domain layer - validated value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notifications`]: Timing types ([`DisplayDuration`](notifications::DisplayDuration),
//!   [`AnimationDuration`](notifications::AnimationDuration))

pub mod diagnostics;
pub mod notifications;

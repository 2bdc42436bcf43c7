// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for shown notifications.
//!
//! Warning and error notifications are recorded with a timestamp into a
//! memory-bounded circular buffer, so a support report can list what the user
//! was told before something went wrong.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: receiving and recording sides

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent};

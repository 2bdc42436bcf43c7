// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Built-in labels (default notification titles, the dismiss button and the
//! demo screen) are localized with Fluent. Notification titles and messages
//! supplied by callers are shown as-is.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary
//! - Runtime language switching
//! - `MISSING: <key>` marker for untranslated keys

pub mod fluent;

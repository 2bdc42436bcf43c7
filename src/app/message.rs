// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::Position;
use crate::ui::toast;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Transfer to a bad account: error banner.
    SendInvalidTransfer,
    /// Open the confirmation modal.
    ConfirmTransfer,
    CheckLimits,
    ShowRate,
    DismissAll,
    PositionSelected(Position),
    Toast(toast::Message),
    /// Periodic tick that pulls the latest notification snapshot.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Runtime the notification dispatcher is spawned on.
    pub runtime: tokio::runtime::Handle,
}

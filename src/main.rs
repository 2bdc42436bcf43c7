// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `iced_toasts=debug`).
const LOG_ENV: &str = "ICED_TOASTS_LOG";

const HELP: &str = "\
iced_toasts - notification dispatcher demo

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <ID>             Interface language (e.g. en-US, fr)
  --config-dir <PATH>     Directory holding settings.toml
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("toasts")
        .enable_time()
        .build()?;

    app::run(Flags {
        lang,
        config_dir,
        runtime: runtime.handle().clone(),
    })?;

    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}

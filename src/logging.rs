//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax)
pub const LOG_ENV: &str = "EMOJIHUB_LOG";

const DEFAULT_FILTER: &str = "emojihub=info";

/// Install a stderr `tracing` subscriber filtered by `EMOJIHUB_LOG`
///
/// Does nothing if a global subscriber is already installed, whether by an
/// earlier call or by the host application.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
}

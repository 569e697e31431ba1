//! Diagnostic logging.
//!
//! The terminal belongs to the game while it's running, so log messages can
//! only go to a file, and only if the user asks for one.
use anyhow::Context;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Environment variable from which the log filter directives are read
pub(crate) const LOG_ENV_VAR: &str = "TORSNAKE_LOG";

/// Filter directives used when [`LOG_ENV_VAR`] is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber that writes log messages to the file at
/// `path`, replacing any existing contents
pub(crate) fn init(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    tracing::subscriber::set_global_default(subscriber(file, env_filter()))
        .context("failed to install log subscriber")?;
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn subscriber(file: fs_err::File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

//! Tracing subscriber setup

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Install the global fmt subscriber described by `settings`
///
/// `RUST_LOG` wins over `settings.log_filter` when it is set. Fails if a
/// global subscriber is already installed.
pub fn init(settings: &Settings) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) => EnvFilter::try_new(directive)?,
        Err(_) => EnvFilter::try_new(&settings.log_filter)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if settings.log_json {
        builder
            .with_target(false)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
    }
}

//! Runtime settings shared by the ticketing services
//!
//! Settings are layered with the `config` crate: built-in defaults first,
//! then any `TICKETING_*` environment variable.

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TICKETING";

/// Default key the session record is stored under
pub const DEFAULT_SESSION_KEY: &str = "auth-storage";

/// Runtime settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Redis connection URL
    pub redis_url: String,
    /// Key the persisted session lives under
    pub session_key: String,
    /// Session record TTL in seconds, `0` keeps it until logout
    pub session_ttl_seconds: u64,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Emit JSON log lines instead of the human format
    pub log_json: bool,
}

impl Settings {
    /// Load settings from defaults and environment variables
    ///
    /// # Environment Variables
    /// - `TICKETING_REDIS_URL` (default: "redis://localhost:6379")
    /// - `TICKETING_SESSION_KEY` (default: "auth-storage")
    /// - `TICKETING_SESSION_TTL_SECONDS` (default: 0)
    /// - `TICKETING_LOG_FILTER` (default: "info")
    /// - `TICKETING_LOG_JSON` (default: false)
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("redis_url", "redis://localhost:6379")?
            .set_default("session_key", DEFAULT_SESSION_KEY)?
            .set_default("session_ttl_seconds", 0_i64)?
            .set_default("log_filter", "info")?
            .set_default("log_json", false)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize::<Settings>()?;

        if settings.session_key.trim().is_empty() {
            anyhow::bail!("{ENV_PREFIX}_SESSION_KEY must not be empty");
        }

        Ok(settings)
    }

    /// TTL to hand to the store, `None` when sessions never expire
    pub fn session_ttl(&self) -> Option<u64> {
        (self.session_ttl_seconds > 0).then_some(self.session_ttl_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            session_ttl_seconds: 0,
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

//! Common library for the ticketing workspace
//!
//! This crate provides shared functionality used by the auth and catalog
//! services: the key-value store used for session persistence, its error
//! types, runtime settings and logging setup.
//!
//! ```rust,no_run
//! use common::{KeyValueStore, RedisConfig, RedisPool, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load()?;
//!     common::logging::init(&settings)?;
//!     let pool = RedisPool::new(&RedisConfig::from_settings(&settings))?;
//!     let is_healthy = pool.health_check().await?;
//!     println!("Cache health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod logging;
pub mod settings;

pub use cache::{KeyValueStore, MemoryStore, RedisConfig, RedisPool};
pub use error::{CacheError, CacheResult};
pub use settings::Settings;

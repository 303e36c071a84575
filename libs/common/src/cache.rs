//! Key-value store module for the ticketing workspace
//!
//! This module defines the [`KeyValueStore`] abstraction used to persist
//! client state between restarts, together with two backends: a Redis
//! backend for hosts that run a cache server, and an in-process backend
//! for tests and offline hosts.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{CacheError, CacheResult};
use crate::settings::Settings;

/// Minimal async key-value contract shared by every backend
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Set a key-value pair with optional TTL
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> CacheResult<bool>;
}

/// Configuration for Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

impl RedisConfig {
    /// Create a new RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        RedisConfig { url }
    }

    /// Take the connection URL from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        RedisConfig {
            url: settings.redis_url.clone(),
        }
    }
}

/// Redis-backed store
#[derive(Clone)]
pub struct RedisPool {
    client: Client,
}

impl RedisPool {
    /// Initialize a new Redis client. No connection is opened until first use.
    pub fn new(config: &RedisConfig) -> CacheResult<Self> {
        let client = Client::open(config.url.clone()).map_err(|e| {
            CacheError::Configuration(format!("Invalid Redis URL '{}': {}", config.url, e))
        })?;
        info!("Redis client initialized with URL: {}", config.url);
        Ok(RedisPool { client })
    }

    async fn get_connection(&self) -> CacheResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(CacheError::Connection)
    }
}

#[async_trait]
impl KeyValueStore for RedisPool {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(key).await.map_err(CacheError::Command)?;
        debug!(key, hit = value.is_some(), "redis get");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;

        if let Some(ttl) = ttl_seconds {
            let _: () = conn
                .set_ex(key, value, ttl)
                .await
                .map_err(CacheError::Command)?;
        } else {
            let _: () = conn.set(key, value).await.map_err(CacheError::Command)?;
        }

        debug!(key, ?ttl_seconds, "redis set");
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;
        let _: u64 = conn.del(key).await.map_err(CacheError::Command)?;
        debug!(key, "redis delete");
        Ok(())
    }

    async fn health_check(&self) -> CacheResult<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(CacheError::Command)?;
        Ok(pong == "PONG")
    }
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-process store backed by a `HashMap`
///
/// Clones share the same map, so a clone handed to a second owner sees
/// every write made through the first.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, MemoryEntry>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) keys
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.lock().await;
        entries.values().filter(|e| !e.is_expired(now)).count()
    }

    /// True when no live key is stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let expires_at = match ttl_seconds {
            Some(ttl) => Some(
                Instant::now()
                    .checked_add(Duration::from_secs(ttl))
                    .ok_or_else(|| CacheError::Configuration(format!("TTL of {ttl}s is out of range")))?,
            ),
            None => None,
        };
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> CacheResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_memory_set_get_delete() -> CacheResult<()> {
        let store = MemoryStore::new();

        store.set("test_key", "test_value", None).await?;
        assert_eq!(store.get("test_key").await?, Some("test_value".to_string()));

        store.delete("test_key").await?;
        assert_eq!(store.get("test_key").await?, None);

        // Deleting again is fine
        assert_ok!(store.delete("test_key").await);
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_zero_ttl_expires_immediately() -> CacheResult<()> {
        let store = MemoryStore::new();
        store.set("short", "lived", Some(0)).await?;

        assert_eq!(store.get("short").await?, None);
        assert!(store.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_rejects_out_of_range_ttl() {
        let store = MemoryStore::new();

        let err = assert_err!(store.set("k", "v", Some(u64::MAX)).await);
        assert!(matches!(err, CacheError::Configuration(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_memory_clones_share_entries() -> CacheResult<()> {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("shared", "yes", Some(60)).await?;
        assert_eq!(other.get("shared").await?, Some("yes".to_string()));
        assert_eq!(other.len().await, 1);
        assert!(other.health_check().await?);
        Ok(())
    }

    #[test]
    fn test_redis_rejects_malformed_url() {
        let config = RedisConfig {
            url: "not a url".to_string(),
        };

        match RedisPool::new(&config) {
            Err(CacheError::Configuration(msg)) => assert!(msg.contains("not a url")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("malformed URL accepted"),
        }
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_redis_set_get_delete() -> CacheResult<()> {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
        };

        let pool = RedisPool::new(&config)?;
        assert!(pool.health_check().await?);

        let key = "test_key";
        let value = "test_value";
        pool.set(key, value, Some(5)).await?;

        let retrieved = pool.get(key).await?;
        assert_eq!(retrieved, Some(value.to_string()));

        pool.delete(key).await?;
        let retrieved = pool.get(key).await?;
        assert_eq!(retrieved, None);

        Ok(())
    }
}

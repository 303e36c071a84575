//! Custom error types for the common library
//!
//! This module defines the errors raised by the key-value store backends
//! and the settings loader.

use redis::RedisError;
use thiserror::Error;

/// Custom error type for key-value store operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// Error occurred while opening a connection to the store
    #[error("Cache connection error: {0}")]
    Connection(#[source] RedisError),

    /// Error occurred while executing a store command
    #[error("Cache command error: {0}")]
    Command(#[source] RedisError),

    /// Configuration error
    #[error("Cache configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with CacheError
pub type CacheResult<T> = Result<T, CacheError>;

//! Custom error types for the authentication service

use common::CacheError;
use thiserror::Error;

/// Custom error type for the authentication service
#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential record matched the email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The session record could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] CacheError),

    /// The session record could not be encoded
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;

//! Authentication service for the ticketing client
//!
//! Authenticates against a fixed credential table and owns the session,
//! which is persisted to a key-value store so it survives restarts.

pub mod error;
pub mod models;
pub mod repositories;
pub mod session;
pub mod validation;

pub use error::{AuthError, AuthResult};
pub use models::{Landing, LoginCredentials, Role, Session, User};
pub use repositories::UserRepository;
pub use session::SessionManager;

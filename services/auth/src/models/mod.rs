//! Authentication service models

pub mod role;
pub mod session;
pub mod user;

// Re-export for convenience
pub use role::Role;
pub use session::{Landing, PersistedSession, Session};
pub use user::{LoginCredentials, StaticUser, User};

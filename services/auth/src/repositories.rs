//! Repositories for credential lookups

pub mod user;

pub use user::UserRepository;

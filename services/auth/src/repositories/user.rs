//! Credential table lookups

use std::sync::Arc;
use tracing::debug;

use crate::models::{Role, StaticUser};

/// User repository over the fixed credential table
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Arc<Vec<StaticUser>>,
}

impl UserRepository {
    /// Create a repository over the given records
    pub fn new(users: Vec<StaticUser>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// Repository holding the two demo accounts
    pub fn seeded() -> Self {
        Self::new(vec![
            StaticUser::new(1, "admin@test.com", "123456", "Admin User", Role::Admin),
            StaticUser::new(2, "user@test.com", "123456", "João Silva", Role::User),
        ])
    }

    /// Find the record matching both email and password
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&StaticUser> {
        let found = self.users.iter().find(|u| u.matches(email, password));
        debug!(email, found = found.is_some(), "credential lookup");
        found
    }

    /// Find a record by ID
    pub fn find_by_id(&self, id: u32) -> Option<&StaticUser> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

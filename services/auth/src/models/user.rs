//! User model and related functionality

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Public identity of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
}

/// Seeded credential record
///
/// Passwords are plaintext: the table is fixed demo data, not a security
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticUser {
    pub id: u32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl StaticUser {
    pub fn new(
        id: u32,
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role,
        }
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Public projection without the password
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User login credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Demo account for `role`, matching the seeded credential table
    pub fn demo(role: Role) -> Self {
        match role {
            Role::Admin => Self::new("admin@test.com", "123456"),
            Role::User => Self::new("user@test.com", "123456"),
        }
    }
}

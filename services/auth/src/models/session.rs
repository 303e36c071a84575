//! Session model and related functionality

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::user::User;

/// Current authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub role: Role,
}

impl Session {
    pub fn user_id(&self) -> u32 {
        self.user.id
    }
}

/// Record written to the key-value store
///
/// The three fields mirror what the client exposes. A record is only
/// trusted when they agree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<User>,
    pub is_logged_in: bool,
    pub user_type: Option<Role>,
}

impl PersistedSession {
    /// Empty (logged-out) record
    pub fn logged_out() -> Self {
        Self {
            user: None,
            is_logged_in: false,
            user_type: None,
        }
    }

    /// user present <=> logged in <=> role present
    pub fn is_consistent(&self) -> bool {
        self.user.is_some() == self.is_logged_in && self.user_type.is_some() == self.is_logged_in
    }

    /// The session this record describes, `None` for logged-out or
    /// inconsistent records
    pub fn into_session(self) -> Option<Session> {
        if !self.is_consistent() {
            return None;
        }

        match (self.user, self.user_type) {
            (Some(user), Some(role)) => Some(Session { user, role }),
            _ => None,
        }
    }
}

impl From<Option<&Session>> for PersistedSession {
    fn from(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self {
                user: Some(session.user.clone()),
                is_logged_in: true,
                user_type: Some(session.role),
            },
            None => Self::logged_out(),
        }
    }
}

/// First screen shown for a session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Login,
    Home,
    AdminDashboard,
}

impl Landing {
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            None => Landing::Login,
            Some(session) if session.role.is_admin() => Landing::AdminDashboard,
            Some(_) => Landing::Home,
        }
    }
}

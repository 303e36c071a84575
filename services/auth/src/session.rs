//! Session management backed by a key-value store

use std::sync::Arc;

use common::{KeyValueStore, Settings};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{AuthError, AuthResult};
use crate::models::{Landing, PersistedSession, Role, Session, User};
use crate::repositories::UserRepository;

/// Owner of the client's authentication state
///
/// Clones share the same session, so every screen holding a clone observes
/// the same login state.
#[derive(Clone)]
pub struct SessionManager {
    users: UserRepository,
    store: Arc<dyn KeyValueStore>,
    session_key: String,
    session_ttl: Option<u64>,
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionManager {
    /// Create a logged-out session manager without reading the store
    pub fn new(users: UserRepository, store: Arc<dyn KeyValueStore>, settings: &Settings) -> Self {
        Self {
            users,
            store,
            session_key: settings.session_key.clone(),
            session_ttl: settings.session_ttl(),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a session manager and rehydrate the persisted session
    ///
    /// A missing record means logged out. Records that do not parse, are
    /// internally inconsistent, or name a user missing from the credential
    /// table are ignored.
    pub async fn restore(
        users: UserRepository,
        store: Arc<dyn KeyValueStore>,
        settings: &Settings,
    ) -> AuthResult<Self> {
        let manager = Self::new(users, store, settings);

        let Some(raw) = manager.store.get(&manager.session_key).await? else {
            info!(key = %manager.session_key, "No persisted session, starting logged out");
            return Ok(manager);
        };

        let session = match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(record) if !record.is_consistent() => {
                warn!(key = %manager.session_key, "Ignoring inconsistent persisted session");
                None
            }
            Ok(record) => record
                .into_session()
                .filter(|session| manager.is_known(session)),
            Err(e) => {
                warn!(key = %manager.session_key, error = %e, "Ignoring unreadable persisted session");
                None
            }
        };

        match &session {
            Some(session) => info!(user_id = session.user_id(), role = %session.role, "Session restored"),
            None => info!("Persisted session is logged out"),
        }

        *manager.current.write().await = session;
        Ok(manager)
    }

    fn is_known(&self, session: &Session) -> bool {
        let known = self
            .users
            .find_by_id(session.user_id())
            .is_some_and(|record| record.to_user() == session.user && record.role == session.role);

        if !known {
            warn!(user_id = session.user_id(), "Persisted session names an unknown user");
        }
        known
    }

    /// Authenticate against the credential table
    ///
    /// On success the new session is persisted and becomes the current
    /// session. On failure the current session is left untouched.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Session> {
        let Some(record) = self.users.find_by_credentials(email, password) else {
            warn!(email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session = Session {
            user: record.to_user(),
            role: record.role,
        };

        let mut current = self.current.write().await;
        self.persist(Some(&session)).await?;
        *current = Some(session.clone());

        info!(user_id = session.user_id(), role = %session.role, "User logged in");
        Ok(session)
    }

    /// Clear the session
    ///
    /// The in-memory session is cleared even when the store fails. If the
    /// persisted record cannot be deleted it is overwritten with a
    /// logged-out record; an error is returned only when both fail.
    pub async fn logout(&self) -> AuthResult<()> {
        let mut current = self.current.write().await;
        let previous = current.take();

        if let Some(session) = &previous {
            info!(user_id = session.user_id(), "User logged out");
        }

        if let Err(e) = self.store.delete(&self.session_key).await {
            warn!(key = %self.session_key, error = %e, "Could not delete persisted session, overwriting it");
            self.persist(None).await?;
        }
        Ok(())
    }

    async fn persist(&self, session: Option<&Session>) -> AuthResult<()> {
        let record = serde_json::to_string(&PersistedSession::from(session))?;
        self.store
            .set(&self.session_key, &record, self.session_ttl)
            .await?;
        Ok(())
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.current.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn role(&self) -> Option<Role> {
        self.current.read().await.as_ref().map(|s| s.role)
    }

    /// Screen the client should open for the current session
    pub async fn landing(&self) -> Landing {
        Landing::for_session(self.current.read().await.as_ref())
    }
}

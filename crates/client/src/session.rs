//! In-process session state: access token, refresh token, user snapshot

use std::sync::{Arc, RwLock};
use storefront_core::types::User;

#[derive(Debug, Default)]
struct SessionState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    current_user: Option<User>,
}

/// Cheaply clonable handle over the session triple. All mutation goes through
/// the scoped setters; locks are never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_access_token(&self, token: Option<String>) {
        self.write().access_token = token;
    }

    pub fn set_refresh_token(&self, token: Option<String>) {
        self.write().refresh_token = token;
    }

    pub fn set_current_user(&self, user: Option<User>) {
        self.write().current_user = user;
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh_token.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    /// Authenticated means an access token is present. A cached user snapshot
    /// alone never counts.
    pub fn is_authenticated(&self) -> bool {
        self.read().access_token.is_some()
    }

    /// Clear all three fields under a single write lock, so no partially
    /// cleared state is observable. Idempotent.
    pub fn clear(&self) {
        let mut state = self.write();
        state.access_token = None;
        state.refresh_token = None;
        state.current_user = None;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            full_name: "Jane Doe".into(),
            phone_number: None,
            date_of_birth: None,
            is_email_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tokens_round_trip() {
        let session = SessionStore::new();
        session.set_access_token(Some("A1".into()));
        session.set_refresh_token(Some("R1".into()));
        assert_eq!(session.access_token().as_deref(), Some("A1"));
        assert_eq!(session.refresh_token().as_deref(), Some("R1"));

        session.set_access_token(None);
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn user_round_trips_and_clears() {
        let session = SessionStore::new();
        let user = sample_user();
        session.set_current_user(Some(user.clone()));
        assert_eq!(session.current_user(), Some(user));
        session.set_current_user(None);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn cached_user_without_access_token_is_unauthenticated() {
        let session = SessionStore::new();
        session.set_current_user(Some(sample_user()));
        assert!(!session.is_authenticated());
        session.set_access_token(Some("A1".into()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_is_atomic_and_idempotent() {
        let session = SessionStore::new();
        session.set_access_token(Some("A1".into()));
        session.set_refresh_token(Some("R1".into()));
        session.set_current_user(Some(sample_user()));

        session.clear();
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
        assert_eq!(session.current_user(), None);

        session.clear();
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn clones_share_state() {
        let session = SessionStore::new();
        let other = session.clone();
        session.set_access_token(Some("A1".into()));
        assert_eq!(other.access_token().as_deref(), Some("A1"));
    }
}

//! Authenticated session, in memory plus a persisted mirror.
//!
//! Two string keys in storage — the bearer token and the serialized user —
//! written on login, removed on logout. Hydration is a synchronous read of
//! local storage; no network call is involved. The in-memory state is
//! shared with the HTTP client so a token rotation between calls is
//! observed at call time.

use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::cache::QueryCache;
use crate::models::User;
use crate::storage::KvStorage;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "user";

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

pub type SharedSession = Arc<RwLock<SessionState>>;

pub struct SessionStore {
    storage: Box<dyn KvStorage>,
    state: SharedSession,
}

impl SessionStore {
    /// Hydrate from storage. Requires both keys; a missing key or a user
    /// payload that fails to decode yields an anonymous session and the
    /// stale keys are discarded.
    pub fn hydrate(storage: Box<dyn KvStorage>) -> Self {
        let mut state = SessionState::default();

        match (storage.get(KEY_TOKEN), storage.get(KEY_USER)) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<User>(&user_json) {
                Ok(user) => {
                    state.token = Some(token);
                    state.user = Some(user);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "discarding corrupt persisted session");
                    let _ = storage.remove(KEY_TOKEN);
                    let _ = storage.remove(KEY_USER);
                }
            },
            (token, user) => {
                // One key without the other is as good as neither.
                if token.is_some() || user.is_some() {
                    let _ = storage.remove(KEY_TOKEN);
                    let _ = storage.remove(KEY_USER);
                }
            }
        }

        SessionStore {
            storage,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Handle for collaborators that read the token at call time.
    pub fn shared(&self) -> SharedSession {
        Arc::clone(&self.state)
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().unwrap().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().unwrap().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().unwrap();
        state.token.is_some() && state.user.is_some()
    }

    /// Persist both keys and update in-memory state synchronously.
    pub fn login(&self, token: &str, user: &User) -> Result<()> {
        self.storage.set(KEY_TOKEN, token)?;
        self.storage.set(KEY_USER, &serde_json::to_string(user)?)?;

        let mut state = self.state.write().unwrap();
        state.token = Some(token.to_string());
        state.user = Some(user.clone());
        Ok(())
    }

    /// Remove persisted state, clear in-memory state, and purge every
    /// cached query result: later requests must not be attributable to
    /// the old identity.
    pub fn logout(&self, cache: &QueryCache) -> Result<()> {
        self.storage.remove(KEY_TOKEN)?;
        self.storage.remove(KEY_USER)?;

        {
            let mut state = self.state.write().unwrap();
            state.token = None;
            state.user = None;
        }

        cache.clear()
    }
}

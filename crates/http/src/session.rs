//! Session model and persistence.
//!
//! The session is a token bundle cached as JSON in whatever storage the
//! embedder injects (localStorage in the browser, memory in tests). Reads
//! go through an expiry check and collapse anything stale or unreadable to
//! the empty session.

use crate::types::LoginData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "session.data";

/// Keys written by earlier releases, removed whenever the session is cleared.
const LEGACY_KEYS: [&str; 5] = [
    "access_token",
    "refresh_token",
    "user_name",
    "user_role",
    "token_expires_at",
];

/// Key/value persistence the session store runs against.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for native callers and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The authenticated user's token bundle. All fields are optional; the
/// empty session stands in for "not logged in".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl Session {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Expired when the expiry is absent, unparsable, or not strictly in
    /// the future.
    pub fn is_expired(&self) -> bool {
        let Some(raw) = self.expires_at.as_deref() else {
            return true;
        };
        match DateTime::parse_from_rfc3339(raw) {
            Ok(expires_at) => expires_at.with_timezone(&Utc) <= Utc::now(),
            Err(_) => true,
        }
    }
}

/// Read/write access to the persisted session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory; useful for tests and native tools.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryBackend::new()))
    }

    /// The current session. Unreadable or expired state is cleared and the
    /// empty session returned instead.
    pub fn get(&self) -> Session {
        let Some(raw) = self.backend.get(SESSION_KEY) else {
            return Session::empty();
        };
        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(err) => {
                log::warn!("discarding unreadable session: {err}");
                self.backend.remove(SESSION_KEY);
                return Session::empty();
            }
        };
        if session.is_expired() {
            self.backend.remove(SESSION_KEY);
            return Session::empty();
        }
        session
    }

    /// The stored token as-is, skipping the expiry check `get` applies.
    /// Used when attaching the bearer header: the server is the final
    /// authority on whether a token is still usable.
    pub fn raw_token(&self) -> Option<String> {
        let raw = self.backend.get(SESSION_KEY)?;
        let session: Session = serde_json::from_str(&raw).ok()?;
        session.token
    }

    /// Persist the bundle returned by a successful login.
    pub fn persist(&self, data: &LoginData) {
        let session = Session {
            token: Some(data.token.clone()),
            refresh_token: Some(data.refresh_token.clone()),
            name: Some(data.name.clone()),
            role: Some(data.role.clone()),
            expires_at: Some(data.expires_at.clone()),
        };
        if let Ok(raw) = serde_json::to_string(&session) {
            self.backend.set(SESSION_KEY, &raw);
        }
    }

    /// Merge a refreshed token (and optional expiry) into the stored JSON,
    /// preserving every other field. A corrupt stored value is replaced by
    /// a fresh object holding just the refreshed fields.
    pub fn apply_refresh(&self, token: &str, expires_at: Option<&str>) {
        let mut stored = self
            .backend
            .get(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .filter(Value::is_object)
            .unwrap_or_else(|| Value::Object(Map::new()));

        stored["token"] = Value::String(token.to_owned());
        if let Some(expires_at) = expires_at {
            stored["expiresAt"] = Value::String(expires_at.to_owned());
        }
        if let Ok(raw) = serde_json::to_string(&stored) {
            self.backend.set(SESSION_KEY, &raw);
        }
    }

    /// Remove the session and any legacy keys.
    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
        for key in LEGACY_KEYS {
            self.backend.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_raw(raw: &str) -> SessionStore {
        let store = SessionStore::in_memory();
        store.backend.set(SESSION_KEY, raw);
        store
    }

    fn future_session() -> String {
        serde_json::json!({
            "token": "T1",
            "refreshToken": "R1",
            "name": "Ana",
            "role": "admin",
            "expiresAt": "2099-01-01T00:00:00Z"
        })
        .to_string()
    }

    #[test]
    fn missing_session_is_empty() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get(), Session::empty());
    }

    #[test]
    fn valid_session_round_trips() {
        let store = store_with_raw(&future_session());
        let session = store.get();

        assert_eq!(session.token.as_deref(), Some("T1"));
        assert_eq!(session.name.as_deref(), Some("Ana"));
        assert_eq!(session.role.as_deref(), Some("admin"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn expired_session_is_cleared() {
        let store = store_with_raw(
            &serde_json::json!({
                "token": "T1",
                "expiresAt": "2000-01-01T00:00:00Z"
            })
            .to_string(),
        );

        assert_eq!(store.get(), Session::empty());
        assert_eq!(store.backend.get(SESSION_KEY), None);
    }

    #[test]
    fn missing_expiry_counts_as_expired() {
        let store = store_with_raw(&serde_json::json!({ "token": "T1" }).to_string());
        assert_eq!(store.get(), Session::empty());
    }

    #[test]
    fn unparsable_expiry_counts_as_expired() {
        let store = store_with_raw(
            &serde_json::json!({
                "token": "T1",
                "expiresAt": "next tuesday"
            })
            .to_string(),
        );
        assert_eq!(store.get(), Session::empty());
        assert_eq!(store.backend.get(SESSION_KEY), None);
    }

    #[test]
    fn garbage_json_is_cleared() {
        let store = store_with_raw("{not json");
        assert_eq!(store.get(), Session::empty());
        assert_eq!(store.backend.get(SESSION_KEY), None);
    }

    #[test]
    fn raw_token_skips_expiry_check() {
        let store = store_with_raw(
            &serde_json::json!({
                "token": "T1",
                "expiresAt": "2000-01-01T00:00:00Z"
            })
            .to_string(),
        );
        assert_eq!(store.raw_token().as_deref(), Some("T1"));
    }

    #[test]
    fn persist_stores_login_bundle() {
        let store = SessionStore::in_memory();
        store.persist(&LoginData {
            token: "T1".into(),
            refresh_token: "R1".into(),
            expires_in: 3600,
            expires_at: "2099-01-01T00:00:00Z".into(),
            name: "Ana".into(),
            role: "writer".into(),
        });

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("T1"));
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
        assert_eq!(session.role.as_deref(), Some("writer"));
    }

    #[test]
    fn refresh_updates_token_and_preserves_other_fields() {
        let store = store_with_raw(&future_session());
        store.apply_refresh("T2", Some("2099-06-01T00:00:00Z"));

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("T2"));
        assert_eq!(session.expires_at.as_deref(), Some("2099-06-01T00:00:00Z"));
        assert_eq!(session.name.as_deref(), Some("Ana"));
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
    }

    #[test]
    fn refresh_without_expiry_keeps_old_expiry() {
        let store = store_with_raw(&future_session());
        store.apply_refresh("T2", None);

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("T2"));
        assert_eq!(session.expires_at.as_deref(), Some("2099-01-01T00:00:00Z"));
    }

    #[test]
    fn refresh_over_corrupt_state_starts_fresh() {
        let store = store_with_raw("][");
        store.apply_refresh("T2", Some("2099-01-01T00:00:00Z"));

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("T2"));
        assert_eq!(session.name, None);
    }

    #[test]
    fn clear_removes_session_and_legacy_keys() {
        let store = store_with_raw(&future_session());
        store.backend.set("access_token", "old");
        store.backend.set("user_role", "old");

        store.clear();

        assert_eq!(store.backend.get(SESSION_KEY), None);
        assert_eq!(store.backend.get("access_token"), None);
        assert_eq!(store.backend.get("user_role"), None);
    }
}

//! Session persistence: the bearer token and the signed-in user, stored under
//! two browser storage keys.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_KEY: &str = "user";

/// Raw string key/value persistence.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            log::error!("Failed to write '{}' to localStorage", key);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Process-local storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// The signed-in user as returned by the login endpoint. Unknown fields are
/// kept so the stored JSON round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

/// Absent, blank and the literal `"undefined"` all mean "no token".
pub fn is_usable_token(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && token != "undefined"
}

/// Typed access to the two session keys over any `StorageBackend`.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend + Send + Sync>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend + Send + Sync>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .read(ACCESS_TOKEN_KEY)
            .filter(|token| is_usable_token(token))
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.backend.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// The stored session, if a usable token is present.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            user: self.user(),
        })
    }

    pub fn save(&self, session: &Session) {
        self.backend.write(ACCESS_TOKEN_KEY, &session.token);
        match &session.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(json) => self.backend.write(USER_KEY, &json),
                Err(e) => log::error!("Failed to serialize user: {}", e),
            },
            None => self.backend.remove(USER_KEY),
        }
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// Raw value of a storage key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.read(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luke() -> User {
        User {
            name: Some("Luke".to_string()),
            role: Some("admin".to_string()),
            ..User::default()
        }
    }

    #[test]
    fn test_usable_token() {
        assert!(is_usable_token("abc.def"));
        assert!(!is_usable_token(""));
        assert!(!is_usable_token("   "));
        assert!(!is_usable_token("undefined"));
    }

    #[test]
    fn test_save_and_load() {
        let store = SessionStore::in_memory();
        assert!(store.load().is_none());

        store.save(&Session { token: "t0k3n".to_string(), user: Some(luke()) });

        let session = store.load().unwrap();
        assert_eq!(session.token, "t0k3n");
        assert_eq!(session.user, Some(luke()));
        assert_eq!(store.raw(ACCESS_TOKEN_KEY).as_deref(), Some("t0k3n"));
    }

    #[test]
    fn test_undefined_token_is_no_session() {
        let backend = Arc::new(MemoryStorage::default());
        backend.write(ACCESS_TOKEN_KEY, "undefined");
        let store = SessionStore::new(backend);
        assert_eq!(store.token(), None);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = SessionStore::in_memory();
        store.save(&Session { token: "t".to_string(), user: Some(luke()) });
        store.clear();
        assert_eq!(store.raw(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.raw(USER_KEY), None);
    }

    #[test]
    fn test_unreadable_user_is_none_but_token_survives() {
        let backend = Arc::new(MemoryStorage::default());
        backend.write(ACCESS_TOKEN_KEY, "t");
        backend.write(USER_KEY, "{not json");
        let store = SessionStore::new(backend);
        let session = store.load().unwrap();
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "name": "Leia",
            "role": "viewer",
            "last_login_at": "2024-05-25T09:03:07Z",
            "department": "Rebellion"
        }))
        .unwrap();
        assert_eq!(user.extra.get("department"), Some(&json!("Rebellion")));

        let round_trip = serde_json::to_value(&user).unwrap();
        assert_eq!(round_trip["department"], "Rebellion");
        assert_eq!(round_trip["last_login_at"], "2024-05-25T09:03:07Z");
    }
}

//! Persisted session record: two `localStorage` slots, `user` and `token`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session container writes through [`SessionStore`] on every credential
//! change and clears it on logout; bootstrap reads it once at startup.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort. A browser without `localStorage` (or a
//! full quota) keeps the session in memory only; failures are logged and
//! otherwise ignored so sign-in never fails because of persistence.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;

/// Slot holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "user";
/// Slot holding the raw session token.
pub const TOKEN_KEY: &str = "token";

/// Raw contents of both slots, verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub user: Option<String>,
    pub token: Option<String>,
}

/// Read/write access to the persisted session record.
pub trait SessionStore {
    /// Serialize `user` and write both slots.
    fn save(&self, user: &User, token: &str);
    /// Return the current slot contents, `None` for slots never written.
    fn load(&self) -> StoredSession;
    /// Remove both slots.
    fn clear(&self);
}

/// Session record backed by `window.localStorage`.
///
/// Outside the browser build every operation is a no-op and `load` reports
/// empty slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn save(&self, user: &User, token: &str) {
        let Ok(raw) = serde_json::to_string(user) else {
            log::warn!("session: could not serialize user; not persisted");
            return;
        };
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("session: localStorage unavailable; session kept in memory only");
                return;
            };
            if !write_pair(&storage, &raw, token) {
                log::warn!("session: localStorage write failed; both slots cleared");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (raw, token);
        }
    }

    fn load(&self) -> StoredSession {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return StoredSession::default();
            };
            StoredSession {
                user: storage.get_item(USER_KEY).ok().flatten(),
                token: storage.get_item(TOKEN_KEY).ok().flatten(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            StoredSession::default()
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(USER_KEY);
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw key/value access underneath a store.
trait Slots {
    /// Write one slot; `false` when the backend refused.
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

#[cfg(feature = "csr")]
impl Slots for web_sys::Storage {
    fn set(&self, key: &str, value: &str) -> bool {
        self.set_item(key, value).is_ok()
    }

    fn remove(&self, key: &str) {
        let _ = self.remove_item(key);
    }
}

/// Write both slots or neither. A refused write removes both, so `user`
/// and `token` never describe different sessions.
fn write_pair(slots: &impl Slots, user_raw: &str, token: &str) -> bool {
    if slots.set(USER_KEY, user_raw) && slots.set(TOKEN_KEY, token) {
        return true;
    }
    slots.remove(USER_KEY);
    slots.remove(TOKEN_KEY);
    false
}

/// In-process session record. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a slot verbatim, bypassing serialization.
    pub fn set_raw(&self, key: &str, value: &str) {
        self.slots().insert(key.to_owned(), value.to_owned());
    }

    /// Read a slot verbatim.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Slots for MemoryStore {
    fn set(&self, key: &str, value: &str) -> bool {
        self.set_raw(key, value);
        true
    }

    fn remove(&self, key: &str) {
        self.slots().remove(key);
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, user: &User, token: &str) {
        let Ok(raw) = serde_json::to_string(user) else {
            log::warn!("session: could not serialize user; not persisted");
            return;
        };
        write_pair(self, &raw, token);
    }

    fn load(&self) -> StoredSession {
        let slots = self.slots();
        StoredSession { user: slots.get(USER_KEY).cloned(), token: slots.get(TOKEN_KEY).cloned() }
    }

    fn clear(&self) {
        let mut slots = self.slots();
        slots.remove(USER_KEY);
        slots.remove(TOKEN_KEY);
    }
}

use super::*;
use crate::net::users_api::mock_users;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), StoredSession::default());
    assert!(store.is_empty());
}

#[test]
fn save_writes_both_slots() {
    let store = MemoryStore::new();
    let user = mock_users().remove(0);
    store.save(&user, "mock-jwt-token");

    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("mock-jwt-token"));
    let parsed: User = serde_json::from_str(stored.user.as_deref().unwrap()).unwrap();
    assert_eq!(parsed, user);
}

#[test]
fn save_overwrites_previous_record() {
    let store = MemoryStore::new();
    let mut users = mock_users();
    store.save(&users[0], "first");
    store.save(&users[1], "second");

    assert_eq!(store.get_raw(TOKEN_KEY).as_deref(), Some("second"));
    let parsed = User::from_persisted(&store.get_raw(USER_KEY).unwrap()).unwrap();
    assert_eq!(parsed, users.remove(1));
}

#[test]
fn load_returns_slots_verbatim() {
    let store = MemoryStore::new();
    store.set_raw(USER_KEY, "{not json");
    let stored = store.load();
    assert_eq!(stored.user.as_deref(), Some("{not json"));
    assert_eq!(stored.token, None);
}

#[test]
fn clear_removes_both_slots() {
    let store = MemoryStore::new();
    store.save(&mock_users()[0], "t");
    store.set_raw("theme", "dark");
    store.clear();

    assert_eq!(store.load(), StoredSession::default());
    assert_eq!(store.get_raw("theme").as_deref(), Some("dark"));
}

#[test]
fn clones_share_slots() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.save(&mock_users()[0], "t");
    assert_eq!(other.load().token.as_deref(), Some("t"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserStore;
    store.save(&mock_users()[0], "t");
    assert_eq!(store.load(), StoredSession::default());
    store.clear();
}

/// Slot backend that refuses writes to one key.
struct RefusingSlots {
    refuse: &'static str,
    inner: MemoryStore,
}

impl Slots for RefusingSlots {
    fn set(&self, key: &str, value: &str) -> bool {
        if key == self.refuse {
            return false;
        }
        self.inner.set_raw(key, value);
        true
    }

    fn remove(&self, key: &str) {
        Slots::remove(&self.inner, key);
    }
}

#[test]
fn refused_token_write_removes_user_slot_too() {
    let inner = MemoryStore::new();
    inner.set_raw(TOKEN_KEY, "stale-token");
    let slots = RefusingSlots { refuse: TOKEN_KEY, inner: inner.clone() };

    assert!(!write_pair(&slots, "{\"id\":\"1\"}", "fresh-token"));
    assert_eq!(inner.get_raw(USER_KEY), None);
    assert_eq!(inner.get_raw(TOKEN_KEY), None);
}

#[test]
fn refused_user_write_leaves_no_stale_token() {
    let inner = MemoryStore::new();
    inner.set_raw(USER_KEY, "{\"id\":\"old\"}");
    inner.set_raw(TOKEN_KEY, "old-token");
    let slots = RefusingSlots { refuse: USER_KEY, inner: inner.clone() };

    assert!(!write_pair(&slots, "{\"id\":\"1\"}", "fresh-token"));
    assert!(inner.is_empty());
}

#[test]
fn accepted_writes_fill_both_slots() {
    let inner = MemoryStore::new();
    assert!(write_pair(&inner, "{\"id\":\"1\"}", "fresh-token"));
    assert_eq!(inner.get_raw(USER_KEY).as_deref(), Some("{\"id\":\"1\"}"));
    assert_eq!(inner.get_raw(TOKEN_KEY).as_deref(), Some("fresh-token"));
}

//! Startup restore of a persisted session.
//!
//! Runs once, before the router makes its first navigation decision. A
//! record that cannot be parsed is wiped and the app starts anonymous; the
//! user never sees an error for it.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::session_store::SessionStore;

/// What startup restore did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A valid record was found and installed.
    Restored,
    /// One or both slots were absent; nothing changed.
    NothingStored,
    /// The record was corrupt and has been cleared.
    Discarded,
}

/// Hydrate `auth` from `store`.
pub fn restore_session(auth: &mut AuthState, store: &dyn SessionStore) -> RestoreOutcome {
    let stored = store.load();
    let (Some(user_raw), Some(token)) = (stored.user, stored.token) else {
        log::debug!("bootstrap: no persisted session");
        return RestoreOutcome::NothingStored;
    };
    if user_raw.is_empty() || token.is_empty() {
        log::debug!("bootstrap: persisted session incomplete");
        return RestoreOutcome::NothingStored;
    }

    match User::from_persisted(&user_raw) {
        Ok(user) => {
            auth.set_credentials(store, user, token);
            log::debug!("bootstrap: session restored");
            RestoreOutcome::Restored
        }
        Err(e) => {
            log::warn!("bootstrap: {e}; clearing");
            store.clear();
            RestoreOutcome::Discarded
        }
    }
}

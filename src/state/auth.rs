//! Session state container for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `RwSignal<AuthState>` and hands it to route
//! guards, forms, and the protected layout through context. All writes go
//! through the transition methods below; fields are private so the
//! authenticated flag can never disagree with the stored user and token.
//!
//! DESIGN
//! ======
//! ```text
//! Anonymous --begin--> Pending --settle(Ok)--> Authenticated --logout--> Anonymous
//!                      Pending --settle(Err)-> Failed --begin--> Pending
//! Anonymous --set_credentials (restore)--> Authenticated
//! ```
//! Every attempt gets an [`AttemptId`]. Settling an attempt that was
//! abandoned or superseded is a no-op, so a result arriving after the user
//! left the form cannot mutate the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::AuthError;
use crate::net::types::{AuthGrant, User};
use crate::util::session_store::SessionStore;

/// Coarse lifecycle position of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Pending,
    Authenticated,
    Failed,
}

/// Which form started an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptKind {
    Login,
    Register,
}

/// Handle for one outstanding sign-in or sign-up attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptId {
    seq: u64,
    kind: AttemptKind,
}

impl AttemptId {
    pub fn kind(self) -> AttemptKind {
        self.kind
    }
}

/// Read-only view of the session as presented to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Authentication state: current user, token, loading flag, and last error.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    user: Option<User>,
    token: Option<String>,
    is_loading: bool,
    error: Option<String>,
    pending: Option<AttemptId>,
    attempts: u64,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True iff both a user and a non-empty token are held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// True while an attempt is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Inline error from the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_attempt(&self) -> Option<AttemptId> {
        self.pending
    }

    pub fn phase(&self) -> AuthPhase {
        if self.is_loading {
            AuthPhase::Pending
        } else if self.is_authenticated() {
            AuthPhase::Authenticated
        } else if self.error.is_some() {
            AuthPhase::Failed
        } else {
            AuthPhase::Anonymous
        }
    }

    pub fn session(&self) -> Session {
        Session {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading,
            error: self.error.clone(),
        }
    }

    /// Start a sign-in or sign-up attempt and clear any previous error.
    ///
    /// Returns `None` while another attempt is outstanding or when a session
    /// is already authenticated.
    pub fn begin(&mut self, kind: AttemptKind) -> Option<AttemptId> {
        if self.is_loading {
            log::debug!("auth: {kind:?} ignored, attempt already in flight");
            return None;
        }
        if self.is_authenticated() {
            log::debug!("auth: {kind:?} ignored, already authenticated");
            return None;
        }
        self.attempts += 1;
        let attempt = AttemptId { seq: self.attempts, kind };
        self.pending = Some(attempt);
        self.is_loading = true;
        self.error = None;
        self.user = None;
        self.token = None;
        log::debug!("auth: {kind:?} attempt {} pending", attempt.seq);
        Some(attempt)
    }

    /// Apply the service result for `attempt`.
    ///
    /// Returns `false` (and changes nothing) when `attempt` is no longer the
    /// outstanding one.
    pub fn settle(&mut self, store: &dyn SessionStore, attempt: AttemptId, result: Result<AuthGrant, AuthError>) -> bool {
        if self.pending != Some(attempt) {
            log::debug!("auth: discarding stale result for attempt {}", attempt.seq);
            return false;
        }
        self.pending = None;
        self.is_loading = false;
        match result {
            Ok(AuthGrant { user, token }) => {
                log::info!("auth: {:?} succeeded", attempt.kind);
                self.set_credentials(store, user, token);
            }
            Err(e) => {
                log::info!("auth: {:?} failed", attempt.kind);
                self.user = None;
                self.token = None;
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Drop the outstanding attempt, if any, so its result will be ignored.
    pub fn abandon(&mut self) {
        if let Some(attempt) = self.pending.take() {
            log::debug!("auth: abandoned attempt {}", attempt.seq);
            self.is_loading = false;
        }
    }

    /// Install `user` and `token` as the active session and persist them.
    ///
    /// Any outstanding attempt is superseded.
    pub fn set_credentials(&mut self, store: &dyn SessionStore, user: User, token: String) {
        store.save(&user, &token);
        self.pending = None;
        self.is_loading = false;
        self.error = None;
        self.user = Some(user);
        self.token = Some(token);
    }

    /// End the session and clear the persisted record.
    pub fn logout(&mut self, store: &dyn SessionStore) {
        store.clear();
        self.pending = None;
        self.is_loading = false;
        self.error = None;
        self.user = None;
        self.token = None;
        log::info!("auth: logged out");
    }
}

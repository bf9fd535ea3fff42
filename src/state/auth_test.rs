use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::net::auth_api::{LOGIN_FAILED_MESSAGE, MOCK_TOKEN, MockAuthService};
use crate::net::types::LoginCredentials;
use crate::net::users_api::mock_users;
use crate::util::session_store::{MemoryStore, StoredSession, TOKEN_KEY};

// =============================================================
// Helpers
// =============================================================

fn creds(email: &str, remember_me: bool) -> LoginCredentials {
    LoginCredentials { email: email.to_owned(), password: "secret123".to_owned(), remember_me }
}

fn assert_consistent(state: &AuthState) {
    let holds_both = state.user().is_some() && state.token().is_some_and(|t| !t.is_empty());
    assert_eq!(state.is_authenticated(), holds_both);
    assert_eq!(state.session().is_authenticated, holds_both);
}

fn login(state: &mut AuthState, store: &MemoryStore, service: &MockAuthService, creds: &LoginCredentials) {
    let attempt = state.begin(AttemptKind::Login).unwrap();
    assert_eq!(state.phase(), AuthPhase::Pending);
    assert_consistent(state);
    let result = block_on(service.login(creds));
    assert!(state.settle(store, attempt, result));
    assert_consistent(state);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_anonymous() {
    let state = AuthState::default();
    assert_eq!(state.phase(), AuthPhase::Anonymous);
    assert_eq!(state.session(), Session::default());
    assert_consistent(&state);
}

// =============================================================
// Login / register
// =============================================================

#[test]
fn successful_login_authenticates_and_persists() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    login(&mut state, &store, &MockAuthService::new(Duration::ZERO), &creds("a@b.com", false));

    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert!(!state.is_loading());
    assert_eq!(state.user().unwrap().email, "a@b.com");
    assert_eq!(state.error(), None);
    assert_eq!(store.get_raw(TOKEN_KEY).as_deref(), Some(MOCK_TOKEN));
}

#[test]
fn failed_login_sets_error_and_clears_identity() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    login(&mut state, &store, &MockAuthService::rejecting(Duration::ZERO), &creds("a@b.com", false));

    assert_eq!(state.phase(), AuthPhase::Failed);
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.error(), Some(LOGIN_FAILED_MESSAGE));
    assert_eq!(store.load(), StoredSession::default());
}

#[test]
fn settlement_yields_exactly_one_of_authenticated_or_failed() {
    for service in [MockAuthService::new(Duration::ZERO), MockAuthService::rejecting(Duration::ZERO)] {
        let store = MemoryStore::new();
        let mut state = AuthState::default();
        login(&mut state, &store, &service, &creds("x@y.io", true));
        let authenticated = state.phase() == AuthPhase::Authenticated;
        let failed = state.phase() == AuthPhase::Failed;
        assert!(authenticated ^ failed);
        assert!(!state.is_loading());
    }
}

#[test]
fn retry_after_failure_clears_error() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    login(&mut state, &store, &MockAuthService::rejecting(Duration::ZERO), &creds("a@b.com", false));

    let attempt = state.begin(AttemptKind::Login).unwrap();
    assert_eq!(state.error(), None);
    assert_eq!(state.phase(), AuthPhase::Pending);

    let result = block_on(MockAuthService::new(Duration::ZERO).login(&creds("a@b.com", false)));
    state.settle(&store, attempt, result);
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

#[test]
fn begin_is_refused_while_pending() {
    let mut state = AuthState::default();
    assert!(state.begin(AttemptKind::Login).is_some());
    assert!(state.begin(AttemptKind::Register).is_none());
    assert!(state.is_loading());
}

#[test]
fn begin_is_refused_when_authenticated() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.set_credentials(&store, mock_users().remove(0), "t".to_owned());
    assert!(state.begin(AttemptKind::Login).is_none());
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

#[test]
fn register_path_uses_same_transitions() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    let attempt = state.begin(AttemptKind::Register).unwrap();
    assert_eq!(attempt.kind(), AttemptKind::Register);

    let creds = crate::net::types::RegisterCredentials {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Secret1!x".to_owned(),
    };
    let result = block_on(MockAuthService::new(Duration::ZERO).register(&creds));
    assert!(state.settle(&store, attempt, result));
    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.user().unwrap().full_name(), "Ada Lovelace");
}

// =============================================================
// Stale attempts
// =============================================================

#[test]
fn abandoned_attempt_result_is_discarded() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    let attempt = state.begin(AttemptKind::Login).unwrap();
    state.abandon();
    assert_eq!(state.phase(), AuthPhase::Anonymous);

    let result = block_on(MockAuthService::new(Duration::ZERO).login(&creds("a@b.com", false)));
    assert!(!state.settle(&store, attempt, result));
    assert_eq!(state.phase(), AuthPhase::Anonymous);
    assert!(store.is_empty());
}

#[test]
fn superseded_attempt_result_is_discarded() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    let first = state.begin(AttemptKind::Login).unwrap();
    state.abandon();
    let second = state.begin(AttemptKind::Login).unwrap();
    assert_ne!(first, second);

    let stale = Err(AuthError::CredentialRejected("late".to_owned()));
    assert!(!state.settle(&store, first, stale));
    assert_eq!(state.phase(), AuthPhase::Pending);
    assert_eq!(state.pending_attempt(), Some(second));
}

#[test]
fn abandon_without_pending_is_noop() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.set_credentials(&store, mock_users().remove(0), "t".to_owned());
    state.abandon();
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

// =============================================================
// set_credentials / logout
// =============================================================

#[test]
fn set_credentials_authenticates_and_persists() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    let user = mock_users().remove(1);
    state.set_credentials(&store, user.clone(), "tok".to_owned());

    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.user(), Some(&user));
    assert_eq!(store.get_raw(TOKEN_KEY).as_deref(), Some("tok"));
    assert_consistent(&state);
}

#[test]
fn set_credentials_with_empty_token_is_not_authenticated() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.set_credentials(&store, mock_users().remove(0), String::new());
    assert!(!state.is_authenticated());
    assert_consistent(&state);
}

#[test]
fn set_credentials_supersedes_pending_attempt() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    let attempt = state.begin(AttemptKind::Login).unwrap();
    state.set_credentials(&store, mock_users().remove(0), "t".to_owned());
    assert!(!state.is_loading());
    assert!(!state.settle(&store, attempt, Err(AuthError::CredentialRejected("x".to_owned()))));
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

#[test]
fn logout_returns_to_anonymous_and_clears_store_regardless_of_remember_me() {
    for remember_me in [false, true] {
        let store = MemoryStore::new();
        let mut state = AuthState::default();
        login(&mut state, &store, &MockAuthService::new(Duration::ZERO), &creds("a@b.com", remember_me));
        assert_eq!(state.phase(), AuthPhase::Authenticated);

        state.logout(&store);
        assert_eq!(state.phase(), AuthPhase::Anonymous);
        assert_eq!(state.session(), Session::default());
        assert_eq!(store.load(), StoredSession::default());
        assert_consistent(&state);
    }
}

#[test]
fn logout_discards_in_flight_attempt() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    let attempt = state.begin(AttemptKind::Login).unwrap();
    state.logout(&store);
    let result = block_on(MockAuthService::new(Duration::ZERO).login(&creds("a@b.com", false)));
    assert!(!state.settle(&store, attempt, result));
    assert_eq!(state.phase(), AuthPhase::Anonymous);
}

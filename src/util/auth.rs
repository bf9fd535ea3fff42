//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and register pages submit through these helpers so both forms
//! follow the same begin -> service -> settle path on the session container,
//! and both discard a late result if the visitor navigates away first.
//!
//! In the browser the service call is spawned on the local executor; other
//! builds drive it to completion in place, since the mocked latency is
//! immediate there.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::auth_api::MockAuthService;
use crate::net::types::{LoginCredentials, RegisterCredentials};
use crate::state::auth::{AttemptId, AttemptKind, AuthState};
use crate::util::session_store::SessionStore;

/// Start a sign-in attempt. Returns `None` while another attempt is
/// outstanding or a session already exists.
pub fn submit_login<S>(
    auth: RwSignal<AuthState>,
    store: S,
    service: MockAuthService,
    credentials: LoginCredentials,
) -> Option<AttemptId>
where
    S: SessionStore + 'static,
{
    let attempt = auth.try_update(|a| a.begin(AttemptKind::Login)).flatten()?;
    log::debug!("auth: login submitted (remember_me={})", credentials.remember_me);
    dispatch(complete_login(auth, store, service, attempt, credentials));
    Some(attempt)
}

/// Start a sign-up attempt. Returns `None` while another attempt is
/// outstanding or a session already exists.
pub fn submit_register<S>(
    auth: RwSignal<AuthState>,
    store: S,
    service: MockAuthService,
    credentials: RegisterCredentials,
) -> Option<AttemptId>
where
    S: SessionStore + 'static,
{
    let attempt = auth.try_update(|a| a.begin(AttemptKind::Register)).flatten()?;
    dispatch(complete_register(auth, store, service, attempt, credentials));
    Some(attempt)
}

/// Call the sign-in service and settle `attempt` with its result.
///
/// Returns whether the result was applied; `false` when the attempt was
/// abandoned or superseded meanwhile.
pub async fn complete_login<S: SessionStore>(
    auth: RwSignal<AuthState>,
    store: S,
    service: MockAuthService,
    attempt: AttemptId,
    credentials: LoginCredentials,
) -> bool {
    let result = service.login(&credentials).await;
    auth.try_update(|a| a.settle(&store, attempt, result)).unwrap_or(false)
}

/// Call the sign-up service and settle `attempt` with its result.
pub async fn complete_register<S: SessionStore>(
    auth: RwSignal<AuthState>,
    store: S,
    service: MockAuthService,
    attempt: AttemptId,
    credentials: RegisterCredentials,
) -> bool {
    let result = service.register(&credentials).await;
    auth.try_update(|a| a.settle(&store, attempt, result)).unwrap_or(false)
}

fn dispatch(task: impl Future<Output = bool> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        task.await;
    });
    #[cfg(not(feature = "csr"))]
    {
        futures::executor::block_on(task);
    }
}

/// Abandon any outstanding attempt when the calling owner is cleaned up.
pub fn install_abandon_on_leave(auth: RwSignal<AuthState>) {
    on_cleanup(move || {
        auth.try_update(AuthState::abandon);
    });
}

/// End the session and wipe the persisted record.
pub fn logout<S: SessionStore>(auth: RwSignal<AuthState>, store: &S) {
    auth.update(|a| a.logout(store));
}

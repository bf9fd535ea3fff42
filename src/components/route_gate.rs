//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page renders inside [`RouteGate`], which re-evaluates
//! `route_guard` whenever the session changes. Logging out on a protected
//! page or finishing a sign-in on `/login` therefore redirects immediately.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, RouteDecision, route_guard};
use crate::state::auth::AuthState;

/// Render `children` only when the guard allows `route`; otherwise redirect.
#[component]
pub fn RouteGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    // Children re-mount only when the decision changes.
    let decision = Memo::new(move |_| route_guard(route.path(), auth.with(AuthState::is_authenticated)));

    move || match decision.get() {
        RouteDecision::Render(_) => children().into_any(),
        RouteDecision::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
    }
}

/// Router fallback: sends unknown paths to `/dashboard`, `/login`, or `/`.
#[component]
pub fn UnknownRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = Memo::new(move |_| route_guard(&location.pathname.get(), auth.with(AuthState::is_authenticated)));

    move || match decision.get() {
        RouteDecision::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        RouteDecision::Render(_) => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    }
}

//! Shell for the authenticated area: sidebar navigation, top bar, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::theme::{ThemeMode, ThemeState};
use crate::util::session_store::BrowserStore;

/// Protected page chrome wrapping the page body.
#[component]
pub fn ProtectedLayout(title: &'static str, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let store = expect_context::<BrowserStore>();
    let location = use_location();

    let display_name = move || auth.with(|a| a.user().map(|u| u.full_name()).unwrap_or_default());
    let initials = move || auth.with(|a| a.user().map(|u| u.initials()).unwrap_or_default());
    let role = move || auth.with(|a| a.user().map(|u| u.role.label()).unwrap_or_default());

    let on_toggle_theme = move |_| {
        let next = theme.try_update(ThemeState::toggle).unwrap_or_default();
        crate::util::dark_mode::store(next);
    };

    let on_logout = move |_| crate::util::auth::logout(auth, &store);

    let nav = AppRoute::PROTECTED
        .into_iter()
        .map(|route| {
            let active = move || location.pathname.get() == route.path();
            view! {
                <a href=route.path() class="sidebar__link" class:sidebar__link--active=active>
                    {route.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <a href="/" class="sidebar__brand">"SaaS Dashboard"</a>
                <nav class="sidebar__nav">{nav}</nav>
            </aside>
            <div class="app-shell__main">
                <header class="topbar">
                    <h1 class="topbar__title">{title}</h1>
                    <span class="topbar__spacer"></span>
                    <button class="btn topbar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                        {move || if theme.get().mode == ThemeMode::Dark { "☀" } else { "☾" }}
                    </button>
                    <span class="topbar__avatar">{initials}</span>
                    <span class="topbar__user">
                        {display_name}
                        " ("
                        <span class="topbar__role">{role}</span>
                        ")"
                    </span>
                    <button class="btn topbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}

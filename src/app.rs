//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::bootstrap::restore_session;
use crate::components::route_gate::UnknownRoute;
use crate::config::AppConfig;
use crate::net::auth_api::MockAuthService;
use crate::net::users_api::UserDirectory;
use crate::pages::{
    analytics::AnalyticsPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage, public::InfoPage,
    register::RegisterPage, settings::SettingsPage, users::UsersPage,
};
use crate::routes::AppRoute;
use crate::state::{auth::AuthState, theme::ThemeState, users::UsersState};
use crate::util::dark_mode;
use crate::util::session_store::BrowserStore;

/// Root application component.
///
/// Restores any persisted session before the router runs, so the first guard
/// decision already sees it, then provides shared state to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let store = BrowserStore;

    let mut initial = AuthState::default();
    let outcome = restore_session(&mut initial, &store);
    log::debug!("app: startup restore {outcome:?}");

    let theme_mode = dark_mode::read_preference();
    dark_mode::apply(theme_mode);

    provide_context(RwSignal::new(initial));
    provide_context(store);
    provide_context(MockAuthService::from_config(&config));
    provide_context(UserDirectory::new(config.directory_latency));
    provide_context(RwSignal::new(ThemeState { mode: theme_mode }));
    provide_context(RwSignal::new(UsersState::default()));
    provide_context(config);

    view! {
        <Title text="SaaS Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <UnknownRoute/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("about") view=|| view! { <InfoPage route=AppRoute::About/> }/>
                <Route path=StaticSegment("careers") view=|| view! { <InfoPage route=AppRoute::Careers/> }/>
                <Route path=StaticSegment("blog") view=|| view! { <InfoPage route=AppRoute::Blog/> }/>
                <Route path=StaticSegment("press") view=|| view! { <InfoPage route=AppRoute::Press/> }/>
                <Route path=StaticSegment("contact") view=|| view! { <InfoPage route=AppRoute::Contact/> }/>
                <Route path=StaticSegment("integrations") view=|| view! { <InfoPage route=AppRoute::Integrations/> }/>
                <Route path=StaticSegment("documentation") view=|| view! { <InfoPage route=AppRoute::Documentation/> }/>
                <Route path=StaticSegment("release-notes") view=|| view! { <InfoPage route=AppRoute::ReleaseNotes/> }/>
                <Route path=StaticSegment("pricing") view=|| view! { <InfoPage route=AppRoute::Pricing/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}

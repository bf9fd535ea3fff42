//! Route table and the authentication guard evaluated on every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGate` (protected pages, auth forms) and the router fallback call
//! [`route_guard`] with the current path and the session's authenticated
//! flag, then either render or redirect. The guard holds no state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HOME_PATH: &str = "/";

/// Every page the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    About,
    Careers,
    Blog,
    Press,
    Contact,
    Integrations,
    Documentation,
    ReleaseNotes,
    Pricing,
    Login,
    Register,
    Dashboard,
    Analytics,
    Users,
    Settings,
}

impl AppRoute {
    pub const PROTECTED: [AppRoute; 4] = [Self::Dashboard, Self::Analytics, Self::Users, Self::Settings];

    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => HOME_PATH,
            Self::About => "/about",
            Self::Careers => "/careers",
            Self::Blog => "/blog",
            Self::Press => "/press",
            Self::Contact => "/contact",
            Self::Integrations => "/integrations",
            Self::Documentation => "/documentation",
            Self::ReleaseNotes => "/release-notes",
            Self::Pricing => "/pricing",
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::Analytics => "/analytics",
            Self::Users => "/users",
            Self::Settings => "/settings",
        }
    }

    /// Navigation label for the protected sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::About => "About",
            Self::Careers => "Careers",
            Self::Blog => "Blog",
            Self::Press => "Press",
            Self::Contact => "Contact",
            Self::Integrations => "Integrations",
            Self::Documentation => "Documentation",
            Self::ReleaseNotes => "Release Notes",
            Self::Pricing => "Pricing",
            Self::Login => "Sign in",
            Self::Register => "Sign up",
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
            Self::Users => "Users",
            Self::Settings => "Settings",
        }
    }

    pub fn requires_auth(self) -> bool {
        Self::PROTECTED.contains(&self)
    }

    /// Login and register: only meaningful for anonymous visitors.
    pub fn is_auth_form(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Match an exact path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        ALL_ROUTES.iter().copied().find(|route| route.path() == path)
    }
}

pub const ALL_ROUTES: [AppRoute; 16] = [
    AppRoute::Landing,
    AppRoute::About,
    AppRoute::Careers,
    AppRoute::Blog,
    AppRoute::Press,
    AppRoute::Contact,
    AppRoute::Integrations,
    AppRoute::Documentation,
    AppRoute::ReleaseNotes,
    AppRoute::Pricing,
    AppRoute::Login,
    AppRoute::Register,
    AppRoute::Dashboard,
    AppRoute::Analytics,
    AppRoute::Users,
    AppRoute::Settings,
];

/// Outcome of guarding a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(&'static str),
}

/// Decide whether `path` renders or redirects for the given session.
///
/// - Protected pages (and any path beneath them) redirect anonymous
///   visitors to `/login`.
/// - `/login` and `/register` redirect authenticated users to `/dashboard`.
/// - Unknown paths beneath a protected page redirect to `/dashboard`.
/// - Any other unknown path redirects to `/`.
pub fn route_guard(path: &str, is_authenticated: bool) -> RouteDecision {
    if let Some(route) = AppRoute::from_path(path) {
        if route.requires_auth() && !is_authenticated {
            return RouteDecision::Redirect(LOGIN_PATH);
        }
        if route.is_auth_form() && is_authenticated {
            return RouteDecision::Redirect(DASHBOARD_PATH);
        }
        return RouteDecision::Render(route);
    }

    if is_protected_subpath(path) {
        if is_authenticated {
            RouteDecision::Redirect(DASHBOARD_PATH)
        } else {
            RouteDecision::Redirect(LOGIN_PATH)
        }
    } else {
        RouteDecision::Redirect(HOME_PATH)
    }
}

fn is_protected_subpath(path: &str) -> bool {
    let path = normalize(path);
    AppRoute::PROTECTED.iter().any(|route| {
        path.strip_prefix(route.path())
            .is_some_and(|rest| rest.starts_with('/'))
    })
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    }
}

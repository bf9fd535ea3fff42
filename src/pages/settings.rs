//! Settings page: tabbed profile, account, appearance, notification, and
//! billing panels. Only the appearance tab has live behaviour (theme).

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::components::route_gate::RouteGate;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::theme::{ThemeMode, ThemeState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Account,
    Appearance,
    Notifications,
    Billing,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [Self::Profile, Self::Account, Self::Appearance, Self::Notifications, Self::Billing];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Account => "Account",
            Self::Appearance => "Appearance",
            Self::Notifications => "Notifications",
            Self::Billing => "Billing",
        }
    }
}

/// Email notification toggle with its initial checked state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default_on: bool,
}

pub fn email_notifications() -> [NotificationOption; 4] {
    [
        NotificationOption {
            id: "comments",
            label: "Comments",
            description: "Receive emails when someone comments on your posts",
            default_on: true,
        },
        NotificationOption {
            id: "mentions",
            label: "Mentions",
            description: "Receive emails when you are mentioned",
            default_on: true,
        },
        NotificationOption {
            id: "updates",
            label: "Product Updates",
            description: "Receive emails about product updates and features",
            default_on: true,
        },
        NotificationOption {
            id: "marketing",
            label: "Marketing",
            description: "Receive emails about promotions and surveys",
            default_on: false,
        },
    ]
}

/// `/settings`
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Settings>
            <ProtectedLayout title="Settings">
                <SettingsBody/>
            </ProtectedLayout>
        </RouteGate>
    }
}

#[component]
fn SettingsBody() -> impl IntoView {
    let active = RwSignal::new(SettingsTab::default());

    let tabs = SettingsTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="settings__tab"
                    class:settings__tab--active=move || active.get() == tab
                    on:click=move |_| active.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <p class="page-intro">"Manage your account settings and preferences"</p>
        <div class="settings">
            <nav class="settings__tabs">{tabs}</nav>
            <div class="settings__panel">
                {move || match active.get() {
                    SettingsTab::Profile => view! { <ProfilePanel/> }.into_any(),
                    SettingsTab::Account => view! { <AccountPanel/> }.into_any(),
                    SettingsTab::Appearance => view! { <AppearancePanel/> }.into_any(),
                    SettingsTab::Notifications => view! { <NotificationsPanel/> }.into_any(),
                    SettingsTab::Billing => view! { <BillingPanel/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = auth.with_untracked(|a| a.user().cloned());
    let (first, last, email) = user
        .as_ref()
        .map(|u| (u.first_name.clone(), u.last_name.clone(), u.email.clone()))
        .unwrap_or_default();
    let initials = user.as_ref().map(|u| u.initials()).unwrap_or_default();
    let avatar = user.as_ref().and_then(|u| u.avatar.clone());
    let alt = user.as_ref().map(|u| u.full_name()).unwrap_or_default();

    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">"Profile Information"</h2>
            <p class="chart-card__subtitle">"Update your profile information and picture"</p>
            <div class="profile__photo">
                {match avatar {
                    Some(src) => view! { <img class="profile__avatar" src=src alt=alt/> }.into_any(),
                    None => view! { <span class="profile__avatar profile__avatar--initials">{initials}</span> }.into_any(),
                }}
            </div>
            <div class="auth-form__grid">
                <label class="auth-form__label">"First Name" <input class="auth-input" value=first/></label>
                <label class="auth-form__label">"Last Name" <input class="auth-input" value=last/></label>
            </div>
            <label class="auth-form__label">"Email Address" <input class="auth-input" type="email" value=email/></label>
            <label class="auth-form__label">
                "Bio"
                <textarea class="auth-input" rows="4" placeholder="Write a few sentences about yourself"></textarea>
            </label>
            <button class="btn btn--primary">"Save Changes"</button>
        </section>
    }
}

#[component]
fn AccountPanel() -> impl IntoView {
    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">"Password"</h2>
            <p class="chart-card__subtitle">"Update your password"</p>
            <label class="auth-form__label">"Current Password" <input class="auth-input" type="password"/></label>
            <label class="auth-form__label">"New Password" <input class="auth-input" type="password"/></label>
            <label class="auth-form__label">"Confirm Password" <input class="auth-input" type="password"/></label>
            <button class="btn btn--primary">"Update Password"</button>
        </section>
        <section class="chart-card">
            <h2 class="chart-card__title">"Two-Factor Authentication"</h2>
            <p class="chart-card__subtitle">"Add additional security to your account"</p>
            <button class="btn">"Enable 2FA"</button>
        </section>
        <section class="chart-card">
            <h2 class="chart-card__title">"Delete Account"</h2>
            <p class="chart-card__subtitle">"Permanently delete your account"</p>
            <button class="btn btn--danger">"Delete Account"</button>
        </section>
    }
}

#[component]
fn AppearancePanel() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let choose = move |mode: ThemeMode| {
        theme.update(|t| t.set(mode));
        crate::util::dark_mode::store(mode);
    };

    let option = move |mode: ThemeMode, label: &'static str| {
        view! {
            <button
                class="theme-option"
                class:theme-option--active=move || theme.get().mode == mode
                on:click=move |_| choose(mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">"Appearance"</h2>
            <p class="chart-card__subtitle">"Customize the look and feel of the dashboard"</p>
            <div class="theme-options">
                {option(ThemeMode::Light, "Light")}
                {option(ThemeMode::Dark, "Dark")}
            </div>
        </section>
    }
}

#[component]
fn NotificationsPanel() -> impl IntoView {
    let options = email_notifications()
        .into_iter()
        .map(|n| {
            let id = format!("notification-{}", n.id);
            view! {
                <div class="notification-option">
                    <input id=id.clone() type="checkbox" checked=n.default_on/>
                    <label for=id>{n.label}</label>
                    <p class="notification-option__hint">{n.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">"Notification Settings"</h2>
            <p class="chart-card__subtitle">"Manage how you receive notifications"</p>
            <h3>"Email Notifications"</h3>
            {options}
            <h3>"Push Notifications"</h3>
            <label><input type="radio" name="push-notifications" checked=true/> "Enabled"</label>
            <label><input type="radio" name="push-notifications"/> "Disabled"</label>
            <button class="btn btn--primary">"Save Changes"</button>
        </section>
    }
}

#[component]
fn BillingPanel() -> impl IntoView {
    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">"Subscription Plan"</h2>
            <p class="chart-card__subtitle">"Manage your subscription plan"</p>
            <h3>"Pro Plan"</h3>
            <p>"$99/month, billed monthly"</p>
            <button class="btn">"Change Plan"</button>
        </section>
    }
}

//! Sign-in page: email + password against the mock auth service.

use leptos::prelude::*;

use crate::components::route_gate::RouteGate;
use crate::net::auth_api::MockAuthService;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::auth::{install_abandon_on_leave, submit_login};
use crate::util::session_store::BrowserStore;
use crate::util::validation::{LoginErrors, validate_login};

/// `/login`; redirects to the dashboard once a session exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Login>
            <LoginForm/>
        </RouteGate>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<BrowserStore>();
    let service = expect_context::<MockAuthService>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(LoginErrors::default());

    install_abandon_on_leave(auth);

    let busy = move || auth.with(AuthState::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_login(&email.get(), &password.get(), remember_me.get()) {
            Ok(credentials) => {
                errors.set(LoginErrors::default());
                submit_login(auth, store, service.clone(), credentials);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <span class="auth-card__brand">"SaaS Dashboard"</span>
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to access your dashboard"</p>

                <Show when=move || auth.with(|a| a.error().is_some())>
                    <div class="form-error">{move || auth.with(|a| a.error().unwrap_or_default().to_owned())}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().email.map(|m| view! { <p class="field-error">{m}</p> })}

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().password.map(|m| view! { <p class="field-error">{m}</p> })}

                    <div class="auth-form__row">
                        <label class="auth-form__check">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <a href="/forgot-password" class="auth-form__link">"Forgot your password?"</a>
                    </div>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

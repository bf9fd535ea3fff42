//! Sign-up page.

use leptos::prelude::*;

use crate::components::route_gate::RouteGate;
use crate::net::auth_api::MockAuthService;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::auth::{install_abandon_on_leave, submit_register};
use crate::util::session_store::BrowserStore;
use crate::util::validation::{RegisterErrors, RegisterForm, validate_register};

/// `/register`; redirects to the dashboard once a session exists.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Register>
            <RegisterFormView/>
        </RouteGate>
    }
}

#[component]
fn RegisterFormView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<BrowserStore>();
    let service = expect_context::<MockAuthService>();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());

    install_abandon_on_leave(auth);

    let busy = move || auth.with(AuthState::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match form.with(validate_register) {
            Ok(credentials) => {
                errors.set(RegisterErrors::default());
                submit_register(auth, store, service.clone(), credentials);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let field_error = move |pick: fn(&RegisterErrors) -> Option<&'static str>| {
        move || errors.with(pick).map(|m| view! { <p class="field-error">{m}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <span class="auth-card__brand">"SaaS Dashboard"</span>
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Start your 30-day free trial today"</p>

                <Show when=move || auth.with(|a| a.error().is_some())>
                    <div class="form-error">{move || auth.with(|a| a.error().unwrap_or_default().to_owned())}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__grid">
                        <label class="auth-form__label">
                            "First name"
                            <input
                                class="auth-input"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                            {field_error(|e| e.first_name)}
                        </label>
                        <label class="auth-form__label">
                            "Last name"
                            <input
                                class="auth-input"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                            {field_error(|e| e.last_name)}
                        </label>
                    </div>

                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-input"
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        {field_error(|e| e.email)}
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        {field_error(|e| e.password)}
                    </label>

                    <label class="auth-form__label">
                        "Confirm password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                        {field_error(|e| e.confirm_password)}
                    </label>

                    <label class="auth-form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        "I accept the "
                        <a href="/terms">"Terms of Service"</a>
                        " and "
                        <a href="/privacy">"Privacy Policy"</a>
                    </label>
                    {field_error(|e| e.terms)}

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

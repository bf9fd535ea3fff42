//! Users page: searchable, role-filtered directory with a detail panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The directory is loaded once per mount through [`UserDirectory`] and held
//! in the shared `UsersState`. Selecting a row fetches that account by id so
//! the detail panel reflects the directory rather than the list snapshot.

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::components::route_gate::RouteGate;
use crate::net::types::User;
use crate::net::users_api::UserDirectory;
use crate::routes::AppRoute;
use crate::state::users::{UsersState, parse_role_filter};

/// `/users`
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Users>
            <ProtectedLayout title="Users">
                <UsersBody/>
            </ProtectedLayout>
        </RouteGate>
    }
}

#[component]
fn UsersBody() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();
    let directory = expect_context::<UserDirectory>();

    let query = RwSignal::new(String::new());
    let role_raw = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        users.update(UsersState::begin_fetch);
        let directory = directory.clone();
        leptos::task::spawn_local(async move {
            let result = directory.fetch_users().await;
            users.try_update(|s| s.finish_fetch(result));
        });
    }

    let on_select = move |user_id: String| {
        #[cfg(feature = "csr")]
        {
            users.update(UsersState::begin_fetch);
            let directory = directory.clone();
            leptos::task::spawn_local(async move {
                let result = directory.fetch_user_by_id(&user_id).await;
                users.try_update(|s| s.finish_fetch_one(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&directory, user_id);
        }
    };

    let visible = move || users.with(|s| s.filtered(&query.get(), parse_role_filter(&role_raw.get())));

    view! {
        <p class="page-intro">"Manage your team members and their roles"</p>
        <div class="users__filters">
            <input
                class="auth-input"
                type="search"
                placeholder="Search by name or email"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select class="auth-input" on:change=move |ev| role_raw.set(event_target_value(&ev))>
                <option value="">"All roles"</option>
                <option value="admin">"Admin"</option>
                <option value="manager">"Manager"</option>
                <option value="user">"User"</option>
            </select>
        </div>

        <Show when=move || users.with(|s| s.error.is_some())>
            <div class="form-error">{move || users.with(|s| s.error.clone().unwrap_or_default())}</div>
        </Show>
        <Show when=move || users.with(|s| s.is_loading)>
            <p class="users__loading">"Loading users..."</p>
        </Show>

        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Joined"</th>
                </tr>
            </thead>
            <tbody>
                <For each=visible key=|user| user.id.clone() let:user>
                    <UserRow user=user on_select=on_select.clone()/>
                </For>
            </tbody>
        </table>

        {move || users.with(|s| s.selected.clone()).map(|user| view! { <UserDetail user=user/> })}
    }
}

#[component]
fn UserRow<F>(user: User, on_select: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let id = user.id.clone();
    view! {
        <tr class="data-table__row" on:click=move |_| on_select(id.clone())>
            <td class="data-table__primary">{user.full_name()}</td>
            <td>{user.email.clone()}</td>
            <td><span class="role-badge">{user.role.label()}</span></td>
            <td>{user.created_at.format("%b %-d, %Y").to_string()}</td>
        </tr>
    }
}

#[component]
fn UserDetail(user: User) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();
    view! {
        <section class="chart-card user-detail">
            <h2 class="chart-card__title">{user.full_name()}</h2>
            {user.avatar.clone().map(|src| view! { <img class="profile__avatar" src=src alt=user.full_name()/> })}
            <dl>
                <dt>"Email"</dt>
                <dd>{user.email.clone()}</dd>
                <dt>"Role"</dt>
                <dd>{user.role.label()}</dd>
                <dt>"Last updated"</dt>
                <dd>{user.updated_at.format("%b %-d, %Y %H:%M").to_string()}</dd>
            </dl>
            <button class="btn" on:click=move |_| users.update(UsersState::clear_selection)>"Close"</button>
        </section>
    }
}

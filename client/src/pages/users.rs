//! Users page: read-only table of accounts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::fetch_status::FetchStatus;
use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::net::api::users_request;
use crate::net::types::UserRecord;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::fetch_cell::use_resource;

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    install_unauth_redirect(auth, use_navigate());

    let users = use_resource::<Vec<UserRecord>>(users_request(&config));

    let rows = move || {
        users
            .with(|s| s.data.clone().unwrap_or_default())
            .into_iter()
            .map(|u| {
                view! {
                    <tr>
                        <td>{u.name}</td>
                        <td class="table__muted">{u.email}</td>
                        <td><span class="badge">{u.role}</span></td>
                        <td>{u.status}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Header title="Users"/>
            <main class="page__main">
                <FetchStatus state=users label="Loading users..."/>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </main>
        </div>
    }
}

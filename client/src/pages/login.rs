//! Login page: email + password against `POST /auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of the persisted session besides logout. On
//! success the issued token and role go to `SessionStore::store`, the
//! in-memory `AuthState` is refreshed, and the user lands on the first menu
//! entry for their role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::api::login;
use crate::net::transport::SharedTransport;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::navigation::home_path;
use crate::state::session::SessionStore;

const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    let sessions = expect_context::<SessionStore>();
    let transport = expect_context::<SharedTransport>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let config = config.clone();
        let sessions = sessions.clone();
        let transport = transport.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match login(transport.as_ref(), &config, &credentials).await {
                Ok(session) => {
                    sessions.store(&session);
                    auth.set(AuthState::from_session(&session));
                    info.set(String::new());
                    busy.set(false);
                    let role = session.role.unwrap_or_default();
                    log::info!("signed in as {role}");
                    navigate(home_path(&role), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    info.set(err.user_message());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Dashboard"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

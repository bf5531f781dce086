//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::navigation::LOGIN_PATH;

/// Whether a guarded route should bounce to the login page. Already being on
/// the login page (logout navigates there itself) is not a reason to redirect.
pub fn should_redirect_unauth(state: &AuthState, current_path: &str) -> bool {
    !state.loading && state.user.is_none() && current_path != LOGIN_PATH
}

/// Guard redirects replace the current history entry.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let unauthenticated = auth.with(|a| should_redirect_unauth(a, &location.pathname.get_untracked()));
        if unauthenticated {
            navigate(LOGIN_PATH, redirect_options());
        }
    });
}

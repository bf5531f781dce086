use super::*;
use crate::state::auth::CurrentUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state, "/users"));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state, "/users"));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(CurrentUser { role: "Admin".to_owned() }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state, "/"));
}

#[test]
fn logged_out_on_login_page_does_not_redirect_again() {
    let state = AuthState { user: None, loading: false };
    assert!(!should_redirect_unauth(&state, LOGIN_PATH));
}

#[test]
fn guard_redirect_replaces_history_entry() {
    assert!(redirect_options().replace);
}

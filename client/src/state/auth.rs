//! Signed-in user for the running app instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the sidebar. It mirrors the persisted session at
//! mount and is cleared by logout together with the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Role, Session};

/// In-memory reference to the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub role: String,
}

impl CurrentUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl AuthState {
    /// Derive the current user from a persisted session. A session without a
    /// token has no user, whatever its role says.
    pub fn from_session(session: &Session) -> Self {
        let user = session.token().map(|_| CurrentUser {
            role: session.role.clone().unwrap_or_default(),
        });
        Self { user, loading: false }
    }

    /// Role name for menu lookup, empty when signed out.
    pub fn role_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.role.as_str())
    }
}

//! Persisted session (token + role) and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in browser storage under the `token` and `role` keys. A
//! single `SessionStore` handle is provided through Leptos context; pages and
//! fetch cells only read it, and only the login and logout flows write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Roles the backend hands out. Storage holds the backend's own spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    MarketAnalyzer,
}

impl Role {
    /// Parse a stored role name. Unknown names have no role.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Admin" => Some(Self::Admin),
            "MARKETANALIZER" => Some(Self::MarketAnalyzer),
            _ => None,
        }
    }

    /// Name as stored in `localStorage` and sent by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::MarketAnalyzer => "MARKETANALIZER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the persisted session. Both fields are absent after logout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self { token: Some(token.into()), role: Some(role.into()) }
    }

    /// Token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Shared handle over the session's storage backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self { backend }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Read the current session.
    pub fn get(&self) -> Session {
        Session {
            token: self.backend.get_item(TOKEN_KEY),
            role: self.backend.get_item(ROLE_KEY),
        }
    }

    /// Persist a freshly issued session. Login is the only caller.
    pub fn store(&self, session: &Session) {
        match session.token.as_deref() {
            Some(token) => self.backend.set_item(TOKEN_KEY, token),
            None => self.backend.remove_item(TOKEN_KEY),
        }
        match session.role.as_deref() {
            Some(role) => self.backend.set_item(ROLE_KEY, role),
            None => self.backend.remove_item(ROLE_KEY),
        }
    }

    /// Remove both token and role. Redirecting is the caller's job.
    pub fn clear(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(ROLE_KEY);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

//! Role-scoped sidebar entries and the logout sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar reads the session role and renders `entries_for(role)`. Menus
//! are static tables; nothing mutates them at runtime.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::session::{Role, SessionStore};

pub const LOGIN_PATH: &str = "/login";

/// Icons available to sidebar rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    BarChart,
    Users,
    BookOpen,
    Bell,
    LogOut,
    Menu,
}

impl NavIcon {
    /// Text glyph standing in for the icon set.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::BarChart => "\u{1F4CA}",
            Self::Users => "\u{1F465}",
            Self::BookOpen => "\u{1F4D6}",
            Self::Bell => "\u{1F514}",
            Self::LogOut => "\u{23FB}",
            Self::Menu => "\u{2630}",
        }
    }
}

/// One row in the sidebar menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub icon: NavIcon,
    pub color: &'static str,
    pub path: &'static str,
}

const ADMIN_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry { label: "Dashboard", icon: NavIcon::BarChart, color: "#661166", path: "/" },
    NavigationEntry { label: "Users", icon: NavIcon::Users, color: "#EC4899", path: "/users" },
];

const MARKET_ANALYZER_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry { label: "News", icon: NavIcon::BookOpen, color: "#8B5CF6", path: "/news" },
    NavigationEntry { label: "Notification", icon: NavIcon::Bell, color: "#10B981", path: "/notifications" },
];

/// Color of the logout row.
pub const LOGOUT_COLOR: &str = "#F87171";

pub fn entries_for_role(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Admin => ADMIN_ENTRIES,
        Role::MarketAnalyzer => MARKET_ANALYZER_ENTRIES,
    }
}

/// Menu for a stored role name. Unknown or empty names get an empty menu.
pub fn entries_for(role: &str) -> &'static [NavigationEntry] {
    match Role::parse(role) {
        Some(role) => entries_for_role(role),
        None => &[],
    }
}

/// Where to land after sign-in: the role's first entry, else `/`.
pub fn home_path(role: &str) -> &'static str {
    entries_for(role).first().map_or("/", |entry| entry.path)
}

/// Clear the persisted session, drop the caller's current user, and redirect
/// to the login page. All three happen in this one call.
pub fn logout<C, F>(store: &SessionStore, clear_user: C, redirect: F)
where
    C: FnOnce(),
    F: FnOnce(&str),
{
    store.clear();
    clear_user();
    log::info!("session cleared, redirecting to {LOGIN_PATH}");
    redirect(LOGIN_PATH);
}

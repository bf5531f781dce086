//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, fetch cells, save
//! callbacks) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod news;
pub mod notifications;
pub mod users;

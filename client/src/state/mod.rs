//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `fetch`, `navigation`, `draft`, ...)
//! so components depend on small focused models. Everything here is plain
//! data; Leptos signals wrap it at the component layer.

pub mod auth;
pub mod draft;
pub mod fetch;
pub mod navigation;
pub mod session;
pub mod ui;

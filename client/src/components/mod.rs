//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and modal surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod charts;
pub mod edit_notification_modal;
pub mod fetch_status;
pub mod header;
pub mod sidebar;
pub mod stat_card;

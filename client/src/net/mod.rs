//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` describes calls and formats the auth header, `transport` sends
//! them, `api` holds the call sites and response classification, `error` the
//! failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_transport;

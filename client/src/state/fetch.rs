//! Loading/success/error lifecycle for one asynchronous request.
//!
//! DESIGN
//! ======
//! `begin` issues a `RequestTag` naming the identifier the request was made for
//! plus a sequence number. `settle` applies an outcome only when its tag is the
//! current one, then clears the tag, so:
//! - a response for a superseded identifier is dropped,
//! - `is_loading` goes false exactly once per request,
//! - exactly one of `data`/`error` is set afterwards.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error::{FetchError, GENERIC_FAILURE_MESSAGE};

/// Identifies one in-flight request of a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTag {
    key: String,
    seq: u64,
}

impl RequestTag {
    /// Identifier the request was issued for.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Observable state of a fetch cell.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    current: Option<RequestTag>,
    seq: u64,
}

/// Borrowed view for rendering.
#[derive(Debug, PartialEq)]
pub enum FetchPhase<'a, T> {
    Loading,
    Ready(&'a T),
    Failed(&'a str),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    /// Mount state: loading, nothing resolved yet.
    pub fn new() -> Self {
        Self { data: None, is_loading: true, error: None, current: None, seq: 0 }
    }

    /// Start a request for `key`, discarding prior data/error and orphaning any
    /// request still in flight.
    pub fn begin(&mut self, key: impl Into<String>) -> RequestTag {
        self.seq += 1;
        let tag = RequestTag { key: key.into(), seq: self.seq };
        self.data = None;
        self.error = None;
        self.is_loading = true;
        self.current = Some(tag.clone());
        tag
    }

    /// Whether `tag` still belongs to the outstanding request.
    pub fn is_current(&self, tag: &RequestTag) -> bool {
        self.current.as_ref() == Some(tag)
    }

    /// Key of the outstanding request, if any.
    pub fn pending_key(&self) -> Option<&str> {
        self.current.as_ref().map(RequestTag::key)
    }

    /// Apply an outcome. Returns `false` (state untouched) for a stale or
    /// already-settled tag.
    pub fn settle(&mut self, tag: &RequestTag, outcome: Result<T, FetchError>) -> bool {
        if !self.is_current(tag) {
            return false;
        }
        self.current = None;
        match outcome {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err.user_message());
            }
        }
        self.is_loading = false;
        true
    }

    /// Begin and immediately succeed with a value already on hand.
    pub fn resolve(&mut self, key: impl Into<String>, value: T) {
        let tag = self.begin(key);
        self.settle(&tag, Ok(value));
    }

    pub fn phase(&self) -> FetchPhase<'_, T> {
        if self.is_loading {
            return FetchPhase::Loading;
        }
        match (&self.data, &self.error) {
            (Some(data), _) => FetchPhase::Ready(data),
            (None, Some(message)) => FetchPhase::Failed(message),
            (None, None) => FetchPhase::Failed(GENERIC_FAILURE_MESSAGE),
        }
    }
}

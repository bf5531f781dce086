use std::sync::Arc;

use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::error::{FetchError, NO_TOKEN_MESSAGE};
use crate::net::mock_transport::MockTransport;
use crate::net::transport::HttpResponse;

fn request_for(id: &str) -> ResourceRequest {
    ResourceRequest::get(format!("https://admin.test/api/item/{id}"))
}

fn nothing_cached(_: &str) -> Option<String> {
    None
}

fn signed_in() -> Session {
    Session::new("tok", "Admin")
}

fn ok(body: &str) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse { status: 200, body: body.to_owned() })
}

// =============================================================
// start_load
// =============================================================

#[test]
fn prefetched_key_settles_without_network_call() {
    let owner = Owner::new();
    owner.with(|| {
        let mock = Arc::new(MockTransport::new(vec![ok(r#""remote""#)]));
        let state = RwSignal::new(FetchState::<String>::new());

        let load = start_load(state, "1".into(), mock.clone(), signed_in(), &request_for, &|id: &str| {
            Some(format!("cached {id}"))
        });

        assert!(load.is_none());
        assert_eq!(mock.sent_count(), 0);
        state.with_untracked(|s| {
            assert_eq!(s.data.as_deref(), Some("cached 1"));
            assert!(!s.is_loading);
            assert!(s.error.is_none());
        });
    });
}

#[test]
fn missing_token_settles_error_without_network_call() {
    let owner = Owner::new();
    owner.with(|| {
        let mock = Arc::new(MockTransport::new(vec![ok(r#""remote""#)]));
        let state = RwSignal::new(FetchState::<String>::new());

        let load = start_load(state, "1".into(), mock.clone(), Session::default(), &request_for, &nothing_cached)
            .expect("load");
        assert!(block_on(load));

        assert_eq!(mock.sent_count(), 0);
        state.with_untracked(|s| {
            assert_eq!(s.error.as_deref(), Some(NO_TOKEN_MESSAGE));
            assert!(s.data.is_none());
            assert!(!s.is_loading);
        });
    });
}

#[test]
fn response_for_superseded_key_is_discarded() {
    let owner = Owner::new();
    owner.with(|| {
        let mock = Arc::new(MockTransport::new(vec![ok(r#""two""#), ok(r#""one""#)]));
        let state = RwSignal::new(FetchState::<String>::new());

        let first = start_load(state, "1".into(), mock.clone(), signed_in(), &request_for, &nothing_cached)
            .expect("first load");
        let second = start_load(state, "2".into(), mock.clone(), signed_in(), &request_for, &nothing_cached)
            .expect("second load");

        assert!(block_on(second));
        assert!(!block_on(first));

        assert_eq!(mock.sent_count(), 2);
        state.with_untracked(|s| {
            assert_eq!(s.data.as_deref(), Some("two"));
            assert_eq!(s.pending_key(), None);
            assert!(!s.is_loading);
        });
    });
}

#[test]
fn successful_load_applies_payload() {
    let owner = Owner::new();
    owner.with(|| {
        let mock = Arc::new(MockTransport::new(vec![ok(r#""remote""#)]));
        let state = RwSignal::new(FetchState::<String>::new());

        let load = start_load(state, "7".into(), mock.clone(), signed_in(), &request_for, &nothing_cached)
            .expect("load");
        assert!(block_on(load));

        assert_eq!(mock.sent()[0].url, "https://admin.test/api/item/7");
        state.with_untracked(|s| assert_eq!(s.data.as_deref(), Some("remote")));
    });
}

#[test]
fn empty_key_starts_nothing() {
    let owner = Owner::new();
    owner.with(|| {
        let mock = Arc::new(MockTransport::new(vec![ok(r#""remote""#)]));
        let state = RwSignal::new(FetchState::<String>::new());

        let load = start_load(state, String::new(), mock.clone(), signed_in(), &request_for, &nothing_cached);

        assert!(load.is_none());
        assert_eq!(mock.sent_count(), 0);
        state.with_untracked(|s| assert_eq!(s.pending_key(), None));
    });
}

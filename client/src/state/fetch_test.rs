use super::*;

fn server(status: u16, message: &str) -> FetchError {
    FetchError::Server { status, message: message.to_owned() }
}

// =============================================================
// Mount state
// =============================================================

#[test]
fn new_state_is_loading_with_nothing_resolved() {
    let state = FetchState::<u32>::new();
    assert!(state.is_loading);
    assert!(state.data.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.phase(), FetchPhase::Loading);
}

// =============================================================
// settle
// =============================================================

#[test]
fn success_sets_data_only() {
    let mut state = FetchState::new();
    let tag = state.begin("stats");
    assert!(state.settle(&tag, Ok(5)));
    assert_eq!(state.data, Some(5));
    assert!(state.error.is_none());
    assert!(!state.is_loading);
    assert_eq!(state.phase(), FetchPhase::Ready(&5));
}

#[test]
fn failure_sets_error_only() {
    let mut state = FetchState::<u32>::new();
    let tag = state.begin("stats");
    assert!(state.settle(&tag, Err(server(401, "token expired"))));
    assert_eq!(state.data, None);
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("token expired"));
}

#[test]
fn unauthenticated_settles_with_fixed_message() {
    let mut state = FetchState::<u32>::new();
    let tag = state.begin("stats");
    state.settle(&tag, Err(FetchError::Unauthenticated));
    assert_eq!(state.phase(), FetchPhase::Failed("No authentication token found"));
}

#[test]
fn error_branch_never_has_empty_message() {
    let mut state = FetchState::<u32>::new();
    let tag = state.begin("stats");
    state.settle(&tag, Err(server(500, "")));
    assert_eq!(state.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn second_settle_of_same_tag_is_ignored() {
    let mut state = FetchState::new();
    let tag = state.begin("stats");
    assert!(state.settle(&tag, Ok(1)));
    assert!(!state.settle(&tag, Err(server(500, "late"))));
    assert_eq!(state.data, Some(1));
    assert!(state.error.is_none());
}

// =============================================================
// Stale-response guard
// =============================================================

#[test]
fn stale_response_for_previous_key_is_discarded() {
    let mut state = FetchState::new();
    let first = state.begin("notification/1");
    let second = state.begin("notification/2");

    assert!(!state.settle(&first, Ok("one")));
    assert!(state.is_loading);
    assert!(state.data.is_none());
    assert_eq!(state.pending_key(), Some("notification/2"));

    assert!(state.settle(&second, Ok("two")));
    assert_eq!(state.data, Some("two"));
}

#[test]
fn stale_error_does_not_clobber_newer_success() {
    let mut state = FetchState::new();
    let first = state.begin("a");
    let second = state.begin("b");
    state.settle(&second, Ok(2));
    assert!(!state.settle(&first, Err(server(500, "boom"))));
    assert_eq!(state.data, Some(2));
    assert!(state.error.is_none());
}

#[test]
fn reissue_for_same_key_still_rejects_older_request() {
    let mut state = FetchState::new();
    let first = state.begin("a");
    let second = state.begin("a");
    assert_eq!(first.key(), second.key());
    assert!(!state.settle(&first, Ok(1)));
    assert!(state.settle(&second, Ok(2)));
}

#[test]
fn begin_resets_previous_outcome() {
    let mut state = FetchState::<u32>::new();
    let tag = state.begin("a");
    state.settle(&tag, Err(server(404, "missing")));
    state.begin("b");
    assert!(state.is_loading);
    assert!(state.error.is_none());
    assert!(state.data.is_none());
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_short_circuits_to_success() {
    let mut state = FetchState::new();
    state.resolve("notification/3", "cached");
    assert_eq!(state.phase(), FetchPhase::Ready(&"cached"));
    assert_eq!(state.pending_key(), None);
}

#[test]
fn resolve_orphans_in_flight_request() {
    let mut state = FetchState::new();
    let inflight = state.begin("notification/1");
    state.resolve("notification/2", "cached");
    assert!(!state.settle(&inflight, Ok("network")));
    assert_eq!(state.data, Some("cached"));
}

use super::*;
use crate::util::storage::MemoryStorage;

fn store_with(items: &[(&str, &str)]) -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::with_items(items.iter().copied())))
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_backend_spellings() {
    assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    assert_eq!(Role::parse("MARKETANALIZER"), Some(Role::MarketAnalyzer));
}

#[test]
fn role_parse_is_case_sensitive_and_closed() {
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("UNKNOWN_ROLE"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_matches_storage_name() {
    assert_eq!(Role::MarketAnalyzer.to_string(), "MARKETANALIZER");
    assert_eq!(Role::parse(Role::Admin.as_str()), Some(Role::Admin));
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let session = Session { token: Some(String::new()), role: None };
    assert_eq!(session.token(), None);
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn get_reads_token_and_role() {
    let store = store_with(&[("token", "abc"), ("role", "Admin")]);
    let session = store.get();
    assert_eq!(session.token(), Some("abc"));
    assert_eq!(session.role(), Some(Role::Admin));
}

#[test]
fn get_on_empty_storage_is_absent() {
    let store = store_with(&[]);
    assert_eq!(store.get(), Session::default());
}

#[test]
fn clear_removes_both_keys() {
    let store = store_with(&[("token", "abc"), ("role", "Admin"), ("theme", "dark")]);
    store.clear();
    assert_eq!(store.get(), Session::default());
}

#[test]
fn store_then_get_returns_session() {
    let store = store_with(&[]);
    store.store(&Session::new("tok", "MARKETANALIZER"));
    assert_eq!(store.get(), Session::new("tok", "MARKETANALIZER"));
}

#[test]
fn store_with_absent_role_removes_stale_role() {
    let store = store_with(&[("role", "Admin")]);
    store.store(&Session { token: Some("tok".into()), role: None });
    assert_eq!(store.get().role, None);
}

#[test]
fn clones_share_the_same_backend() {
    let store = store_with(&[("token", "abc")]);
    let other = store.clone();
    other.clear();
    assert!(!store.get().is_authenticated());
}

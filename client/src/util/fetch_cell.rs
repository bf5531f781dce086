//! Leptos glue that drives a `FetchState` from a reactive key.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and modals call `use_fetch_cell` once at mount. The effect re-runs
//! whenever a signal read by `key` changes and hands the new key to
//! `start_load`: it begins a new tagged request, short-circuits with a
//! pre-fetched value when one is supplied, and otherwise returns the HTTP
//! load for the effect to spawn. Responses settle through
//! `FetchState::settle`, which drops anything issued for a superseded key.
//! An empty key means "nothing selected" and starts nothing.

#[cfg(test)]
#[path = "fetch_cell_test.rs"]
mod fetch_cell_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::api::fetch_resource;
use crate::net::request::ResourceRequest;
use crate::net::transport::{HttpTransport, SharedTransport};
use crate::state::fetch::FetchState;
use crate::state::session::{Session, SessionStore};

/// Begin loading `key` into `state`.
///
/// Returns the pending network load, which resolves to whether its response
/// was applied. `None` when the key is empty or `prefetched` settled it.
pub fn start_load<T, R, P>(
    state: RwSignal<FetchState<T>>,
    key: String,
    transport: SharedTransport,
    session: Session,
    request_for: &R,
    prefetched: &P,
) -> Option<impl Future<Output = bool> + use<T, R, P>>
where
    T: DeserializeOwned + Send + Sync + 'static,
    R: Fn(&str) -> ResourceRequest,
    P: Fn(&str) -> Option<T>,
{
    if key.is_empty() {
        return None;
    }
    let tag = state.try_update(|s| s.begin(key.clone()))?;

    if let Some(value) = prefetched(&key) {
        state.update(|s| {
            s.settle(&tag, Ok(value));
        });
        return None;
    }

    let request = request_for(&key);
    Some(async move {
        let outcome = fetch_resource::<T, dyn HttpTransport>(transport.as_ref(), &session, &request).await;
        if let Err(err) = &outcome {
            log::warn!("{} {} failed: {err}", request.method.as_str(), request.url);
        }
        let applied = state.try_update(|s| s.settle(&tag, outcome)).unwrap_or(false);
        if !applied {
            log::debug!("discarded stale response for {}", tag.key());
        }
        applied
    })
}

/// Fetch cell keyed by `key`.
///
/// `request_for` builds the request for a key. `prefetched` may return a value
/// already on hand for that key (skipping the network); it should read signals
/// untracked so only `key` drives restarts.
pub fn use_fetch_cell<T, K, R, P>(key: K, request_for: R, prefetched: P) -> RwSignal<FetchState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
    K: Fn() -> String + 'static,
    R: Fn(&str) -> ResourceRequest + 'static,
    P: Fn(&str) -> Option<T> + 'static,
{
    let sessions = expect_context::<SessionStore>();
    let transport = expect_context::<SharedTransport>();
    let state = RwSignal::new(FetchState::<T>::new());

    Effect::new(move || {
        let load = start_load(state, key(), transport.clone(), sessions.get(), &request_for, &prefetched);
        if let Some(load) = load {
            leptos::task::spawn_local(async move {
                load.await;
            });
        }
    });

    state
}

/// Fetch cell for a fixed resource with no pre-fetched value.
pub fn use_resource<T>(request: ResourceRequest) -> RwSignal<FetchState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let key = request.url.clone();
    use_fetch_cell(move || key.clone(), move |_| request.clone(), |_| None)
}

//! Shared loading spinner and inline error for fetch cells.
//!
//! DESIGN
//! ======
//! Dismissing hides the message locally; the cell keeps its error so the
//! lifecycle invariants stay intact.

use leptos::prelude::*;

use crate::state::fetch::{FetchPhase, FetchState};

/// Spinner while `state` is loading, dismissible error text once it failed.
#[component]
pub fn FetchStatus<T>(state: RwSignal<FetchState<T>>, #[prop(into, default = "Loading...".to_owned())] label: String) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let dismissed = RwSignal::new(false);
    let loading = move || state.with(|s| s.is_loading);

    // A new request brings a new error; show it again.
    Effect::new(move || {
        if loading() {
            dismissed.set(false);
        }
    });

    let error = move || {
        state.with(|s| match s.phase() {
            FetchPhase::Failed(message) => Some(message.to_owned()),
            FetchPhase::Loading | FetchPhase::Ready(_) => None,
        })
    };

    view! {
        <Show when=loading>
            <div class="fetch-status fetch-status--loading">
                <div class="spinner"></div>
                <span>{label.clone()}</span>
            </div>
        </Show>
        <Show when=move || error().is_some() && !dismissed.get()>
            <div class="fetch-status fetch-status--error" role="alert">
                <span>{move || error().unwrap_or_default()}</span>
                <button class="fetch-status__dismiss" on:click=move |_| dismissed.set(true) title="Dismiss">
                    "\u{2715}"
                </button>
            </div>
        </Show>
    }
}

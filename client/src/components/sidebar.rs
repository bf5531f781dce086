//! Collapsible role-scoped sidebar with the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::navigation::{LOGOUT_COLOR, NavIcon, entries_for, logout};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

/// Sidebar listing the signed-in role's destinations.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let sessions = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let expanded = move || ui.get().sidebar_open;
    let toggle_expand = move |_| ui.update(UiState::toggle_sidebar);

    let on_logout = move |_| {
        logout(
            &sessions,
            || auth.update(|a| a.user = None),
            |path| navigate(path, NavigateOptions::default()),
        );
    };

    let items = move || {
        entries_for(auth.get().role_name())
            .iter()
            .map(|entry| {
                view! {
                    <A href=entry.path attr:class="sidebar__item">
                        <span class="sidebar__icon" style:color=entry.color>
                            {entry.icon.glyph()}
                        </span>
                        <Show when=expanded>
                            <span class="sidebar__label">{entry.label}</span>
                        </Show>
                    </A>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !expanded()>
            <button class="sidebar__toggle" on:click=toggle_expand title="Toggle sidebar">
                {NavIcon::Menu.glyph()}
            </button>
            <nav class="sidebar__nav">
                {items}
                <div class="sidebar__item sidebar__item--logout" on:click=on_logout>
                    <span class="sidebar__icon" style:color=LOGOUT_COLOR>
                        {NavIcon::LogOut.glyph()}
                    </span>
                    <Show when=expanded>
                        <span class="sidebar__label sidebar__label--logout">"Logout"</span>
                    </Show>
                </div>
            </nav>
        </aside>
    }
}

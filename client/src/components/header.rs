//! Page title bar.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
        </header>
    }
}

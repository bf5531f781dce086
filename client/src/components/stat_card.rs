//! Single metric tile for the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] name: String,
    #[prop(into)] value: String,
    #[prop(into)] color: String,
    #[prop(into)] icon: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__name">
                <span class="stat-card__icon" style:color=color>{icon}</span>
                {name}
            </span>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

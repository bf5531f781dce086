//! Dashboard page: user statistics cards and charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Admin landing route. Loads `/user-stats` once on mount through a fetch
//! cell and derives every card and chart from that single payload.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::charts::{SubscriptionRatioChart, UserGrowthChart};
use crate::components::fetch_status::FetchStatus;
use crate::components::header::Header;
use crate::components::stat_card::StatCard;
use crate::config::ApiConfig;
use crate::net::api::user_stats_request;
use crate::net::types::UserStats;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::chart::compact_count;
use crate::util::fetch_cell::use_resource;

/// `(name, value, color, icon)` for each stat card.
fn stat_cards(stats: &UserStats) -> [(&'static str, String, &'static str, &'static str); 4] {
    [
        ("Total Users", compact_count(stats.total_users), "#6366F1", "\u{1F465}"),
        ("New Users Today", compact_count(stats.new_users_today), "#10B981", "\u{2795}"),
        ("Active Users", compact_count(stats.active_users), "#F59E0B", "\u{26A1}"),
        ("Churn Rate", format!("{:.1}%", stats.churn_rate), "#EF4444", "\u{1F4C9}"),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    install_unauth_redirect(auth, use_navigate());

    let stats = use_resource::<UserStats>(user_stats_request(&config));
    let current = Memo::new(move |_| stats.with(|s| s.data.clone().unwrap_or_default()));

    let cards = move || {
        stat_cards(&current.get())
            .into_iter()
            .map(|(name, value, color, icon)| {
                view! { <StatCard name=name value=value color=color icon=icon/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Header title="Dashboard"/>
            <main class="page__main">
                <FetchStatus state=stats label="Loading statistics..."/>
                <div class="stat-grid">{cards}</div>
                <div class="chart-grid">
                    <SubscriptionRatioChart slices=Signal::derive(move || current.get().subscription_data)/>
                    <UserGrowthChart points=Signal::derive(move || current.get().growth_data)/>
                </div>
            </main>
        </div>
    }
}

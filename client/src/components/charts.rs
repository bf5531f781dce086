//! Dashboard charts drawn as plain CSS bars.

use leptos::prelude::*;

use crate::net::types::{GrowthPoint, SubscriptionSlice};
use crate::util::chart::{bar_heights, compact_count, percentages};

const CHART_HEIGHT_PX: f64 = 180.0;
const SLICE_COLORS: [&str; 5] = ["#6366F1", "#8B5CF6", "#EC4899", "#10B981", "#F59E0B"];

/// Monthly user growth as vertical bars.
#[component]
pub fn UserGrowthChart(#[prop(into)] points: Signal<Vec<GrowthPoint>>) -> impl IntoView {
    let bars = move || {
        let points = points.get();
        let values: Vec<u64> = points.iter().map(|p| p.users).collect();
        let heights = bar_heights(&values, CHART_HEIGHT_PX);
        points
            .into_iter()
            .zip(heights)
            .map(|(point, height)| {
                view! {
                    <div class="bar-chart__column" title=compact_count(point.users)>
                        <div class="bar-chart__bar" style:height=format!("{height:.0}px")></div>
                        <span class="bar-chart__label">{point.month}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="chart-panel">
            <h2 class="chart-panel__title">"User Growth"</h2>
            <Show
                when=move || !points.get().is_empty()
                fallback=|| view! { <p class="chart-panel__empty">"No growth data yet."</p> }
            >
                <div class="bar-chart">{bars}</div>
            </Show>
        </section>
    }
}

/// Subscription tiers as a stacked ratio bar with a legend.
#[component]
pub fn SubscriptionRatioChart(#[prop(into)] slices: Signal<Vec<SubscriptionSlice>>) -> impl IntoView {
    let segments = move || {
        let slices = slices.get();
        let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
        let shares = percentages(&values);
        slices
            .into_iter()
            .zip(shares)
            .enumerate()
            .map(|(i, (slice, share))| {
                let color = SLICE_COLORS[i % SLICE_COLORS.len()];
                view! {
                    <li class="ratio-chart__item">
                        <span class="ratio-chart__swatch" style:background-color=color></span>
                        <span class="ratio-chart__name">{slice.name}</span>
                        <span class="ratio-chart__share">{format!("{share:.1}%")}</span>
                        <div class="ratio-chart__track">
                            <div
                                class="ratio-chart__fill"
                                style:width=format!("{share}%")
                                style:background-color=color
                            ></div>
                        </div>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="chart-panel">
            <h2 class="chart-panel__title">"Subscription Ratio"</h2>
            <Show
                when=move || !slices.get().is_empty()
                fallback=|| view! { <p class="chart-panel__empty">"No subscription data yet."</p> }
            >
                <ul class="ratio-chart">{segments}</ul>
            </Show>
        </section>
    }
}

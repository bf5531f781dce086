//! News page: table of published articles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::fetch_status::FetchStatus;
use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::net::api::news_request;
use crate::net::types::NewsArticle;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::fetch_cell::use_resource;

#[component]
pub fn NewsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    install_unauth_redirect(auth, use_navigate());

    let news = use_resource::<Vec<NewsArticle>>(news_request(&config));

    let rows = move || {
        news.with(|s| s.data.clone().unwrap_or_default())
            .into_iter()
            .map(|a| {
                view! {
                    <tr>
                        <td>{a.title}</td>
                        <td class="table__muted">{a.author}</td>
                        <td>{a.published_at.unwrap_or_else(|| "Draft".to_owned())}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Header title="News"/>
            <main class="page__main">
                <FetchStatus state=news label="Loading news..."/>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Author"</th>
                            <th>"Published"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </main>
        </div>
    }
}

//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::config::ApiConfig;
use crate::net::transport::{BrowserTransport, SharedTransport};
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, news::NewsPage, notifications::NotificationsPage,
    users::UsersPage,
};
use crate::state::{auth::AuthState, session::SessionStore, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Sidebar plus the routed page.
#[component]
fn DashboardLayout() -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <div class="layout__content">
                <Outlet/>
            </div>
        </div>
    }
}

/// Root application component.
///
/// Provides the session store, API config, HTTP transport, auth and layout
/// state, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sessions = SessionStore::browser();
    // Storage is only readable in the browser, so auth starts as loading and
    // is resolved once mounted.
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let ui = RwSignal::new(UiState::default());

    {
        let sessions = sessions.clone();
        Effect::new(move || auth.set(AuthState::from_session(&sessions.get())));
    }

    provide_context(sessions);
    provide_context(ApiConfig::from_build_env());
    provide_context::<SharedTransport>(Arc::new(BrowserTransport));
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-dashboard.css"/>
        <Title text="Admin Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

//! Notifications page: list plus the edit modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the loaded list and the modal's draft. Saving is done here, not in the
//! modal: `PUT /notification/{id}`, then the row is replaced locally and the
//! modal closed, or the draft gets the failure and the modal stays open.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::edit_notification_modal::EditNotificationModal;
use crate::components::fetch_status::FetchStatus;
use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::net::api::{notifications_request, save_notification};
use crate::net::transport::SharedTransport;
use crate::net::types::Notification;
use crate::state::auth::AuthState;
use crate::state::draft::{DraftState, replace_by_id};
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;
use crate::util::fetch_cell::use_resource;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    let sessions = expect_context::<SessionStore>();
    let transport = expect_context::<SharedTransport>();
    install_unauth_redirect(auth, use_navigate());

    let fetched = use_resource::<Vec<Notification>>(notifications_request(&config));
    let items = RwSignal::new(Vec::<Notification>::new());
    Effect::new(move || {
        if let Some(list) = fetched.with(|s| s.data.clone()) {
            items.set(list);
        }
    });

    let editing = RwSignal::new(None::<String>);
    let draft = RwSignal::new(DraftState::<Notification>::default());

    let on_close = Callback::new(move |()| editing.set(None));
    let on_save = Callback::new(move |record: Notification| {
        let config = config.clone();
        let transport = transport.clone();
        let session = sessions.get();
        leptos::task::spawn_local(async move {
            let outcome = save_notification(transport.as_ref(), &session, &config, &record).await;
            match outcome {
                Ok(()) => {
                    items.update(|list| {
                        replace_by_id(list, record);
                    });
                    draft.update(|d| d.finish_submit(Ok(())));
                    editing.set(None);
                }
                Err(err) => draft.update(|d| d.finish_submit(Err(err.user_message()))),
            }
        });
    });

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|n| {
                let id = n.id.clone();
                view! {
                    <tr>
                        <td>{n.title}</td>
                        <td class="table__muted">{n.content}</td>
                        <td><span class="badge">{n.kind}</span></td>
                        <td>
                            <button class="btn btn--small" on:click=move |_| editing.set(Some(id.clone()))>
                                "Edit"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Header title="Notifications"/>
            <main class="page__main">
                <FetchStatus state=fetched label="Loading notifications..."/>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Content"</th>
                            <th>"Type"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </main>
            <Show when=move || editing.get().is_some()>
                <EditNotificationModal
                    notification_id=Signal::derive(move || editing.get().unwrap_or_default())
                    all_notifications=items
                    draft=draft
                    on_close=on_close
                    on_save=on_save
                />
            </Show>
        </div>
    }
}

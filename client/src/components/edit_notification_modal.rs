//! Modal for editing one notification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record comes from the caller's loaded list when present, otherwise from
//! `GET /notification/{id}`. Edits go to the caller-owned `DraftState`; Save
//! hands the draft to `on_save`, which persists it, reports back through
//! `DraftState::finish_submit`, and closes the modal on success.

#[cfg(test)]
#[path = "edit_notification_modal_test.rs"]
mod edit_notification_modal_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::notification_request;
use crate::net::types::Notification;
use crate::state::draft::{DraftState, find_by_id};
use crate::state::fetch::FetchPhase;
use crate::util::fetch_cell::use_fetch_cell;

pub const NOT_FOUND_MESSAGE: &str = "Notification not found";

/// Current text of a form field, empty when there is no draft.
fn field_value(state: &DraftState<Notification>, name: &str) -> String {
    state
        .draft
        .as_ref()
        .map(|n| match name {
            "title" => n.title.clone(),
            "content" => n.content.clone(),
            "type" => n.kind.clone(),
            _ => String::new(),
        })
        .unwrap_or_default()
}

/// Load-failure text for the error view, if the modal cannot show the form.
/// A `null` body from the backend resolves to `Ready(None)`.
fn blocking_error(phase: &FetchPhase<'_, Option<Notification>>) -> Option<String> {
    match phase {
        FetchPhase::Loading | FetchPhase::Ready(Some(_)) => None,
        FetchPhase::Failed(message) => Some((*message).to_owned()),
        FetchPhase::Ready(None) => Some(NOT_FOUND_MESSAGE.to_owned()),
    }
}

#[component]
pub fn EditNotificationModal(
    #[prop(into)] notification_id: Signal<String>,
    #[prop(into)] all_notifications: Signal<Vec<Notification>>,
    draft: RwSignal<DraftState<Notification>>,
    on_close: Callback<()>,
    on_save: Callback<Notification>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let record = use_fetch_cell::<Option<Notification>, _, _, _>(
        move || notification_id.get(),
        move |id| notification_request(&config, id),
        move |id| all_notifications.with_untracked(|items| find_by_id(items, id)).map(Some),
    );

    // Mirror the resolved record into the draft.
    Effect::new(move || match record.with(|s| s.data.clone().flatten()) {
        Some(found) => draft.update(|d| d.load(found)),
        None => draft.set(DraftState::default()),
    });

    let loading = move || record.with(|s| s.is_loading);
    let load_error = move || record.with(|s| blocking_error(&s.phase()));

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let submit = move |_| {
        if let Some(record) = draft.try_update(DraftState::begin_submit).flatten() {
            on_save.run(record);
        }
    };

    let bind = move |name: &'static str| {
        (
            move || draft.with(|d| field_value(d, name)),
            move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                draft.update(|d| {
                    d.edit(name, value);
                });
            },
        )
    };
    let (title_value, on_title) = bind("title");
    let (content_value, on_content) = bind("content");
    let (type_value, on_type) = bind("type");

    let submitting = move || draft.with(|d| d.is_submitting);
    let save_error = move || draft.with(|d| d.error.clone());

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--notification"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <Show when=loading>
                    <div class="dialog__loading">
                        <div class="spinner"></div>
                        <span>"Loading..."</span>
                    </div>
                </Show>
                <Show when=move || !loading() && load_error().is_some()>
                    <p class="dialog__danger">{move || load_error().unwrap_or_default()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                    </div>
                </Show>
                <Show when=move || !loading() && load_error().is_none()>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "\u{2715}"
                    </button>
                    <h2>"Edit Notification"</h2>
                    <Show when=move || save_error().is_some()>
                        <p class="dialog__danger">{move || save_error().unwrap_or_default()}</p>
                    </Show>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            name="title"
                            prop:value=title_value
                            on:input=on_title
                        />
                    </label>
                    <label class="dialog__label">
                        "Content"
                        <textarea
                            class="dialog__input"
                            name="content"
                            prop:value=content_value
                            on:input=on_content
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Type"
                        <input
                            class="dialog__input"
                            type="text"
                            name="type"
                            prop:value=type_value
                            on:input=on_type
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=submit disabled=submitting>
                            {move || if submitting() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

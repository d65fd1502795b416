//! The shared create/edit form for student and faculty records
//!
//! One component serves all four flows (create/edit x student/faculty). The
//! actual field values and request lifecycle live in [`FormState`]; this file
//! binds them to the DOM and owns the per-form abort controller.

use leptos::prelude::*;
use leptos::web_sys;

use crate::api;
use crate::form_state::{FormField, FormState, Phase};
use crate::session::Session;
use crate::types::{Role, UserRecord};

/// Create/edit form for one record. Passing `user` switches the form to edit
/// mode: fields are prefilled, the password field disappears, and delete
/// becomes available. Editing as a non-admin renders everything read-only.
#[component]
pub fn UserForm(
    role: Role,
    session: Session,
    #[prop(optional)] user: Option<UserRecord>,
) -> impl IntoView {
    let editing = user.is_some();
    let is_admin = session.is_admin();
    let read_only = editing && !is_admin;
    let record_id = user.as_ref().map(|u| u.id.clone());

    let state = RwSignal::new(match user.as_ref() {
        Some(record) => FormState::from_record(record),
        None => FormState::new(),
    });

    // One controller covers every request this form issues. Aborting it on
    // cleanup, together with the try_update writes below, keeps responses
    // that outlive the form from touching disposed state.
    let controller = StoredValue::new_local(web_sys::AbortController::new().ok());
    on_cleanup(move || {
        controller.with_value(|ctrl| {
            if let Some(ctrl) = ctrl {
                ctrl.abort();
            }
        })
    });

    let fetch_token = session.token.clone();
    let divisions = LocalResource::new(move || {
        let token = fetch_token.clone();
        let abort = controller.with_value(|ctrl| ctrl.as_ref().map(|c| c.signal()));
        async move {
            match api::list_divisions(&token, abort.as_ref()).await {
                Ok(list) => list,
                Err(e) => {
                    // The selector just stays empty; an existing student
                    // keeps their stored division and everything else works.
                    log::warn!("Failed to load divisions: {}", e);
                    Vec::new()
                }
            }
        }
    });

    let submit_token = session.token.clone();
    let submit_id = record_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = state.try_update(|s| s.begin_submit(role, editing)).flatten() else {
            return;
        };
        let token = submit_token.clone();
        let id = submit_id.clone();
        let abort = controller.with_value(|ctrl| ctrl.as_ref().map(|c| c.signal()));
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_user(&token, id, &payload, abort.as_ref()).await,
                None => api::add_user(&token, &payload, abort.as_ref()).await,
            };
            if state.try_update(|s| s.finish(result)).unwrap_or(false) {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(role.list_path());
                }
            }
        });
    };

    let delete_token = session.token.clone();
    let delete_id = record_id.clone();
    let on_delete = move |_| {
        let Some(id) = delete_id.clone() else {
            return;
        };
        if !state.try_update(|s| s.begin_delete()).unwrap_or(false) {
            return;
        }
        let token = delete_token.clone();
        let abort = controller.with_value(|ctrl| ctrl.as_ref().map(|c| c.signal()));
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::delete_user(&token, &id, abort.as_ref()).await;
            if state.try_update(|s| s.finish(result)).unwrap_or(false) {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(role.list_path());
                }
            }
        });
    };

    let on_cancel = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(role.list_path());
        }
    };

    view! {
        {move || state.with(|s| s.message.clone()).map(|message| view! {
            <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                {message}
            </div>
        })}

        <form on:submit=on_submit class="bg-white rounded-lg shadow p-6">
            <div class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Name"</label>
                    <input
                        type="text"
                        required=true
                        disabled=read_only
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                        prop:value=move || state.with(|s| s.name.clone())
                        on:input=move |ev| state.update(|s| s.edit(FormField::Name, event_target_value(&ev)))
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                    <input
                        type="email"
                        required=true
                        disabled=read_only
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                        prop:value=move || state.with(|s| s.email.clone())
                        on:input=move |ev| state.update(|s| s.edit(FormField::Email, event_target_value(&ev)))
                    />
                </div>

                // Passwords are set at creation and never shown again.
                {(!editing).then(|| view! {
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                        <input
                            type="password"
                            required=true
                            disabled=read_only
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                            prop:value=move || state.with(|s| s.password.clone())
                            on:input=move |ev| state.update(|s| s.edit(FormField::Password, event_target_value(&ev)))
                        />
                    </div>
                })}

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Image URL"</label>
                    <input
                        type="text"
                        required=true
                        disabled=read_only
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                        prop:value=move || state.with(|s| s.image_url.clone())
                        on:input=move |ev| state.update(|s| s.edit(FormField::ImageUrl, event_target_value(&ev)))
                    />
                </div>

                {(role == Role::Student).then(|| view! {
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Roll Number"</label>
                        <input
                            type="number"
                            required=true
                            disabled=read_only
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                            prop:value=move || state.with(|s| s.roll_number.clone())
                            on:input=move |ev| state.update(|s| s.edit(FormField::RollNumber, event_target_value(&ev)))
                        />
                    </div>
                })}

                {(role == Role::Student).then(|| view! {
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Class"</label>
                        <select
                            disabled=read_only
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                            on:change=move |ev| state.update(|s| s.edit(FormField::Division, event_target_value(&ev)))
                        >
                            <option value="" prop:selected=move || state.with(|s| s.division.is_empty())>
                                "--Please choose the class--"
                            </option>
                            {move || divisions.get().map(|list| list.into_iter().map(|division| {
                                let id = division.id.clone();
                                view! {
                                    <option
                                        value=division.id.clone()
                                        prop:selected=move || state.with(|s| s.division == id)
                                    >
                                        {division.name.clone()}
                                    </option>
                                }
                            }).collect::<Vec<_>>())}
                        </select>
                    </div>
                })}
            </div>

            {is_admin.then(|| view! {
                <div class="mt-6 flex gap-3">
                    <button
                        type="button"
                        class="px-4 py-2 border border-gray-300 text-gray-700 rounded hover:bg-gray-50 disabled:opacity-50"
                        disabled=move || state.with(|s| s.is_busy())
                        on:click=on_cancel
                    >
                        "Cancel"
                    </button>
                    {editing.then(|| view! {
                        <button
                            type="button"
                            class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700 disabled:opacity-50"
                            disabled=move || state.with(|s| s.is_busy())
                            on:click=on_delete
                        >
                            {move || if state.with(|s| s.phase == Phase::Deleting) { "Deleting..." } else { "Delete" }}
                        </button>
                    })}
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || state.with(|s| s.is_busy())
                    >
                        {move || if state.with(|s| s.phase == Phase::Submitting) { "Saving..." } else { "Save" }}
                    </button>
                </div>
            })}
        </form>
    }
}

//! Roster pages for students and faculty
//!
//! One set of components serves both roles; the [`Role`] passed in from the
//! route decides the endpoint, the headings, and the roll number column.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::user_form::UserForm;
use crate::session::{use_session, Session};
use crate::types::{Role, UserRecord};

#[component]
pub fn UsersPage(role: Role) -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.0.get() {
            Some(session) => view! { <UserList role=role session=session/> }.into_any(),
            None => view! {
                <div class="p-6">
                    <SignedOutNotice/>
                </div>
            }.into_any(),
        }}
    }
}

#[component]
fn UserList(role: Role, session: Session) -> impl IntoView {
    let is_admin = session.is_admin();
    let token = session.token.clone();
    let users = LocalResource::new(move || {
        let token = token.clone();
        async move { api::list_users(&token, role, None).await.ok() }
    });

    view! {
        <div class="p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold">{role.plural_label()}</h2>
                {is_admin.then(|| view! {
                    <A
                        href=format!("{}/new", role.list_path())
                        attr:class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded"
                    >
                        {format!("+ New {}", role.label())}
                    </A>
                })}
            </div>

            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
                {move || {
                    users.get().map(|data| {
                        match data {
                            Some(list) if !list.is_empty() => view! {
                                <div class="bg-white rounded-lg shadow overflow-hidden">
                                    <table class="min-w-full divide-y divide-gray-200">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Name"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Email"</th>
                                                {(role == Role::Student).then(|| view! {
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Roll Number"</th>
                                                })}
                                                <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="bg-white divide-y divide-gray-200">
                                            {list.into_iter().map(|user| {
                                                view! { <UserRow role=role user=user is_admin=is_admin/> }
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_any(),
                            Some(_) => view! {
                                <div class="text-center py-12 bg-white rounded-lg shadow">
                                    <p class="text-gray-500">{format!("No {} yet", role.plural_label().to_lowercase())}</p>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="text-red-500">{format!("Failed to load {}", role.plural_label().to_lowercase())}</div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn UserRow(role: Role, user: UserRecord, is_admin: bool) -> impl IntoView {
    let edit_href = format!("{}/edit/{}", role.list_path(), user.id);
    let roll = user.roll_number.clone().unwrap_or_else(|| "-".to_string());

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-3">
                    {(!user.image_url.is_empty()).then(|| view! {
                        <img src=user.image_url.clone() alt="" class="w-8 h-8 rounded-full object-cover"/>
                    })}
                    <div class="font-medium text-gray-900">{user.name.clone()}</div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{user.email.clone()}</td>
            {(role == Role::Student).then(|| view! {
                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{roll}</td>
            })}
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                <A href=edit_href attr:class="text-blue-600 hover:text-blue-900">
                    {if is_admin { "Edit" } else { "View" }}
                </A>
            </td>
        </tr>
    }
}

#[component]
pub fn NewUserPage(role: Role) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="p-6 max-w-2xl">
            <div class="mb-6">
                <A href=role.list_path() attr:class="text-blue-500 hover:underline">
                    {format!("← Back to {}", role.plural_label())}
                </A>
            </div>
            <h2 class="text-2xl font-bold mb-6">{format!("New {}", role.label())}</h2>

            {move || match session.0.get() {
                Some(session) => view! { <UserForm role=role session=session/> }.into_any(),
                None => view! { <SignedOutNotice/> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn EditUserPage(role: Role) -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="p-6 max-w-2xl">
            <div class="mb-6">
                <A href=role.list_path() attr:class="text-blue-500 hover:underline">
                    {format!("← Back to {}", role.plural_label())}
                </A>
            </div>
            <h2 class="text-2xl font-bold mb-6">{format!("Edit {}", role.label())}</h2>

            {move || match session.0.get() {
                Some(session) => view! { <RecordLoader role=role session=session id=id()/> }.into_any(),
                None => view! { <SignedOutNotice/> }.into_any(),
            }}
        </div>
    }
}

/// Fetches the record behind an edit route, then hands it to the form.
#[component]
fn RecordLoader(role: Role, session: Session, id: String) -> impl IntoView {
    let token = session.token.clone();
    let fetch_id = id.clone();
    let record = LocalResource::new(move || {
        let token = token.clone();
        let id = fetch_id.clone();
        async move { api::get_user(&token, &id, None).await }
    });

    view! {
        <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
            {move || {
                record.get().map(|result| {
                    match result {
                        Ok(user) => view! {
                            <UserForm role=role session=session.clone() user=user/>
                        }.into_any(),
                        Err(e) => view! {
                            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded">
                                {e.to_string()}
                            </div>
                        }.into_any(),
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn SignedOutNotice() -> impl IntoView {
    view! {
        <div class="bg-blue-50 border border-blue-200 rounded-lg p-4">
            <p class="text-blue-800">
                <strong>"Not signed in."</strong>
                " Sign in from the school portal, then reload this page."
            </p>
        </div>
    }
}

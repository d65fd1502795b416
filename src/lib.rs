use leptos::prelude::*;
use leptos_router::components::{Router, Route, Routes, A};
use leptos_router::path;

mod api;
mod form_state;
mod session;
mod types;
mod components;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod form_state_test;

use components::dashboard::Dashboard;
use components::users::{EditUserPage, NewUserPage, UsersPage};
use session::{provide_session, use_session};
use types::Role;

#[component]
pub fn App() -> impl IntoView {
    provide_session();
    let session = use_session();

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-64 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">"Campus Admin"</h1>
                    <nav class="space-y-1 flex-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/students" label="Students" />
                        <NavLink href="/faculty" label="Faculty" />
                    </nav>
                    <div class="text-xs text-gray-500 mt-4">
                        {move || match session.0.get() {
                            Some(session) => format!("Signed in as {}", session.user.name),
                            None => "Signed out".to_string(),
                        }}
                    </div>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Dashboard/>
                        <Route path=path!("/students/new") view=|| view! { <NewUserPage role=Role::Student/> }/>
                        <Route path=path!("/students/edit/:id") view=|| view! { <EditUserPage role=Role::Student/> }/>
                        <Route path=path!("/students") view=|| view! { <UsersPage role=Role::Student/> }/>
                        <Route path=path!("/faculty/new") view=|| view! { <NewUserPage role=Role::Faculty/> }/>
                        <Route path=path!("/faculty/edit/:id") view=|| view! { <EditUserPage role=Role::Faculty/> }/>
                        <Route path=path!("/faculty") view=|| view! { <UsersPage role=Role::Faculty/> }/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
            {label}
        </A>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}

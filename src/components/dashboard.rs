use leptos::prelude::*;

use crate::api;
use crate::session::{use_session, Session};
use crate::types::{Role, UserRecord};

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-6">"Dashboard"</h2>

            {move || match session.0.get() {
                Some(session) => view! { <RosterOverview session=session/> }.into_any(),
                None => view! {
                    <div class="bg-blue-50 border border-blue-200 rounded-lg p-4">
                        <p class="text-blue-800">
                            <strong>"Not signed in."</strong>
                            " Sign in from the school portal to manage students and faculty."
                        </p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RosterOverview(session: Session) -> impl IntoView {
    let greeting = format!("Signed in as {}", session.user.name);
    let note = if session.is_admin() {
        "You can create, edit, and delete student and faculty records."
    } else {
        "Records are read-only for your role."
    };

    let students_token = session.token.clone();
    let students = LocalResource::new(move || {
        let token = students_token.clone();
        async move { api::list_users(&token, Role::Student, None).await.ok() }
    });
    let faculty_token = session.token.clone();
    let faculty = LocalResource::new(move || {
        let token = faculty_token.clone();
        async move { api::list_users(&token, Role::Faculty, None).await.ok() }
    });

    view! {
        <div class="bg-white p-4 rounded-lg shadow mb-6">
            <h3 class="text-lg font-semibold text-gray-700 mb-2">{greeting}</h3>
            <p class="text-sm text-gray-500">{note}</p>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <StatCard title="Students" color="blue" href="/students" roster=students/>
            <StatCard title="Faculty" color="green" href="/faculty" roster=faculty/>
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    color: &'static str,
    href: &'static str,
    roster: LocalResource<Option<Vec<UserRecord>>>,
) -> impl IntoView {
    let bg_class = match color {
        "blue" => "bg-blue-50 border-blue-200",
        "green" => "bg-green-50 border-green-200",
        _ => "bg-gray-50 border-gray-200",
    };

    let text_class = match color {
        "blue" => "text-blue-600",
        "green" => "text-green-600",
        _ => "text-gray-600",
    };

    view! {
        <div class=format!("p-4 rounded-lg border-2 {} hover:shadow-md transition-shadow", bg_class)>
            <a href=href class="block">
                <h3 class="font-bold text-gray-500 text-sm uppercase tracking-wide">{title}</h3>
                <p class=format!("text-3xl font-bold {}", text_class)>
                    {move || match roster.get() {
                        Some(Some(list)) => list.len().to_string(),
                        Some(None) => "?".to_string(),
                        None => "-".to_string(),
                    }}
                </p>
            </a>
        </div>
    }
}

//! Session state: the signed-in user and bearer token
//!
//! Sign-in itself happens outside this app; the login flow leaves a session
//! record in localStorage and this module hydrates it once at startup. Pages
//! read it through context and pass it into forms explicitly.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const SESSION_STORAGE_KEY: &str = "campus-admin-session";

/// Role of the signed-in user. Only admins may create, edit, or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionRole {
    Admin,
    Student,
    Faculty,
}

impl SessionRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, SessionRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(rename = "type")]
    pub role: SessionRole,
}

/// Bearer token plus the user it was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}

/// Reactive session handle shared through context; `None` means signed out.
#[derive(Clone, Copy)]
pub struct SessionContext(pub RwSignal<Option<Session>>);

pub fn provide_session() {
    provide_context(SessionContext(RwSignal::new(load_session())));
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Read the stored session. Absent or unreadable storage means signed out.
fn load_session() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    parse_session(&raw)
}

/// Decode a stored session. Malformed entries are dropped with a warning and
/// the app treats the user as signed out.
pub(crate) fn parse_session(raw: &str) -> Option<Session> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("Ignoring stored session that failed to parse: {}", err);
            None
        }
    }
}

//! Shared types for the Campus Admin UI
//!
//! These types mirror the backend API request and response structures.

use serde::{Deserialize, Serialize};

/// Kind of record a form or roster page works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    /// Roster route for this role, also the navigation target after a
    /// successful save or delete.
    pub fn list_path(&self) -> &'static str {
        match self {
            Role::Student => "/students",
            Role::Faculty => "/faculty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            Role::Student => "Students",
            Role::Faculty => "Faculty",
        }
    }
}

/// A student or faculty record as stored by the backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "roll_number_as_string")]
    pub roll_number: Option<String>,
    /// Division id for students; absent for faculty.
    #[serde(default)]
    pub division: Option<String>,
    #[serde(rename = "type")]
    pub role: Role,
}

/// Roll numbers arrive as either a JSON number or a string depending on how
/// the record was created; normalize both to a string.
fn roll_number_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n.to_string()),
        Some(Raw::Text(s)) => Some(s),
        None => None,
    })
}

/// A class division a student can be assigned to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Division {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "divisionName")]
    pub name: String,
}

/// Request body for the add and update endpoints; a direct mapping of the
/// form values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub roll_number: String,
    pub division: String,
    pub password: String,
    #[serde(rename = "type")]
    pub role: Role,
}

/// Response body shared by the mutation endpoints; the message is shown to
/// the user verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DivisionsResponse {
    pub divisions: Vec<Division>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

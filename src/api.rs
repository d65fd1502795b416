//! API client for the school records backend
//!
//! Every call carries a bearer token, and failures are reported through
//! [`ApiError`] according to the backend's status contract: 500 is opaque,
//! any other status >= 300 surfaces the backend's own message.

use crate::types::*;
use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::AbortSignal;

/// Backend origin, fixed at build time.
const API_BASE: &str = match option_env!("CAMPUS_ADMIN_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000",
};

/// Errors surfaced by API calls. Display strings are shown to the user
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Status 500 exactly; the body is not read.
    #[error("Something went wrong.")]
    ServerFailure,

    /// Any other status >= 300; carries the backend's message.
    #[error("{0}")]
    Rejected(String),

    /// Network failure or a body that did not parse.
    #[error("{0}")]
    Transport(String),
}

/// How a response status maps onto the three UI outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    Success,
    Rejected,
    ServerFailure,
}

pub(crate) fn classify_status(status: u16) -> StatusClass {
    match status {
        500 => StatusClass::ServerFailure,
        s if s >= 300 => StatusClass::Rejected,
        _ => StatusClass::Success,
    }
}

/// Create a student or faculty record
pub async fn add_user(
    token: &str,
    payload: &UserPayload,
    abort: Option<&AbortSignal>,
) -> Result<MessageResponse, ApiError> {
    let url = format!("{}/admin/add-user", API_BASE);
    post_json(&url, token, payload, abort).await
}

/// Overwrite an existing record with the given form values
pub async fn update_user(
    token: &str,
    id: &str,
    payload: &UserPayload,
    abort: Option<&AbortSignal>,
) -> Result<MessageResponse, ApiError> {
    let encoded_id = urlencoding_encode(id);
    let url = format!("{}/admin/update-user/{}", API_BASE, encoded_id);
    post_json(&url, token, payload, abort).await
}

/// Delete a record by id
pub async fn delete_user(
    token: &str,
    id: &str,
    abort: Option<&AbortSignal>,
) -> Result<MessageResponse, ApiError> {
    let encoded_id = urlencoding_encode(id);
    let url = format!("{}/admin/delete-user/{}", API_BASE, encoded_id);
    delete_json(&url, token, abort).await
}

/// Fetch the class divisions that populate the student division selector
pub async fn list_divisions(
    token: &str,
    abort: Option<&AbortSignal>,
) -> Result<Vec<Division>, ApiError> {
    let url = format!("{}/get-classes", API_BASE);
    let body: DivisionsResponse = get_json(&url, token, abort).await?;
    Ok(body.divisions)
}

/// Fetch the roster for one role
pub async fn list_users(
    token: &str,
    role: Role,
    abort: Option<&AbortSignal>,
) -> Result<Vec<UserRecord>, ApiError> {
    let url = format!("{}/admin/get-users/{}", API_BASE, role.as_str());
    let body: UsersResponse = get_json(&url, token, abort).await?;
    Ok(body.users)
}

/// Fetch a single record for the edit form
pub async fn get_user(
    token: &str,
    id: &str,
    abort: Option<&AbortSignal>,
) -> Result<UserRecord, ApiError> {
    let encoded_id = urlencoding_encode(id);
    let url = format!("{}/admin/get-user/{}", API_BASE, encoded_id);
    let body: UserResponse = get_json(&url, token, abort).await?;
    Ok(body.user)
}

// ============================================================================
// Helper functions
// ============================================================================

fn urlencoding_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    token: &str,
    abort: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Authorization", &format!("Bearer {}", token))
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

    read_json(response).await
}

async fn post_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    token: &str,
    body: &T,
    abort: Option<&AbortSignal>,
) -> Result<R, ApiError> {
    let response = Request::post(url)
        .header("Authorization", &format!("Bearer {}", token))
        .abort_signal(abort)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

    read_json(response).await
}

async fn delete_json<R: serde::de::DeserializeOwned>(
    url: &str,
    token: &str,
    abort: Option<&AbortSignal>,
) -> Result<R, ApiError> {
    let response = Request::delete(url)
        .header("Authorization", &format!("Bearer {}", token))
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

    read_json(response).await
}

/// Apply the status contract, then parse the body.
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match classify_status(response.status()) {
        StatusClass::ServerFailure => Err(ApiError::ServerFailure),
        StatusClass::Rejected => {
            let body: MessageResponse = response
                .json()
                .await
                .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))?;
            Err(ApiError::Rejected(body.message))
        }
        StatusClass::Success => response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e))),
    }
}

//! State machine for the user create/edit form
//!
//! Holds the field values, the request phase, and the inline message.
//! Validation, the submit/delete lifecycle, and payload construction are
//! plain methods with no framework types; the component layer wires these
//! transitions to the DOM.

use crate::api::ApiError;
use crate::types::{MessageResponse, Role, UserPayload, UserRecord};

/// Editable fields of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ImageUrl,
    RollNumber,
    Division,
}

/// What the form is currently doing. Requests only start from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Deleting,
}

/// The form's entire mutable state. Field writes go through [`FormState::edit`];
/// the request lifecycle goes through `begin_submit`/`begin_delete` and
/// [`FormState::finish`].
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image_url: String,
    pub roll_number: String,
    /// Selected division id, empty when none is chosen.
    pub division: String,
    pub phase: Phase,
    /// Inline message shown under the fields, success and failure alike.
    pub message: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from a fetched record. The password is never echoed back.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            password: String::new(),
            image_url: record.image_url.clone(),
            roll_number: record.roll_number.clone().unwrap_or_default(),
            division: record.division.clone().unwrap_or_default(),
            phase: Phase::Idle,
            message: None,
        }
    }

    /// Single entry point for field edits.
    pub fn edit(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ImageUrl => self.image_url = value,
            FormField::RollNumber => self.roll_number = value,
            FormField::Division => self.division = value,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Validate and enter `Submitting`. Returns the request payload to send,
    /// or `None` when the form is busy or invalid. Invalid forms get their
    /// message set; busy forms are left untouched.
    pub fn begin_submit(&mut self, role: Role, editing: bool) -> Option<UserPayload> {
        if self.is_busy() {
            return None;
        }
        if let Some(problem) = self.validate(role, editing) {
            self.message = Some(problem.to_string());
            return None;
        }
        self.phase = Phase::Submitting;
        self.message = None;
        Some(self.payload(role))
    }

    /// Enter `Deleting` unless a request is already in flight.
    pub fn begin_delete(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = Phase::Deleting;
        self.message = None;
        true
    }

    /// Record the outcome of a submit or delete. The backend message (or the
    /// error's) becomes the inline message either way; the return value says
    /// whether to navigate back to the roster.
    pub fn finish(&mut self, result: Result<MessageResponse, ApiError>) -> bool {
        self.phase = Phase::Idle;
        match result {
            Ok(body) => {
                self.message = Some(body.message);
                true
            }
            Err(err) => {
                self.message = Some(err.to_string());
                false
            }
        }
    }

    /// Request body for the current values, mapped one-to-one onto the wire
    /// fields. The selected division id travels under `division`.
    pub fn payload(&self, role: Role) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
            roll_number: self.roll_number.clone(),
            division: self.division.clone(),
            password: self.password.clone(),
            role,
        }
    }

    /// First unmet requirement, if any. The division check runs first so a
    /// student form always asks for the class before anything else.
    fn validate(&self, role: Role, editing: bool) -> Option<&'static str> {
        if role == Role::Student && self.division.is_empty() {
            return Some("Choose a class from dropdown.");
        }
        if self.name.trim().is_empty() {
            return Some("Name is required.");
        }
        if self.email.trim().is_empty() {
            return Some("Email is required.");
        }
        if !editing && self.password.is_empty() {
            return Some("Password is required.");
        }
        None
    }
}
